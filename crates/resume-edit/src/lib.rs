//! Resume document editing operations.
//!
//! This crate provides the mutation layer over [`resume_model::ResumeDocument`]:
//!
//! - **editor**: pure document-to-document operations (field edits, entry
//!   add/update/remove, skill dedup, language rows)
//! - **text**: the text-list codec for bullet and technology editing
//!
//! Every operation takes the current document by reference and returns the
//! next document value; the input snapshot is never modified.

pub mod editor;
pub mod text;

pub use editor::{
    EducationField, ExperienceField, LanguageField, PersonalField, ProjectField, add_education,
    add_experience, add_language, add_project, add_skill, remove_entry, remove_language,
    remove_skill, set_bullets_from_text, set_language_field, set_personal_field, set_summary,
    set_technologies_from_text, update_education, update_experience, update_project,
};
pub use text::{join_bullet_lines, join_technologies, split_bullet_lines, split_technologies};
