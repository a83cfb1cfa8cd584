//! Pure editing operations over a resume document.
//!
//! Each operation takes the current document and returns the next document
//! value. The input is never mutated, so a snapshot handed to the renderer
//! stays valid while edits continue. Operations addressed by id or index
//! degrade to a no-op when the target is absent; the caller cannot hold an
//! id that did not come from the document, so a miss is recoverable, not an
//! error.

use tracing::debug;

use resume_model::{
    Education, EntryId, Experience, IdGenerator, LanguageSkill, Project, ResumeDocument, Section,
};

use crate::text::{split_bullet_lines, split_technologies};

/// Fields of the personal-info header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Location,
    Phone,
    Email,
    Linkedin,
}

/// Editable scalar fields of an experience entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Location,
    Role,
    StartDate,
    EndDate,
}

/// Editable scalar fields of a project entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
}

/// Editable scalar fields of an education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    Institution,
    Location,
    Degree,
    Date,
}

/// Fields of a language row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageField {
    Language,
    Level,
}

/// Replace one personal-info field.
pub fn set_personal_field(
    doc: &ResumeDocument,
    field: PersonalField,
    value: &str,
) -> ResumeDocument {
    let mut next = doc.clone();
    let info = &mut next.personal_info;
    match field {
        PersonalField::Name => info.name = value.to_string(),
        PersonalField::Location => info.location = value.to_string(),
        PersonalField::Phone => info.phone = value.to_string(),
        PersonalField::Email => info.email = value.to_string(),
        PersonalField::Linkedin => info.linkedin = value.to_string(),
    }
    next
}

/// Replace the summary text.
pub fn set_summary(doc: &ResumeDocument, value: &str) -> ResumeDocument {
    let mut next = doc.clone();
    next.summary = value.to_string();
    next
}

/// Append a new experience entry with a fresh id and one blank bullet line.
pub fn add_experience(doc: &ResumeDocument, ids: &IdGenerator) -> ResumeDocument {
    let mut next = doc.clone();
    next.experience.push(Experience {
        id: ids.next_id(),
        company: String::new(),
        location: String::new(),
        role: String::new(),
        start_date: String::new(),
        end_date: String::new(),
        bullets: vec![String::new()],
    });
    next
}

/// Append a new project entry with a fresh id, no technologies, and one
/// blank bullet line.
pub fn add_project(doc: &ResumeDocument, ids: &IdGenerator) -> ResumeDocument {
    let mut next = doc.clone();
    next.projects.push(Project {
        id: ids.next_id(),
        name: String::new(),
        technologies: Vec::new(),
        bullets: vec![String::new()],
    });
    next
}

/// Append a new education entry with a fresh id and no bullets.
pub fn add_education(doc: &ResumeDocument, ids: &IdGenerator) -> ResumeDocument {
    let mut next = doc.clone();
    next.education.push(Education {
        id: ids.next_id(),
        institution: String::new(),
        location: String::new(),
        degree: String::new(),
        date: String::new(),
        bullets: Vec::new(),
    });
    next
}

/// Replace one scalar field of the experience entry with the given id.
pub fn update_experience(
    doc: &ResumeDocument,
    id: &EntryId,
    field: ExperienceField,
    value: &str,
) -> ResumeDocument {
    let mut next = doc.clone();
    match next.experience.iter_mut().find(|entry| entry.id == *id) {
        Some(entry) => match field {
            ExperienceField::Company => entry.company = value.to_string(),
            ExperienceField::Location => entry.location = value.to_string(),
            ExperienceField::Role => entry.role = value.to_string(),
            ExperienceField::StartDate => entry.start_date = value.to_string(),
            ExperienceField::EndDate => entry.end_date = value.to_string(),
        },
        None => debug!(%id, "update_experience: no entry with id, skipping"),
    }
    next
}

/// Replace one scalar field of the project entry with the given id.
pub fn update_project(
    doc: &ResumeDocument,
    id: &EntryId,
    field: ProjectField,
    value: &str,
) -> ResumeDocument {
    let mut next = doc.clone();
    match next.projects.iter_mut().find(|entry| entry.id == *id) {
        Some(entry) => match field {
            ProjectField::Name => entry.name = value.to_string(),
        },
        None => debug!(%id, "update_project: no entry with id, skipping"),
    }
    next
}

/// Replace one scalar field of the education entry with the given id.
pub fn update_education(
    doc: &ResumeDocument,
    id: &EntryId,
    field: EducationField,
    value: &str,
) -> ResumeDocument {
    let mut next = doc.clone();
    match next.education.iter_mut().find(|entry| entry.id == *id) {
        Some(entry) => match field {
            EducationField::Institution => entry.institution = value.to_string(),
            EducationField::Location => entry.location = value.to_string(),
            EducationField::Degree => entry.degree = value.to_string(),
            EducationField::Date => entry.date = value.to_string(),
        },
        None => debug!(%id, "update_education: no entry with id, skipping"),
    }
    next
}

/// Remove the entry with the given id from the named section.
pub fn remove_entry(doc: &ResumeDocument, section: Section, id: &EntryId) -> ResumeDocument {
    let mut next = doc.clone();
    match section {
        Section::Experience => next.experience.retain(|entry| entry.id != *id),
        Section::Projects => next.projects.retain(|entry| entry.id != *id),
        Section::Education => next.education.retain(|entry| entry.id != *id),
    }
    if next.section_len(section) == doc.section_len(section) {
        debug!(%section, %id, "remove_entry: no entry with id, skipping");
    }
    next
}

/// Assign an entry's bullets from multi-line text.
///
/// The split keeps every line, including empty ones; see
/// [`split_bullet_lines`].
pub fn set_bullets_from_text(
    doc: &ResumeDocument,
    section: Section,
    id: &EntryId,
    raw: &str,
) -> ResumeDocument {
    let bullets = split_bullet_lines(raw);
    let mut next = doc.clone();
    let target: Option<&mut Vec<String>> = match section {
        Section::Experience => next
            .experience
            .iter_mut()
            .find(|entry| entry.id == *id)
            .map(|entry| &mut entry.bullets),
        Section::Projects => next
            .projects
            .iter_mut()
            .find(|entry| entry.id == *id)
            .map(|entry| &mut entry.bullets),
        Section::Education => next
            .education
            .iter_mut()
            .find(|entry| entry.id == *id)
            .map(|entry| &mut entry.bullets),
    };
    match target {
        Some(slot) => *slot = bullets,
        None => debug!(%section, %id, "set_bullets_from_text: no entry with id, skipping"),
    }
    next
}

/// Assign a project's technologies from comma-separated text; see
/// [`split_technologies`].
pub fn set_technologies_from_text(
    doc: &ResumeDocument,
    id: &EntryId,
    raw: &str,
) -> ResumeDocument {
    let mut next = doc.clone();
    match next.projects.iter_mut().find(|entry| entry.id == *id) {
        Some(entry) => entry.technologies = split_technologies(raw),
        None => debug!(%id, "set_technologies_from_text: no project with id, skipping"),
    }
    next
}

/// Add a skill if its trimmed form is non-empty and not already present.
///
/// Returns the next document and whether the skill was added, so the form
/// can clear its input field only on success.
pub fn add_skill(doc: &ResumeDocument, candidate: &str) -> (ResumeDocument, bool) {
    let trimmed = candidate.trim();
    if trimmed.is_empty() || doc.skills.iter().any(|skill| skill == trimmed) {
        return (doc.clone(), false);
    }
    let mut next = doc.clone();
    next.skills.push(trimmed.to_string());
    (next, true)
}

/// Remove all skills equal to the given value.
pub fn remove_skill(doc: &ResumeDocument, value: &str) -> ResumeDocument {
    let mut next = doc.clone();
    next.skills.retain(|skill| skill != value);
    next
}

/// Replace one field of the language row at the given position.
pub fn set_language_field(
    doc: &ResumeDocument,
    index: usize,
    field: LanguageField,
    value: &str,
) -> ResumeDocument {
    let mut next = doc.clone();
    match next.languages.get_mut(index) {
        Some(entry) => match field {
            LanguageField::Language => entry.language = value.to_string(),
            LanguageField::Level => entry.level = value.to_string(),
        },
        None => debug!(index, "set_language_field: index out of range, skipping"),
    }
    next
}

/// Append an empty language row.
pub fn add_language(doc: &ResumeDocument) -> ResumeDocument {
    let mut next = doc.clone();
    next.languages.push(LanguageSkill {
        language: String::new(),
        level: String::new(),
    });
    next
}

/// Remove the language row at the given position; out of range is a no-op.
pub fn remove_language(doc: &ResumeDocument, index: usize) -> ResumeDocument {
    let mut next = doc.clone();
    if index < next.languages.len() {
        next.languages.remove(index);
    } else {
        debug!(index, "remove_language: index out of range, skipping");
    }
    next
}
