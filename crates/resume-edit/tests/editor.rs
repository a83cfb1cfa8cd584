//! Tests for editor operations.

use resume_edit::{
    ExperienceField, LanguageField, add_experience, add_language, add_project, add_skill,
    remove_entry, remove_language, remove_skill, set_bullets_from_text, set_language_field,
    set_summary, set_technologies_from_text, update_experience,
};
use resume_model::{EntryId, IdGenerator, Section, default_document};

#[test]
fn add_grows_section_by_one_with_fresh_id() {
    let doc = default_document();
    let ids = IdGenerator::with_seed(9_000);

    let next = add_experience(&doc, &ids);
    assert_eq!(next.experience.len(), doc.experience.len() + 1);
    let new_id = &next.experience.last().unwrap().id;
    assert!(!doc.contains_entry(Section::Experience, new_id));

    let next = add_project(&doc, &ids);
    assert_eq!(next.projects.len(), doc.projects.len() + 1);
    let new_id = &next.projects.last().unwrap().id;
    assert!(!doc.contains_entry(Section::Projects, new_id));
}

#[test]
fn add_then_remove_restores_document() {
    let doc = default_document();
    let ids = IdGenerator::with_seed(9_000);

    let grown = add_experience(&doc, &ids);
    let new_id = grown.experience.last().unwrap().id.clone();
    let restored = remove_entry(&grown, Section::Experience, &new_id);
    assert_eq!(restored, doc);
}

#[test]
fn remove_with_unknown_id_is_noop() {
    let doc = default_document();
    let next = remove_entry(&doc, Section::Education, &EntryId::new("nope"));
    assert_eq!(next, doc);
}

#[test]
fn update_replaces_only_target_entry() {
    let doc = default_document();
    let target = doc.experience[0].id.clone();
    let next = update_experience(&doc, &target, ExperienceField::Role, "Lead Checker");
    assert_eq!(next.experience[0].role, "Lead Checker");
    assert_eq!(next.experience[1], doc.experience[1]);
    // Input snapshot is untouched.
    assert_eq!(doc.experience[0].role, "Quality Checker");
}

#[test]
fn add_skill_is_idempotent() {
    let doc = default_document();
    let (once, added) = add_skill(&doc, "Rust");
    assert!(added);
    assert_eq!(once.skills.last().unwrap(), "Rust");

    let (twice, added_again) = add_skill(&once, "Rust");
    assert!(!added_again);
    assert_eq!(twice.skills, once.skills);
}

#[test]
fn add_skill_trims_and_rejects_blank() {
    let doc = default_document();
    let (next, added) = add_skill(&doc, "  Rust  ");
    assert!(added);
    assert_eq!(next.skills.last().unwrap(), "Rust");

    let (unchanged, added) = add_skill(&doc, "   ");
    assert!(!added);
    assert_eq!(unchanged, doc);

    // Dedup is exact-match on the trimmed value.
    let (padded, added) = add_skill(&next, " Rust ");
    assert!(!added);
    assert_eq!(padded.skills, next.skills);
}

#[test]
fn remove_skill_drops_all_matches() {
    let doc = default_document();
    let next = remove_skill(&doc, "Python");
    assert!(!next.skills.iter().any(|skill| skill == "Python"));
    assert_eq!(next.skills.len(), doc.skills.len() - 1);
    // Absent value is a no-op.
    assert_eq!(remove_skill(&next, "Python"), next);
}

#[test]
fn bullets_split_preserves_trailing_empty_line() {
    let doc = default_document();
    let id = doc.experience[0].id.clone();
    let next = set_bullets_from_text(&doc, Section::Experience, &id, "a\nb\n");
    assert_eq!(next.experience[0].bullets, vec!["a", "b", ""]);
}

#[test]
fn bullets_update_unknown_id_is_noop() {
    let doc = default_document();
    let next = set_bullets_from_text(&doc, Section::Projects, &EntryId::new("nope"), "x\ny");
    assert_eq!(next, doc);
}

#[test]
fn technologies_split_and_trim() {
    let doc = default_document();
    let id = doc.projects[0].id.clone();
    let next = set_technologies_from_text(&doc, &id, "React, TypeScript ,Node");
    assert_eq!(next.projects[0].technologies, vec!["React", "TypeScript", "Node"]);
}

#[test]
fn language_field_edit_is_positional() {
    let doc = default_document();
    let next = set_language_field(&doc, 1, LanguageField::Level, "Fluent");
    assert_eq!(next.languages[1].level, "Fluent");
    assert_eq!(next.languages[0], doc.languages[0]);

    // Out-of-range index is a no-op.
    let unchanged = set_language_field(&doc, 99, LanguageField::Language, "Esperanto");
    assert_eq!(unchanged, doc);
}

#[test]
fn language_rows_append_and_remove() {
    let doc = default_document();
    let grown = add_language(&doc);
    assert_eq!(grown.languages.len(), doc.languages.len() + 1);
    let added = grown.languages.last().unwrap();
    assert_eq!(added.language, "");
    assert_eq!(added.level, "");

    let shrunk = remove_language(&grown, grown.languages.len() - 1);
    assert_eq!(shrunk, doc);
    assert_eq!(remove_language(&doc, 99), doc);
}

#[test]
fn mutation_never_aliases_previous_snapshot() {
    let doc = default_document();
    let snapshot = doc.clone();
    let id = doc.experience[0].id.clone();

    let mut current = set_summary(&doc, "rewritten");
    current = set_bullets_from_text(&current, Section::Experience, &id, "only line");
    current = remove_entry(&current, Section::Experience, &doc.experience[1].id);

    assert_eq!(doc, snapshot);
    assert_eq!(current.experience.len(), 1);
    assert_eq!(current.experience[0].bullets, vec!["only line"]);
}
