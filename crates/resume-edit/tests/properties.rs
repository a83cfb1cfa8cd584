//! Property tests for editor invariants.

use proptest::prelude::*;

use resume_edit::{add_experience, add_skill, remove_entry, remove_skill, set_bullets_from_text};
use resume_model::{IdGenerator, ResumeDocument, Section, default_document};

/// A document with a generated skill list; the structural sections come from
/// the seed document since the properties under test only vary skills and
/// entry counts.
fn doc_with_skills(skills: Vec<String>) -> ResumeDocument {
    let mut doc = default_document();
    doc.skills.clear();
    for skill in skills {
        let (next, _) = add_skill(&doc, &skill);
        doc = next;
    }
    doc
}

proptest! {
    #[test]
    fn add_remove_round_trip(seed in 1_000u64..1_000_000) {
        let doc = default_document();
        let ids = IdGenerator::with_seed(seed);
        let grown = add_experience(&doc, &ids);
        let new_id = grown.experience.last().unwrap().id.clone();
        let restored = remove_entry(&grown, Section::Experience, &new_id);
        prop_assert_eq!(restored, doc);
    }

    #[test]
    fn skills_stay_free_of_duplicates(raw in proptest::collection::vec("[ a-zA-Z]{0,12}", 0..24)) {
        let doc = doc_with_skills(raw);
        for (index, skill) in doc.skills.iter().enumerate() {
            prop_assert!(!skill.is_empty());
            prop_assert_eq!(skill.trim(), skill.as_str());
            prop_assert!(!doc.skills[index + 1..].contains(skill));
        }
    }

    #[test]
    fn add_skill_second_call_never_changes(skill in "[a-zA-Z]{1,12}") {
        let doc = default_document();
        let (once, _) = add_skill(&doc, &skill);
        let (twice, added) = add_skill(&once, &skill);
        prop_assert!(!added);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn bullet_text_splits_on_every_newline(raw in "[a-z \n]{0,40}") {
        let doc = default_document();
        let id = doc.experience[0].id.clone();
        let next = set_bullets_from_text(&doc, Section::Experience, &id, &raw);
        let bullets = &next.experience[0].bullets;
        prop_assert_eq!(bullets.len(), raw.matches('\n').count() + 1);
        prop_assert_eq!(bullets.join("\n"), raw);
    }

    #[test]
    fn remove_skill_is_complete(skill in "[a-zA-Z]{1,12}") {
        let doc = doc_with_skills(vec![skill.clone(), "anchor".to_string()]);
        let next = remove_skill(&doc, &skill);
        prop_assert!(!next.skills.iter().any(|s| s == &skill));
    }
}
