//! Tests for the document renderer.

use resume_edit::{add_skill, remove_skill};
use resume_model::default_document;
use resume_render::{SectionBlock, plain_text, render};

#[test]
fn empty_experience_omits_section() {
    let mut doc = default_document();
    doc.experience.clear();
    let tree = render(&doc);
    assert!(
        !tree
            .sections
            .iter()
            .any(|block| matches!(block, SectionBlock::Experience { .. }))
    );
}

#[test]
fn entry_with_no_bullets_renders_without_list() {
    let mut doc = default_document();
    doc.experience.truncate(1);
    doc.experience[0].bullets.clear();
    let tree = render(&doc);
    let entries = tree
        .sections
        .iter()
        .find_map(|block| match block {
            SectionBlock::Experience { entries } => Some(entries),
            _ => None,
        })
        .expect("experience section present");
    assert_eq!(entries.len(), 1);
    assert!(!entries[0].has_bullets());
    assert_eq!(entries[0].heading, doc.experience[0].company);
}

#[test]
fn empty_summary_omits_section() {
    let mut doc = default_document();
    doc.summary.clear();
    let tree = render(&doc);
    assert!(
        !tree
            .sections
            .iter()
            .any(|block| matches!(block, SectionBlock::Summary { .. }))
    );
}

#[test]
fn skills_block_always_present() {
    let mut doc = default_document();
    doc.skills.clear();
    doc.languages.clear();
    let tree = render(&doc);
    match tree.skills_block().expect("skills block present") {
        SectionBlock::SkillsAndLanguages {
            skills_line,
            languages_line,
        } => {
            assert_eq!(skills_line, "");
            assert!(languages_line.is_none());
        }
        other => panic!("unexpected block: {other:?}"),
    }
}

#[test]
fn languages_format_as_name_and_level() {
    let doc = default_document();
    let tree = render(&doc);
    match tree.skills_block().unwrap() {
        SectionBlock::SkillsAndLanguages { languages_line, .. } => {
            assert_eq!(
                languages_line.as_deref(),
                Some("English (Highly Proficient), Japanese (Native), Korean (Beginner)")
            );
        }
        other => panic!("unexpected block: {other:?}"),
    }
}

#[test]
fn experience_entry_fields_map_through() {
    let doc = default_document();
    let tree = render(&doc);
    let entries = tree
        .sections
        .iter()
        .find_map(|block| match block {
            SectionBlock::Experience { entries } => Some(entries),
            _ => None,
        })
        .unwrap();
    let first = &entries[0];
    assert_eq!(first.heading, "Botanical Food Company Pty Ltd.");
    assert_eq!(first.heading_detail.as_deref(), Some("Palmwoods, QLD"));
    assert_eq!(first.right_detail, "Dec 2024 - Present");
    assert_eq!(first.line.as_deref(), Some("Quality Checker"));
    assert_eq!(first.bullets.len(), 3);
}

#[test]
fn project_right_detail_joins_technologies() {
    let doc = default_document();
    let tree = render(&doc);
    let entries = tree
        .sections
        .iter()
        .find_map(|block| match block {
            SectionBlock::Projects { entries } => Some(entries),
            _ => None,
        })
        .unwrap();
    assert_eq!(
        entries[0].right_detail,
        "React, TypeScript, Node.js, Express, PostgreSQL, TanStack Query"
    );
    assert!(entries[0].heading_detail.is_none());
}

#[test]
fn added_skill_shows_in_render_and_removal_clears_it() {
    let doc = default_document();
    let (with_rust, added) = add_skill(&doc, "Rust");
    assert!(added);

    let skills_line = |tree: &resume_render::PresentationTree| match tree.skills_block().unwrap() {
        SectionBlock::SkillsAndLanguages { skills_line, .. } => skills_line.clone(),
        other => panic!("unexpected block: {other:?}"),
    };

    let line = skills_line(&render(&with_rust));
    assert!(line.ends_with(", Rust"));

    let without = remove_skill(&with_rust, "Rust");
    let line = skills_line(&render(&without));
    assert!(!line.contains("Rust"));
    assert_eq!(line, doc.skills.join(", "));
}

#[test]
fn tree_serializes_with_tagged_sections() {
    let doc = default_document();
    let tree = render(&doc);
    let value = serde_json::to_value(&tree).expect("serialize tree");
    assert_eq!(value["sections"][0]["kind"], "summary");
    assert_eq!(value["sections"][1]["kind"], "experience");
    assert_eq!(
        value["header"]["name"],
        doc.personal_info.name
    );
}

#[test]
fn plain_text_carries_bullets_and_contact_line() {
    let doc = default_document();
    let text = plain_text(&render(&doc));
    assert!(text.contains(
        "Golden Beach, QLD, Australia | +61 405 726 234 | akiyaman0212@gmail.com | \
         linkedin.com/in/takuro-akiyama-46477b221"
    ));
    assert!(text.contains("  - Followed strict quality and safety protocols under pressure."));
    assert!(text.contains("Skills: JavaScript, TypeScript,"));
}
