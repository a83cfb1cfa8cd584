//! Pure mapping from a document snapshot to a presentation tree.

use resume_model::{Education, Experience, Project, ResumeDocument};

use crate::tree::{EntryBlock, HeaderBlock, PresentationTree, SectionBlock};

/// Render a document snapshot.
///
/// Deterministic and side-effect free: the same document always produces the
/// same tree, sequences are walked in document order, and nothing here can
/// reach back into the editor.
pub fn render(doc: &ResumeDocument) -> PresentationTree {
    let mut sections = Vec::new();

    if !doc.summary.is_empty() {
        sections.push(SectionBlock::Summary {
            text: doc.summary.clone(),
        });
    }
    if !doc.experience.is_empty() {
        sections.push(SectionBlock::Experience {
            entries: doc.experience.iter().map(experience_entry).collect(),
        });
    }
    if !doc.projects.is_empty() {
        sections.push(SectionBlock::Projects {
            entries: doc.projects.iter().map(project_entry).collect(),
        });
    }
    if !doc.education.is_empty() {
        sections.push(SectionBlock::Education {
            entries: doc.education.iter().map(education_entry).collect(),
        });
    }
    sections.push(SectionBlock::SkillsAndLanguages {
        skills_line: doc.skills.join(", "),
        languages_line: languages_line(doc),
    });

    PresentationTree {
        header: header(doc),
        sections,
    }
}

fn header(doc: &ResumeDocument) -> HeaderBlock {
    let info = &doc.personal_info;
    HeaderBlock {
        name: info.name.clone(),
        // Fixed separators and order; empty fields keep their slot.
        contact_line: format!(
            "{} | {} | {} | {}",
            info.location, info.phone, info.email, info.linkedin
        ),
    }
}

fn experience_entry(entry: &Experience) -> EntryBlock {
    EntryBlock {
        heading: entry.company.clone(),
        heading_detail: Some(entry.location.clone()),
        right_detail: format!("{} - {}", entry.start_date, entry.end_date),
        line: Some(entry.role.clone()),
        bullets: entry.bullets.clone(),
    }
}

fn project_entry(entry: &Project) -> EntryBlock {
    EntryBlock {
        heading: entry.name.clone(),
        heading_detail: None,
        right_detail: entry.technologies.join(", "),
        line: None,
        bullets: entry.bullets.clone(),
    }
}

fn education_entry(entry: &Education) -> EntryBlock {
    EntryBlock {
        heading: entry.institution.clone(),
        heading_detail: Some(entry.location.clone()),
        right_detail: entry.date.clone(),
        line: Some(entry.degree.clone()),
        bullets: entry.bullets.clone(),
    }
}

fn languages_line(doc: &ResumeDocument) -> Option<String> {
    if doc.languages.is_empty() {
        return None;
    }
    let joined = doc
        .languages
        .iter()
        .map(|lang| format!("{} ({})", lang.language, lang.level))
        .collect::<Vec<_>>()
        .join(", ");
    Some(joined)
}
