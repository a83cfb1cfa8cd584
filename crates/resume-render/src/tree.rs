//! The presentation tree produced by rendering.
//!
//! A tree is a header plus an ordered list of section blocks. A section that
//! has nothing to show is absent from the list rather than present-but-empty;
//! within a section, child order is document order.

use serde::{Deserialize, Serialize};

/// Rendered output for one document snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationTree {
    pub header: HeaderBlock,
    pub sections: Vec<SectionBlock>,
}

impl PresentationTree {
    /// Find the skills/languages block. Always present in a rendered tree.
    pub fn skills_block(&self) -> Option<&SectionBlock> {
        self.sections
            .iter()
            .find(|block| matches!(block, SectionBlock::SkillsAndLanguages { .. }))
    }
}

/// Name and contact line shown at the top of the document.
///
/// The contact line joins location, phone, email, and linkedin with `" | "`
/// in that fixed order. Empty fields keep their slot, so the line can carry
/// adjacent separators; this matches the source application's behavior and
/// is deliberate pass-through, not filtering left undone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderBlock {
    pub name: String,
    pub contact_line: String,
}

/// One titled block of the rendered document, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SectionBlock {
    /// Present only when the summary text is non-empty (no trimming; a
    /// whitespace-only summary still renders).
    Summary { text: String },
    /// Present only when the experience sequence is non-empty.
    Experience { entries: Vec<EntryBlock> },
    /// Present only when the projects sequence is non-empty.
    Projects { entries: Vec<EntryBlock> },
    /// Present only when the education sequence is non-empty.
    Education { entries: Vec<EntryBlock> },
    /// Always present. The skills line may be empty; the languages line is
    /// absent when there are no language rows.
    SkillsAndLanguages {
        skills_line: String,
        languages_line: Option<String>,
    },
}

impl SectionBlock {
    /// Display title for this block.
    pub fn title(&self) -> &'static str {
        match self {
            SectionBlock::Summary { .. } => "Summary",
            SectionBlock::Experience { .. } => "Professional Experience",
            SectionBlock::Projects { .. } => "Projects",
            SectionBlock::Education { .. } => "Education",
            SectionBlock::SkillsAndLanguages { .. } => "Skills & Other",
        }
    }
}

/// One entry inside a repeated section.
///
/// `heading` is the entry's primary label (company, project name,
/// institution); `heading_detail` trails it (location) when present;
/// `right_detail` is the right-aligned text (date range, technologies,
/// date); `line` is the secondary line under the heading (role, degree).
/// An empty `bullets` vector means the entry renders without a bullet list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryBlock {
    pub heading: String,
    pub heading_detail: Option<String>,
    pub right_detail: String,
    pub line: Option<String>,
    pub bullets: Vec<String>,
}

impl EntryBlock {
    pub fn has_bullets(&self) -> bool {
        !self.bullets.is_empty()
    }
}
