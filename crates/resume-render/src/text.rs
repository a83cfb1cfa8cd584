//! Plain-text layout of a presentation tree.
//!
//! Used by the CLI preview and file export. The layout is deterministic:
//! a snapshot rendered twice produces byte-identical text.

use std::io::{self, Write};

use crate::tree::{EntryBlock, PresentationTree, SectionBlock};

/// Column the right-hand detail is aligned to when the left side leaves room.
const RIGHT_COLUMN: usize = 78;

/// Render a tree to a plain-text string.
pub fn plain_text(tree: &PresentationTree) -> String {
    let mut buffer = Vec::new();
    // Writing to a Vec cannot fail.
    write_plain_text(tree, &mut buffer).expect("write to in-memory buffer");
    String::from_utf8(buffer).expect("plain text output is utf-8")
}

/// Write a tree as plain text.
pub fn write_plain_text<W: Write>(tree: &PresentationTree, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", tree.header.name.to_uppercase())?;
    writeln!(out, "{}", tree.header.contact_line)?;

    for block in &tree.sections {
        writeln!(out)?;
        match block {
            SectionBlock::Summary { text } => {
                writeln!(out, "{text}")?;
            }
            SectionBlock::Experience { entries }
            | SectionBlock::Projects { entries }
            | SectionBlock::Education { entries } => {
                write_section_title(out, block.title())?;
                let mut first = true;
                for entry in entries {
                    if !first {
                        writeln!(out)?;
                    }
                    first = false;
                    write_entry(out, entry)?;
                }
            }
            SectionBlock::SkillsAndLanguages {
                skills_line,
                languages_line,
            } => {
                write_section_title(out, block.title())?;
                writeln!(out, "Skills: {skills_line}")?;
                if let Some(line) = languages_line {
                    writeln!(out, "Languages: {line}")?;
                }
            }
        }
    }
    Ok(())
}

fn write_section_title<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let upper = title.to_uppercase();
    writeln!(out, "{upper}")?;
    writeln!(out, "{}", "-".repeat(upper.len()))?;
    Ok(())
}

fn write_entry<W: Write>(out: &mut W, entry: &EntryBlock) -> io::Result<()> {
    let left = match &entry.heading_detail {
        Some(detail) => format!("{}, {}", entry.heading, detail),
        None => entry.heading.clone(),
    };
    writeln!(out, "{}", spread(&left, &entry.right_detail))?;
    if let Some(line) = &entry.line {
        writeln!(out, "{line}")?;
    }
    for bullet in &entry.bullets {
        writeln!(out, "  - {bullet}")?;
    }
    Ok(())
}

/// Lay out a left and right part on one line, pushing the right part to
/// [`RIGHT_COLUMN`] when there is room and separating with two spaces when
/// there is not.
fn spread(left: &str, right: &str) -> String {
    if right.is_empty() {
        return left.to_string();
    }
    let width = left.chars().count() + right.chars().count();
    if width + 2 <= RIGHT_COLUMN {
        let padding = RIGHT_COLUMN - width;
        format!("{left}{}{right}", " ".repeat(padding))
    } else {
        format!("{left}  {right}")
    }
}
