//! Command implementations.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use resume_edit::{add_education, add_experience, add_project, add_skill, remove_skill};
use resume_model::{
    IdGenerator, ResumeDocument, Section, default_document, document_to_json, load_document,
    save_document,
};
use resume_render::{plain_text, render};

use crate::cli::{AddArgs, DocumentArgs, ExportArgs, NewArgs, SkillEditArgs};
use crate::summary::print_document_summary;

/// Load the named document, or the default seed document when no path is
/// given.
fn resolve_document(path: Option<&Path>) -> Result<ResumeDocument> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading document");
            load_document(path)
                .with_context(|| format!("failed to load document {}", path.display()))
        }
        None => {
            debug!("no document given, using default seed document");
            Ok(default_document())
        }
    }
}

/// `resume new`: write the default document as JSON.
pub fn run_new(args: &NewArgs) -> Result<()> {
    let doc = default_document();
    match &args.output {
        Some(path) => {
            save_document(path, &doc)
                .with_context(|| format!("failed to write document {}", path.display()))?;
            info!(path = %path.display(), "wrote default document");
        }
        None => {
            let json = document_to_json(&doc).context("failed to serialize default document")?;
            println!("{json}");
        }
    }
    Ok(())
}

/// `resume preview`: render a document and print the plain text.
pub fn run_preview(args: &DocumentArgs) -> Result<()> {
    let doc = resolve_document(args.document.as_deref())?;
    let tree = render(&doc);
    print!("{}", plain_text(&tree));
    Ok(())
}

/// `resume export`: render a document and write the plain text to a file.
///
/// Export reads one snapshot and writes it out; a failure here is reported
/// to the caller and never touches the document.
pub fn run_export(args: &ExportArgs) -> Result<()> {
    let doc = resolve_document(args.document.as_deref())?;
    let tree = render(&doc);
    let text = plain_text(&tree);
    fs::write(&args.output, text)
        .with_context(|| format!("failed to write export {}", args.output.display()))?;
    info!(path = %args.output.display(), "exported document");
    Ok(())
}

/// `resume summary`: print a section-by-section table.
pub fn run_summary(args: &DocumentArgs) -> Result<()> {
    let doc = resolve_document(args.document.as_deref())?;
    print_document_summary(&doc);
    Ok(())
}

fn save_edited(
    doc: &ResumeDocument,
    input: &Path,
    output: Option<&PathBuf>,
) -> Result<()> {
    let destination = output.map_or(input, PathBuf::as_path);
    save_document(destination, doc)
        .with_context(|| format!("failed to write document {}", destination.display()))
}

/// `resume skill add`: add a skill, reporting whether it changed anything.
pub fn run_skill_add(args: &SkillEditArgs) -> Result<()> {
    let doc = resolve_document(Some(&args.document))?;
    let (next, added) = add_skill(&doc, &args.value);
    if added {
        info!(skill = %args.value.trim(), "added skill");
    } else {
        info!(skill = %args.value, "skill already present or blank, document unchanged");
    }
    save_edited(&next, &args.document, args.output.as_ref())
}

/// `resume skill remove`: remove all matching skills.
pub fn run_skill_remove(args: &SkillEditArgs) -> Result<()> {
    let doc = resolve_document(Some(&args.document))?;
    let next = remove_skill(&doc, &args.value);
    if next.skills.len() == doc.skills.len() {
        info!(skill = %args.value, "skill not present, document unchanged");
    } else {
        info!(skill = %args.value, "removed skill");
    }
    save_edited(&next, &args.document, args.output.as_ref())
}

/// `resume add`: append an empty entry to a repeated section.
pub fn run_add_entry(args: &AddArgs) -> Result<()> {
    let doc = resolve_document(Some(&args.document))?;
    let ids = IdGenerator::new();
    let next = match args.section {
        Section::Experience => add_experience(&doc, &ids),
        Section::Projects => add_project(&doc, &ids),
        Section::Education => add_education(&doc, &ids),
    };
    let new_ids = next.section_ids(args.section);
    if let Some(id) = new_ids.last() {
        info!(section = %args.section, %id, "appended entry");
    }
    save_edited(&next, &args.document, args.output.as_ref())
}
