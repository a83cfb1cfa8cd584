//! CLI argument definitions for Resume Studio.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use resume_model::Section;

#[derive(Parser)]
#[command(
    name = "resume",
    version,
    about = "Resume Studio - Build and render resume documents",
    long_about = "Build, edit, and render resume documents.\n\n\
                  Documents are stored as plain JSON; the preview and export\n\
                  commands produce a deterministic text rendering."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the default seed document as JSON.
    New(NewArgs),

    /// Render a document and print it as plain text.
    Preview(DocumentArgs),

    /// Render a document and write the plain text to a file.
    Export(ExportArgs),

    /// Print a section-by-section summary of a document.
    Summary(DocumentArgs),

    /// Add or remove a skill.
    Skill(SkillArgs),

    /// Append an empty entry to a repeated section.
    Add(AddArgs),
}

#[derive(Parser)]
pub struct NewArgs {
    /// Destination file (stdout when omitted).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct DocumentArgs {
    /// Path to a resume JSON document (default seed document when omitted).
    #[arg(value_name = "DOCUMENT")]
    pub document: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to a resume JSON document (default seed document when omitted).
    #[arg(value_name = "DOCUMENT")]
    pub document: Option<PathBuf>,

    /// Destination file for the rendered text.
    #[arg(long = "output", value_name = "PATH")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct SkillArgs {
    #[command(subcommand)]
    pub action: SkillAction,
}

#[derive(Subcommand)]
pub enum SkillAction {
    /// Add a skill (trimmed; duplicates are ignored).
    Add(SkillEditArgs),
    /// Remove a skill (exact match).
    Remove(SkillEditArgs),
}

#[derive(Parser)]
pub struct SkillEditArgs {
    /// The skill text.
    #[arg(value_name = "SKILL")]
    pub value: String,

    /// Path to the resume JSON document to edit.
    #[arg(long = "document", value_name = "PATH")]
    pub document: PathBuf,

    /// Write the edited document here instead of back to the input file.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct AddArgs {
    /// Section to extend (experience, projects, education).
    #[arg(value_name = "SECTION")]
    pub section: Section,

    /// Path to the resume JSON document to edit.
    #[arg(long = "document", value_name = "PATH")]
    pub document: PathBuf,

    /// Write the edited document here instead of back to the input file.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
