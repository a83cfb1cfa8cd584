use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque identifier for a repeated resume entry.
///
/// Ids are assigned once at entry creation and never recomputed; the editor
/// addresses entries by id, never by position. The token format is not part
/// of the contract, only uniqueness within the containing sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(token: impl Into<String>) -> Self {
        EntryId(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntryId {
    fn from(token: &str) -> Self {
        EntryId(token.to_string())
    }
}

/// The repeated, id-keyed resume blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Experience,
    Projects,
    Education,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Education => "education",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "experience" => Ok(Section::Experience),
            "projects" => Ok(Section::Projects),
            "education" => Ok(Section::Education),
            _ => Err(format!("Unknown section: {}", s)),
        }
    }
}

/// Contact details shown in the document header. Singleton per document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
}

/// One work-history entry. Bullets keep insertion order and may contain
/// empty strings (blank lines still pending user input).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: EntryId,
    pub company: String,
    pub location: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntryId,
    pub name: String,
    pub technologies: Vec<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: EntryId,
    pub institution: String,
    pub location: String,
    pub degree: String,
    pub date: String,
    pub bullets: Vec<String>,
}

/// A spoken language with a proficiency level. No id; identified by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSkill {
    pub language: String,
    pub level: String,
}

/// The whole resume. One instance lives for the session; every edit replaces
/// it wholesale with a new value, so a previously rendered snapshot never
/// changes underneath the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    /// Ordered and duplicate-free (exact string match).
    pub skills: Vec<String>,
    pub languages: Vec<LanguageSkill>,
}

impl ResumeDocument {
    /// Return the ids currently used in the given section, in document order.
    pub fn section_ids(&self, section: Section) -> Vec<&EntryId> {
        match section {
            Section::Experience => self.experience.iter().map(|entry| &entry.id).collect(),
            Section::Projects => self.projects.iter().map(|entry| &entry.id).collect(),
            Section::Education => self.education.iter().map(|entry| &entry.id).collect(),
        }
    }

    /// True if the given section contains an entry with this id.
    pub fn contains_entry(&self, section: Section, id: &EntryId) -> bool {
        self.section_ids(section).iter().any(|known| *known == id)
    }

    /// Number of entries in the given section.
    pub fn section_len(&self, section: Section) -> usize {
        match section {
            Section::Experience => self.experience.len(),
            Section::Projects => self.projects.len(),
            Section::Education => self.education.len(),
        }
    }
}
