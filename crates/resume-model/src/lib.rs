pub mod defaults;
pub mod document;
pub mod error;
pub mod ids;
pub mod store;

pub use defaults::default_document;
pub use document::{
    Education, EntryId, Experience, LanguageSkill, PersonalInfo, Project, ResumeDocument, Section,
};
pub use error::{Result, ResumeError};
pub use ids::IdGenerator;
pub use store::{document_to_json, load_document, save_document};
