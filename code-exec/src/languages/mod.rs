//! Language resolution and code wrapping

mod catalog;
pub mod resolver;
pub mod wrapper;

pub use catalog::LanguageCatalog;
pub use resolver::{normalize_code, normalize_token, resolve, suggestions};
pub use wrapper::{family, WrapTemplates, CODE_PLACEHOLDER};
