//! Core classification and recode engine.
//!
//! - `family`: language family ranges and the classifier
//! - `language_key`: exact code to label lookup
//! - `dataset` / `value`: column-oriented survey table
//! - `load`: household and person file loading and merge
//! - `recode`: survey column recodes

pub mod dataset;
pub mod error;
pub mod family;
pub mod language_key;
pub mod load;
pub mod recode;
pub mod value;

pub use dataset::{Column, Dataset};
pub use error::{Error, Result};
pub use family::{Classification, DuplicatePolicy, FamilyGroup, LanguageFamily, UNSPECIFIED_LABEL};
pub use language_key::{LanguageKey, import_language_key};
pub use load::{load_data, load_files};
pub use recode::{recode, recode_language};
pub use value::Value;
