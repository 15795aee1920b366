use thiserror::Error;

/// Rejections raised while building a [`crate::RegionRegistry`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegionError {
    #[error("region `{name}` has no hit rectangles")]
    NoRects { name: String },
    #[error("region `{name}` rect #{index} is not a normalized axis-aligned rectangle")]
    InvalidRect { name: String, index: usize },
    #[error("duplicate region name `{0}`")]
    DuplicateName(String),
}

/// Rejections raised by [`crate::SymptomForm`] operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("symptom item {0} does not exist")]
    ItemOutOfRange(usize),
    #[error("symptom item {0} has no sub-options")]
    NotExpandable(usize),
    #[error("symptom item {item} has no option `{option}`")]
    UnknownOption { item: usize, option: String },
    #[error("symptom item {0} must be checked first")]
    ItemNotChecked(usize),
}
