//! Intent detection: category catalog, keyword rule table, classifier.

pub mod catalog;
pub mod classifier;
pub mod rules;

pub use catalog::Catalog;
pub use classifier::{Detection, KeywordClassifier};
pub use rules::DEFAULT_RULES;
