//! Category catalog: the code → label table shared by the classifier and the
//! renderer. Built once from the hardcoded defaults and replaced wholesale
//! when the backend supplies overrides.

use serde::Serialize;

use crate::models::{Category, KnownAgent};

/// Ordered, immutable set of categories. Codes are unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            categories: KnownAgent::ALL
                .into_iter()
                .map(|a| Category::new(a.code(), a.default_label()))
                .collect(),
        }
    }
}

impl Catalog {
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn contains(&self, code: &str) -> bool {
        self.categories.iter().any(|c| c.code == code)
    }

    pub fn label(&self, code: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.label.as_str())
    }

    /// Label for display; unknown codes show as themselves.
    pub fn label_or_code<'a>(&'a self, code: &'a str) -> &'a str {
        self.label(code).unwrap_or(code)
    }

    /// The general-purpose category used when nothing else matches.
    pub fn fallback(&self) -> &Category {
        // The default table is never empty and merging only adds or relabels.
        &self.categories[0]
    }

    /// Returns a new catalog with `overrides` applied.
    ///
    /// Existing codes keep their position and take the new label; new codes
    /// are appended in the order received (last duplicate wins). A backend
    /// that spells the arts agent `ARA` is mapped onto `ArA` unless it also
    /// sends `ArA` itself.
    pub fn merged(&self, overrides: &[Category]) -> Catalog {
        let arts = KnownAgent::ArA.code();
        let renames_arts = overrides.iter().any(|c| c.code == "ARA")
            && !overrides.iter().any(|c| c.code == arts);

        let mut categories = self.categories.clone();
        for incoming in overrides {
            let code = if renames_arts && incoming.code == "ARA" {
                arts
            } else {
                incoming.code.as_str()
            };

            match categories.iter_mut().find(|c| c.code == code) {
                Some(existing) => existing.label = incoming.label.clone(),
                None => categories.push(Category::new(code, incoming.label.clone())),
            }
        }

        Catalog { categories }
    }
}
