//! Country autocomplete.

use std::sync::Arc;

use serde::Serialize;

/// Current suggestion list for the country field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    /// Matching catalog entries, in catalog order.
    pub items: Vec<String>,
    /// True exactly when the field text is non-empty.
    pub visible: bool,
}

/// Filters a fixed country catalog against the text typed so far.
///
/// Matching is a case-insensitive substring test, not a prefix test, and
/// results keep catalog order.
///
/// ```
/// use signup_form::Autocomplete;
///
/// let mut countries = Autocomplete::new(["United States", "Canada", "Mexico"]);
/// assert_eq!(countries.on_input("ca").items, ["Canada"]);
/// assert!(!countries.on_input("").visible);
/// ```
#[derive(Debug, Clone)]
pub struct Autocomplete {
    catalog: Arc<[String]>,
    /// Lowercased catalog, parallel to `catalog`.
    folded: Arc<[String]>,
    current: Suggestions,
}

impl Autocomplete {
    pub fn new<I, S>(catalog: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_catalog(catalog.into_iter().map(Into::into).collect())
    }

    pub fn from_catalog(catalog: Arc<[String]>) -> Self {
        let folded = catalog.iter().map(|c| c.to_lowercase()).collect();
        Self {
            catalog,
            folded,
            current: Suggestions::default(),
        }
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// The suggestions computed by the last input or selection.
    pub fn suggestions(&self) -> &Suggestions {
        &self.current
    }

    /// Recomputes the suggestions for the field's new text.
    pub fn on_input(&mut self, text: &str) -> &Suggestions {
        self.current = self.filter(text);
        &self.current
    }

    /// Picks a suggestion: returns the new field text and hides the list.
    pub fn select(&mut self, value: &str) -> String {
        self.current = Suggestions::default();
        value.to_string()
    }

    fn filter(&self, text: &str) -> Suggestions {
        if text.is_empty() {
            return Suggestions::default();
        }
        let needle = text.to_lowercase();
        let items = self
            .catalog
            .iter()
            .zip(self.folded.iter())
            .filter(|(_, folded)| folded.contains(&needle))
            .map(|(country, _)| country.clone())
            .collect();
        Suggestions {
            items,
            visible: true,
        }
    }
}
