use serde::{Deserialize, Serialize};

use crate::models::DishEntry;

/// User-declared terms that keep matching dishes out of generated plans.
///
/// Matching is a case-insensitive substring test against the dish's display
/// name. It knows nothing about real ingredients: excluding "닭" also drops
/// "닭가슴살 샐러드", and a dish that contains chicken without saying so in
/// its name slips through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionSet {
    terms: Vec<String>,
}

fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw terms, folding case and dropping duplicates.
    pub fn from_terms<I, T>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut set = Self::new();
        for term in terms {
            set.add(term.as_ref());
        }
        set
    }

    /// Add a term. Returns `false` for empty or already-present terms.
    pub fn add(&mut self, term: &str) -> bool {
        if self.contains(term) {
            return false;
        }
        let term = normalize(term);
        if term.is_empty() {
            return false;
        }
        self.terms.push(term);
        true
    }

    /// Remove a term (case-insensitive). Returns whether anything was removed.
    pub fn remove(&mut self, term: &str) -> bool {
        let term = normalize(term);
        let before = self.terms.len();
        self.terms.retain(|t| *t != term);
        self.terms.len() != before
    }

    /// Stored terms in insertion order.
    pub fn list(&self) -> &[String] {
        &self.terms
    }

    /// True if `term` is stored, ignoring case and surrounding whitespace.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(&normalize(term))
    }

    /// True if any stored term appears in `dish_name`, ignoring case.
    pub fn is_excluded(&self, dish_name: &str) -> bool {
        if self.terms.is_empty() {
            return false;
        }
        let name = dish_name.to_lowercase();
        self.terms.iter().any(|t| name.contains(t.as_str()))
    }

    /// Keep only the dishes no term excludes.
    pub fn filter_pool<'a, I>(&self, pool: I) -> Vec<&'a DishEntry>
    where
        I: IntoIterator<Item = &'a DishEntry>,
    {
        pool.into_iter()
            .filter(|d| !self.is_excluded(&d.name))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
