//! Number categories and the selector → upstream table.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of number sequence an upstream source generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Primes,
    Fibonacci,
    Even,
    Random,
}

impl Category {
    /// Every category the service knows about.
    pub const ALL: [Category; 4] =
        [Category::Primes, Category::Fibonacci, Category::Even, Category::Random];

    /// Parse a request selector (`p`, `f`, `e`, `r`).
    ///
    /// Matching is exact: selectors are case-sensitive.
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "p" => Some(Self::Primes),
            "f" => Some(Self::Fibonacci),
            "e" => Some(Self::Even),
            "r" => Some(Self::Random),
            _ => None,
        }
    }

    /// Selector code used in `/numbers/{selector}`.
    pub fn selector(self) -> &'static str {
        match self {
            Self::Primes => "p",
            Self::Fibonacci => "f",
            Self::Even => "e",
            Self::Random => "r",
        }
    }

    /// Path segment of the upstream source, relative to the base URL.
    pub fn upstream_path(self) -> &'static str {
        match self {
            Self::Primes => "primes",
            Self::Fibonacci => "fibo",
            Self::Even => "even",
            Self::Random => "rand",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Primes => "primes",
            Self::Fibonacci => "fibonacci",
            Self::Even => "even",
            Self::Random => "random",
        };
        f.write_str(name)
    }
}

/// Upstream location for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub category: Category,
    pub url: String,
}

/// Static mapping from selector to upstream source, read-only once built.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    endpoints: HashMap<Category, Endpoint>,
}

impl CategoryTable {
    /// Build the table for every category under `base_url`.
    pub fn from_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let endpoints = Category::ALL
            .into_iter()
            .map(|category| {
                let url = format!("{}/{}", base, category.upstream_path());
                (category, Endpoint { category, url })
            })
            .collect();

        Self { endpoints }
    }

    /// Look up the endpoint for a request selector.
    ///
    /// Returns `None` for unknown selectors.
    pub fn resolve(&self, selector: &str) -> Option<&Endpoint> {
        Category::from_selector(selector).and_then(|category| self.endpoints.get(&category))
    }

    /// Endpoint for a known category.
    pub fn endpoint(&self, category: Category) -> Option<&Endpoint> {
        self.endpoints.get(&category)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
