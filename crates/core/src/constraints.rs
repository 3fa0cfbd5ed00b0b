//! Structured constraints recovered from a free-text search message.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::{KnownValues, ValueCategory};
use crate::domain::laptop::CatalogRecord;

/// "under 60000", "under ₹60000", "under ₹ 60000".
const PRICE_CEILING_PATTERN: &str = r"under\s*₹?\s*([0-9]+)";

fn price_ceiling_regex() -> &'static Regex {
    static PRICE_CEILING: OnceLock<Regex> = OnceLock::new();
    PRICE_CEILING
        .get_or_init(|| Regex::new(PRICE_CEILING_PATTERN).expect("price ceiling pattern is valid"))
}

/// At most one value per category; `None` leaves that dimension unfiltered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConstraints {
    pub brand: Option<String>,
    pub processor_substring: Option<String>,
    pub os_substring: Option<String>,
    pub max_price: Option<u64>,
}

/// A single filter criterion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Constraint {
    /// Case-insensitive equality on brand.
    Brand(String),
    /// Case-insensitive containment in processor name.
    Processor(String),
    /// Case-insensitive containment in operating system.
    OperatingSystem(String),
    /// Inclusive price ceiling.
    MaxPrice(u64),
}

impl Constraint {
    pub fn matches(&self, record: &CatalogRecord) -> bool {
        match self {
            Self::Brand(brand) => record.brand_equals(brand),
            Self::Processor(fragment) => record.processor_contains(fragment),
            Self::OperatingSystem(fragment) => record.operating_system_contains(fragment),
            Self::MaxPrice(ceiling) => record.price <= *ceiling,
        }
    }
}

impl SearchConstraints {
    pub fn is_empty(&self) -> bool {
        self.active().is_empty()
    }

    /// Present constraints in extraction order: brand, processor, OS, price.
    pub fn active(&self) -> Vec<Constraint> {
        let mut active = Vec::with_capacity(4);
        if let Some(brand) = &self.brand {
            active.push(Constraint::Brand(brand.clone()));
        }
        if let Some(processor) = &self.processor_substring {
            active.push(Constraint::Processor(processor.clone()));
        }
        if let Some(os) = &self.os_substring {
            active.push(Constraint::OperatingSystem(os.clone()));
        }
        if let Some(ceiling) = self.max_price {
            active.push(Constraint::MaxPrice(ceiling));
        }
        active
    }
}

/// Derives constraints from a normalized message.
///
/// Each category is scanned independently against the catalog's known
/// values; the first value found in the message wins for that category.
pub fn extract(normalized: &str, known: &KnownValues) -> SearchConstraints {
    SearchConstraints {
        brand: first_mentioned(normalized, known.get(ValueCategory::Brand)),
        processor_substring: first_mentioned(normalized, known.get(ValueCategory::Processor)),
        os_substring: first_mentioned(normalized, known.get(ValueCategory::OperatingSystem)),
        max_price: price_ceiling(normalized),
    }
}

fn first_mentioned(normalized: &str, candidates: &[String]) -> Option<String> {
    candidates.iter().find(|value| normalized.contains(&value.to_lowercase())).cloned()
}

/// First "under <digits>" ceiling in the message. Digit runs beyond `u64`
/// saturate, which keeps every record.
pub fn price_ceiling(normalized: &str) -> Option<u64> {
    let captures = price_ceiling_regex().captures(normalized)?;
    let digits = captures.get(1)?.as_str();
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}
