//! Read-only laptop catalog and the distinct values used to recognise
//! constraint tokens in free text.

mod loader;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::laptop::CatalogRecord;
use crate::errors::DataLoadError;

pub use loader::REQUIRED_COLUMNS;

/// Field families that a query token can be matched against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueCategory {
    Brand,
    Processor,
    OperatingSystem,
}

impl ValueCategory {
    pub const ALL: [ValueCategory; 3] = [Self::Brand, Self::Processor, Self::OperatingSystem];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Processor => "processor",
            Self::OperatingSystem => "os",
        }
    }

    fn field<'a>(&self, record: &'a CatalogRecord) -> &'a str {
        match self {
            Self::Brand => &record.brand,
            Self::Processor => &record.processor_name,
            Self::OperatingSystem => &record.operating_system,
        }
    }
}

/// Distinct non-empty values per category, in first-appearance order.
///
/// The order is observable: constraint extraction picks the first value that
/// occurs in a message, so it must follow the catalog rather than be sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KnownValues {
    brands: Vec<String>,
    processors: Vec<String>,
    operating_systems: Vec<String>,
}

impl KnownValues {
    pub fn from_records(records: &[CatalogRecord]) -> Self {
        Self {
            brands: distinct(records, ValueCategory::Brand),
            processors: distinct(records, ValueCategory::Processor),
            operating_systems: distinct(records, ValueCategory::OperatingSystem),
        }
    }

    pub fn get(&self, category: ValueCategory) -> &[String] {
        match category {
            ValueCategory::Brand => &self.brands,
            ValueCategory::Processor => &self.processors,
            ValueCategory::OperatingSystem => &self.operating_systems,
        }
    }
}

fn distinct(records: &[CatalogRecord], category: ValueCategory) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|record| category.field(record))
        .filter(|value| !value.trim().is_empty())
        .filter(|value| seen.insert(*value))
        .map(str::to_owned)
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
    known: KnownValues,
}

impl Catalog {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        let known = KnownValues::from_records(&records);
        Self { records, known }
    }

    /// Reads a CSV catalog from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        loader::load_csv(path.as_ref()).map(Self::new)
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn known_values(&self, category: ValueCategory) -> &[String] {
        self.known.get(category)
    }

    pub fn known(&self) -> &KnownValues {
        &self.known
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, ValueCategory};
    use crate::domain::laptop::CatalogRecord;

    fn record(model: &str, brand: &str, processor: &str, os: &str) -> CatalogRecord {
        CatalogRecord {
            model_name: model.to_owned(),
            brand: brand.to_owned(),
            processor_name: processor.to_owned(),
            operating_system: os.to_owned(),
            price: 50_000,
            ram_gb: 8,
            ssd_gb: 512,
            spec_score: 60.0,
        }
    }

    #[test]
    fn known_values_keep_first_appearance_order() {
        let catalog = Catalog::new(vec![
            record("Inspiron 3520", "Dell", "Intel Core i5", "Windows 11 OS"),
            record("Pavilion 14", "HP", "AMD Ryzen 5", "Windows 11 OS"),
            record("Vostro 3420", "Dell", "Intel Core i3", "Windows 10 OS"),
            record("Chromebook", "Acer", "MediaTek Kompanio", "Chrome OS"),
        ]);

        assert_eq!(catalog.known_values(ValueCategory::Brand), ["Dell", "HP", "Acer"]);
        assert_eq!(
            catalog.known_values(ValueCategory::OperatingSystem),
            ["Windows 11 OS", "Windows 10 OS", "Chrome OS"]
        );
        assert_eq!(catalog.known_values(ValueCategory::Processor).len(), 4);
    }

    #[test]
    fn empty_values_are_not_known_but_records_stay() {
        let catalog = Catalog::new(vec![
            record("Mystery", "", "  ", "Windows 11 OS"),
            record("Aspire 7", "Acer", "AMD Ryzen 5", ""),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.known_values(ValueCategory::Brand), ["Acer"]);
        assert_eq!(catalog.known_values(ValueCategory::Processor), ["AMD Ryzen 5"]);
        assert_eq!(catalog.known_values(ValueCategory::OperatingSystem), ["Windows 11 OS"]);
    }

    #[test]
    fn distinct_values_are_case_sensitive_and_verbatim() {
        let catalog = Catalog::new(vec![
            record("A", "Dell", "x", "y"),
            record("B", "dell", "x", "y"),
            record("C", "Dell", "x", "y"),
        ]);

        assert_eq!(catalog.known_values(ValueCategory::Brand), ["Dell", "dell"]);
    }

    #[test]
    fn every_known_value_appears_in_some_record() {
        let catalog = Catalog::new(vec![
            record("A", "Lenovo", "Intel Core i7", "Windows 11 OS"),
            record("B", "Asus", "AMD Ryzen 7", "DOS OS"),
        ]);

        for category in ValueCategory::ALL {
            for value in catalog.known_values(category) {
                assert!(catalog.records().iter().any(|record| category.field(record) == value));
            }
        }
    }
}
