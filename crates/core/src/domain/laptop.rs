use serde::{Deserialize, Serialize};

/// One laptop listing from the catalog source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub model_name: String,
    pub brand: String,
    pub processor_name: String,
    pub operating_system: String,
    pub price: u64,
    pub ram_gb: u32,
    pub ssd_gb: u32,
    pub spec_score: f64,
}

impl CatalogRecord {
    pub fn brand_equals(&self, brand: &str) -> bool {
        self.brand.to_lowercase() == brand.to_lowercase()
    }

    pub fn processor_contains(&self, fragment: &str) -> bool {
        self.processor_name.to_lowercase().contains(&fragment.to_lowercase())
    }

    pub fn operating_system_contains(&self, fragment: &str) -> bool {
        self.operating_system.to_lowercase().contains(&fragment.to_lowercase())
    }
}
