use crate::catalog::Catalog;
use crate::constraints::SearchConstraints;
use crate::domain::laptop::CatalogRecord;

/// Records surviving every active constraint, in catalog order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidateSet<'a> {
    records: Vec<&'a CatalogRecord>,
}

impl<'a> CandidateSet<'a> {
    pub fn records(&self) -> &[&'a CatalogRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<&'a CatalogRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Narrows the catalog by each present constraint in turn (logical AND).
pub fn apply<'a>(catalog: &'a Catalog, constraints: &SearchConstraints) -> CandidateSet<'a> {
    let mut records: Vec<&CatalogRecord> = catalog.records().iter().collect();
    for constraint in constraints.active() {
        records.retain(|record| constraint.matches(record));
        if records.is_empty() {
            break;
        }
    }
    CandidateSet { records }
}
