//! Ordering and rendering of search results.

use std::fmt::Write as _;

use crate::domain::laptop::CatalogRecord;
use crate::filter::CandidateSet;

pub const MAX_RESULTS: usize = 10;

pub const GREETING_REPLY: &str = "👋 Hello! Welcome to our HappyCore Systems.\n\
You can ask me anything like:\n\
- Suggest me a gaming laptop under ₹60000\n\
- I want a Dell laptop with Windows 11\n\
- Show me laptops with Ryzen 5 processor\n\
Go ahead, ask your question! 💬";

pub const FAREWELL_REPLY: &str =
    "🙏 Thank you for visiting!\nI hope my recommendations help you choose the best laptop.\n";

pub const NO_MATCHES_REPLY: &str =
    "😕 Sorry, no laptops match your criteria. Please try different filters.";

pub const LISTING_HEADER: &str = "🔍 Here are the best matching laptops:";

const CURRENCY_SYMBOL: char = '₹';

/// Result of ranking a candidate set.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome<'a> {
    Matches(Vec<&'a CatalogRecord>),
    NoMatches,
}

impl SearchOutcome<'_> {
    pub fn match_count(&self) -> usize {
        match self {
            Self::Matches(records) => records.len(),
            Self::NoMatches => 0,
        }
    }
}

/// Highest spec score first, catalog order among equals, at most
/// [`MAX_RESULTS`] entries.
pub fn rank(candidates: CandidateSet<'_>) -> SearchOutcome<'_> {
    if candidates.is_empty() {
        return SearchOutcome::NoMatches;
    }

    let mut records = candidates.into_records();
    // `sort_by` is stable, so equal scores keep catalog order.
    records.sort_by(|left, right| right.spec_score.total_cmp(&left.spec_score));
    records.truncate(MAX_RESULTS);
    SearchOutcome::Matches(records)
}

pub fn render(outcome: &SearchOutcome<'_>) -> String {
    let records = match outcome {
        SearchOutcome::Matches(records) if !records.is_empty() => records,
        _ => return NO_MATCHES_REPLY.to_owned(),
    };

    let mut reply = String::from(LISTING_HEADER);
    reply.push('\n');
    for (index, record) in records.iter().enumerate() {
        let _ = write!(
            reply,
            "{rank}. {model} ({brand}) - {CURRENCY_SYMBOL}{price}\n   \
             Processor: {processor}, RAM: {ram}GB, SSD: {ssd}GB, OS: {os}\n",
            rank = index + 1,
            model = record.model_name,
            brand = record.brand,
            price = record.price,
            processor = record.processor_name,
            ram = record.ram_gb,
            ssd = record.ssd_gb,
            os = record.operating_system,
        );
    }

    reply.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::constraints::SearchConstraints;
    use crate::domain::laptop::CatalogRecord;
    use crate::filter::apply;
    use crate::ranking::{rank, render, SearchOutcome, MAX_RESULTS, NO_MATCHES_REPLY};

    fn record(model: &str, score: f64) -> CatalogRecord {
        CatalogRecord {
            model_name: model.to_owned(),
            brand: "Asus".to_owned(),
            processor_name: "AMD Ryzen 7 6800H".to_owned(),
            operating_system: "Windows 11 OS".to_owned(),
            price: 84_990,
            ram_gb: 16,
            ssd_gb: 1024,
            spec_score: score,
        }
    }

    fn ranked_models(catalog: &Catalog) -> Vec<String> {
        match rank(apply(catalog, &SearchConstraints::default())) {
            SearchOutcome::Matches(records) => {
                records.iter().map(|record| record.model_name.clone()).collect()
            }
            SearchOutcome::NoMatches => Vec::new(),
        }
    }

    #[test]
    fn orders_by_descending_score() {
        let catalog =
            Catalog::new(vec![record("low", 50.0), record("high", 80.0), record("mid", 65.5)]);
        assert_eq!(ranked_models(&catalog), ["high", "mid", "low"]);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = Catalog::new(vec![
            record("first", 70.0),
            record("top", 90.0),
            record("second", 70.0),
            record("third", 70.0),
        ]);
        assert_eq!(ranked_models(&catalog), ["top", "first", "second", "third"]);
    }

    #[test]
    fn truncates_to_max_results() {
        let records = (0..25).map(|index| record(&format!("model-{index}"), index as f64)).collect();
        let catalog = Catalog::new(records);

        let models = ranked_models(&catalog);
        assert_eq!(models.len(), MAX_RESULTS);
        assert_eq!(models[0], "model-24");
        assert_eq!(models[9], "model-15");
    }

    #[test]
    fn empty_candidates_render_no_matches() {
        let catalog = Catalog::new(Vec::new());
        let outcome = rank(apply(&catalog, &SearchConstraints::default()));
        assert_eq!(outcome, SearchOutcome::NoMatches);
        assert_eq!(render(&outcome), NO_MATCHES_REPLY);
    }

    #[test]
    fn renders_numbered_listing_with_literal_fields() {
        let catalog = Catalog::new(vec![
            CatalogRecord {
                model_name: "Victus 15-fb0157AX".to_owned(),
                brand: "HP".to_owned(),
                processor_name: "AMD Ryzen 5 5600H".to_owned(),
                operating_system: "Windows 11 OS".to_owned(),
                price: 50_399,
                ram_gb: 8,
                ssd_gb: 512,
                spec_score: 73.0,
            },
            record("ROG Strix G15", 81.0),
        ]);

        let reply = render(&rank(apply(&catalog, &SearchConstraints::default())));

        assert_eq!(
            reply,
            "🔍 Here are the best matching laptops:\n\
             1. ROG Strix G15 (Asus) - ₹84990\n   \
             Processor: AMD Ryzen 7 6800H, RAM: 16GB, SSD: 1024GB, OS: Windows 11 OS\n\
             2. Victus 15-fb0157AX (HP) - ₹50399\n   \
             Processor: AMD Ryzen 5 5600H, RAM: 8GB, SSD: 512GB, OS: Windows 11 OS"
        );
    }
}
