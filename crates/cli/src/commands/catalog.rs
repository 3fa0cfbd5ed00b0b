use happycore_core::ValueCategory;

use crate::commands::{load_catalog, CommandResult};

pub fn run() -> CommandResult {
    let (config, catalog) = match load_catalog("catalog") {
        Ok(loaded) => loaded,
        Err(failure) => return failure,
    };

    let counts = ValueCategory::ALL
        .iter()
        .map(|category| {
            format!("{}: {}", category.label(), catalog.known_values(*category).len())
        })
        .collect::<Vec<_>>()
        .join(", ");

    CommandResult::success(
        "catalog",
        format!(
            "loaded {} records from `{}` (distinct values: {counts})",
            catalog.len(),
            config.catalog.path.display()
        ),
    )
}
