use std::sync::Arc;

use happycore_core::config::AppConfig;
use happycore_core::{Catalog, ChatEngine, DataLoadError, ValueCategory};
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub engine: ChatEngine,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("catalog load failed: {0}")]
    Catalog(#[from] DataLoadError),
}

/// Loads the catalog once; the resulting engine is shared read-only by every request.
pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        catalog_path = %config.catalog.path.display(),
        "starting application bootstrap"
    );

    let catalog = Catalog::load(&config.catalog.path)?;
    info!(
        event_name = "system.bootstrap.catalog_loaded",
        correlation_id = "bootstrap",
        records = catalog.len(),
        brands = catalog.known_values(ValueCategory::Brand).len(),
        processors = catalog.known_values(ValueCategory::Processor).len(),
        operating_systems = catalog.known_values(ValueCategory::OperatingSystem).len(),
        "catalog loaded"
    );

    Ok(Application { config, engine: ChatEngine::new(Arc::new(catalog)) })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use happycore_core::config::AppConfig;
    use happycore_core::GREETING_REPLY;
    use tempfile::TempDir;

    use crate::bootstrap::{bootstrap_with_config, BootstrapError};

    #[test]
    fn bootstrap_fails_fast_when_catalog_is_missing() {
        let dir = TempDir::new().expect("temp dir");
        let mut config = AppConfig::default();
        config.catalog.path = dir.path().join("missing.csv");
        let result = bootstrap_with_config(config);

        let error = result.err().expect("bootstrap should fail");
        assert!(matches!(error, BootstrapError::Catalog(_)));
        assert!(error.to_string().contains("missing.csv"));
    }

    #[test]
    fn bootstrap_loads_catalog_into_engine() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("laptop.csv");
        fs::write(
            &path,
            "brand,model_name,price,processor_name,ram(GB),ssd(GB),Operating System,spec_score\n\
             HP,Victus 15,52990,AMD Ryzen 5 5600H,8,512,Windows 11 OS,70\n",
        )
        .expect("write catalog");

        let mut config = AppConfig::default();
        config.catalog.path = path;
        let app = bootstrap_with_config(config).expect("bootstrap should succeed");

        assert_eq!(app.engine.catalog().len(), 1);
        assert_eq!(app.engine.respond("hi").text, GREETING_REPLY);
        assert!(app.engine.respond("hp laptop").text.contains("Victus 15 (HP)"));
    }
}
