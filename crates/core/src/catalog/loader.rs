use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::domain::laptop::CatalogRecord;
use crate::errors::DataLoadError;

const BRAND: &str = "brand";
const PROCESSOR_NAME: &str = "processor_name";
const OPERATING_SYSTEM: &str = "Operating System";
const PRICE: &str = "price";
const SPEC_SCORE: &str = "spec_score";
const MODEL_NAME: &str = "model_name";
const RAM_GB: &str = "ram(GB)";
const SSD_GB: &str = "ssd(GB)";

/// Header names the catalog source must provide. Other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 8] =
    [BRAND, PROCESSOR_NAME, OPERATING_SYSTEM, PRICE, SPEC_SCORE, MODEL_NAME, RAM_GB, SSD_GB];

struct ColumnIndex {
    brand: usize,
    processor_name: usize,
    operating_system: usize,
    price: usize,
    spec_score: usize,
    model_name: usize,
    ram_gb: usize,
    ssd_gb: usize,
}

impl ColumnIndex {
    fn resolve(path: &Path, headers: &StringRecord) -> Result<Self, DataLoadError> {
        let position = |column: &'static str| {
            headers
                .iter()
                .position(|header| header.trim_start_matches('\u{feff}').trim() == column)
                .ok_or_else(|| DataLoadError::MissingColumn { path: path.to_path_buf(), column })
        };

        Ok(Self {
            brand: position(BRAND)?,
            processor_name: position(PROCESSOR_NAME)?,
            operating_system: position(OPERATING_SYSTEM)?,
            price: position(PRICE)?,
            spec_score: position(SPEC_SCORE)?,
            model_name: position(MODEL_NAME)?,
            ram_gb: position(RAM_GB)?,
            ssd_gb: position(SSD_GB)?,
        })
    }
}

pub(super) fn load_csv(path: &Path) -> Result<Vec<CatalogRecord>, DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::Missing(path.to_path_buf()));
    }

    let file = File::open(path)
        .map_err(|source| DataLoadError::Read { path: path.to_path_buf(), source })?;
    let mut reader = ReaderBuilder::new().has_headers(true).flexible(true).from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| DataLoadError::Csv { path: path.to_path_buf(), source })?
        .clone();
    let columns = ColumnIndex::resolve(path, &headers)?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|source| DataLoadError::Csv { path: path.to_path_buf(), source })?;
        let line = row.position().map(|position| position.line()).unwrap_or(index as u64 + 2);
        let fields = RowFields { path, line, row: &row };

        records.push(CatalogRecord {
            model_name: fields.text(columns.model_name).to_owned(),
            brand: fields.text(columns.brand).to_owned(),
            processor_name: fields.text(columns.processor_name).to_owned(),
            operating_system: fields.text(columns.operating_system).to_owned(),
            price: fields.whole_number(columns.price, PRICE)?,
            ram_gb: fields.whole_number(columns.ram_gb, RAM_GB)?,
            ssd_gb: fields.whole_number(columns.ssd_gb, SSD_GB)?,
            spec_score: fields.score(columns.spec_score, SPEC_SCORE)?,
        });
    }

    Ok(records)
}

struct RowFields<'a> {
    path: &'a Path,
    line: u64,
    row: &'a StringRecord,
}

impl RowFields<'_> {
    fn text(&self, index: usize) -> &str {
        self.row.get(index).unwrap_or_default()
    }

    fn invalid(&self, column: &'static str, value: &str) -> DataLoadError {
        DataLoadError::InvalidField {
            path: self.path.to_path_buf(),
            line: self.line,
            column,
            value: value.to_owned(),
        }
    }

    /// Accepts `52990` as well as spreadsheet exports such as `52990.0`.
    fn whole_number<T>(&self, index: usize, column: &'static str) -> Result<T, DataLoadError>
    where
        T: TryFrom<u64> + std::str::FromStr,
    {
        let raw = self.text(index).trim();
        if let Ok(value) = raw.parse::<T>() {
            return Ok(value);
        }

        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0 && value.fract() == 0.0)
            .and_then(|value| T::try_from(value as u64).ok())
            .ok_or_else(|| self.invalid(column, raw))
    }

    fn score(&self, index: usize, column: &'static str) -> Result<f64, DataLoadError> {
        let raw = self.text(index).trim();
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| self.invalid(column, raw))
    }
}
