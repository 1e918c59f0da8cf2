use crate::api::region::Region;
use crate::util::coord::GeoPoint;
use crate::util::error::{HexCartoError, HexCartoResult};
use serde_json::Value;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

/// Configuration for reading regions from a CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCsvConfig {
    pub name_column: String,
    pub lat_column: String,
    pub lng_column: String,
    pub exclude_columns: Vec<String>,
}

impl Default for RegionCsvConfig {
    fn default() -> Self {
        Self::new("name", "lat", "lng")
    }
}

impl RegionCsvConfig {
    /// # Example
    /// ```
    /// use hexcarto::RegionCsvConfig;
    ///
    /// let config = RegionCsvConfig::new("Region", "Latitude", "Longitude")
    ///     .exclude(vec!["Code".into()]);
    /// ```
    pub fn new(
        name_column: impl Into<String>,
        lat_column: impl Into<String>,
        lng_column: impl Into<String>,
    ) -> Self {
        Self {
            name_column: name_column.into(),
            lat_column: lat_column.into(),
            lng_column: lng_column.into(),
            exclude_columns: Vec::new(),
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }
}

/// Reads one region per CSV row.
///
/// Columns other than name, latitude, longitude and the excluded ones become
/// region properties: numbers when the cell parses as `f64`, strings
/// otherwise. Empty cells are skipped.
pub fn read_regions_csv(reader: impl Read, config: &RegionCsvConfig) -> HexCartoResult<Vec<Region>> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| HexCartoError::Csv(e.to_string()))?
        .clone();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| HexCartoError::Csv(format!("Column '{}' not found", name)))
    };
    let name_idx = column(config.name_column.as_str())?;
    let lat_idx = column(config.lat_column.as_str())?;
    let lng_idx = column(config.lng_column.as_str())?;

    let mut skip: HashSet<usize> = [name_idx, lat_idx, lng_idx].into_iter().collect();
    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            skip.insert(idx);
        }
    }

    let mut regions = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|e| HexCartoError::Csv(e.to_string()))?;

        let field = |idx: usize| {
            record.get(idx).map(str::trim).ok_or_else(|| {
                HexCartoError::Csv(format!("Row {}: missing column at index {}", row + 1, idx))
            })
        };
        let coordinate = |idx: usize| -> HexCartoResult<f64> {
            let raw = field(idx)?;
            raw.parse().map_err(|_| {
                HexCartoError::Csv(format!("Row {}: invalid coordinate '{}'", row + 1, raw))
            })
        };

        let center = GeoPoint::new(coordinate(lat_idx)?, coordinate(lng_idx)?).checked()?;
        let mut region = Region::new(field(name_idx)?, &center);

        for (i, value) in record.iter().enumerate() {
            let value = value.trim();
            if skip.contains(&i) || value.is_empty() {
                continue;
            }
            if let Some(header) = headers.get(i) {
                region = region.with_property(header, cell_value(value));
            }
        }

        trace!(row = row + 1, name = %region.name, "read region");
        regions.push(region);
    }

    debug!(regions = regions.len(), "read regions from CSV");
    Ok(regions)
}

/// Reads regions from a CSV file on disk.
pub fn read_regions_csv_path(
    path: impl AsRef<Path>,
    config: &RegionCsvConfig,
) -> HexCartoResult<Vec<Region>> {
    let file = File::open(path)?;
    read_regions_csv(file, config)
}

fn cell_value(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Value::from(n),
        _ => Value::String(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const REGIONS_CSV: &str = "\
name,lat,lng,surface,code
Auvergne-Rhône-Alpes,45.5158333333,4.5380555556,69711,ARA
Bretagne,48.1797222222,-2.8386111111,,BRE
";

    #[test]
    fn test_read_regions_csv() -> HexCartoResult<()> {
        let regions = read_regions_csv(REGIONS_CSV.as_bytes(), &RegionCsvConfig::default())?;

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].name, "Auvergne-Rhône-Alpes");
        assert_eq!(regions[0].center, GeoPoint::new(45.5158333333, 4.5380555556));
        assert_eq!(regions[0].property("surface"), Some(&json!(69711)));
        assert_eq!(regions[0].property("code"), Some(&json!("ARA")));
        assert_eq!(regions[1].property("surface"), None);
        assert!(regions.iter().all(|r| !r.has_geometry()));
        Ok(())
    }

    #[test]
    fn test_excluded_columns() -> HexCartoResult<()> {
        let config = RegionCsvConfig::default().exclude(vec!["code".into()]);
        let regions = read_regions_csv(REGIONS_CSV.as_bytes(), &config)?;
        assert!(regions.iter().all(|r| r.property("code").is_none()));
        Ok(())
    }

    #[test]
    fn test_missing_column() {
        let config = RegionCsvConfig::new("name", "latitude", "lng");
        let result = read_regions_csv(REGIONS_CSV.as_bytes(), &config);
        assert_eq!(
            result,
            Err(HexCartoError::Csv("Column 'latitude' not found".to_string()))
        );
    }

    #[test]
    fn test_invalid_coordinate() {
        let csv = "name,lat,lng\nCorse,north,9.1\n";
        let result = read_regions_csv(csv.as_bytes(), &RegionCsvConfig::default());
        assert!(matches!(result, Err(HexCartoError::Csv(msg)) if msg.contains("north")));
    }

    #[test]
    fn test_non_finite_coordinate() {
        let csv = "name,lat,lng\nCorse,NaN,9.1\n";
        let result = read_regions_csv(csv.as_bytes(), &RegionCsvConfig::default());
        assert!(matches!(result, Err(HexCartoError::NonFiniteInput { .. })));
    }

    #[test]
    fn test_read_regions_csv_path() -> HexCartoResult<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(REGIONS_CSV.as_bytes())?;

        let regions = read_regions_csv_path(file.path(), &RegionCsvConfig::default())?;
        assert_eq!(regions.len(), 2);
        Ok(())
    }

    #[test]
    fn test_cell_value() {
        assert_eq!(cell_value("42"), json!(42));
        assert_eq!(cell_value("4.5"), json!(4.5));
        assert_eq!(cell_value("ARA"), json!("ARA"));
        assert_eq!(cell_value("-7"), json!(-7));
        assert_eq!(cell_value("NaN"), json!("NaN"));
    }

    #[test]
    fn test_cell_value_keeps_large_integers() {
        assert_eq!(cell_value("9007199254740993"), json!(9007199254740993_i64));
        assert_eq!(cell_value("9223372036854775807"), json!(i64::MAX));
    }
}
