pub mod csv;
pub mod json;

pub use csv::{RegionCsvConfig, read_regions_csv, read_regions_csv_path};
pub use json::{GeometryFormat, read_regions_json, regions_to_wkt, write_feature_collection};
