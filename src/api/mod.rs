pub mod collection;
pub mod hex_map;
pub mod region;

pub use collection::{
    DEFAULT_PROPERTY_KEY, RegionsToGeoJson, create_regions_geojson, regions_to_feature_collection,
};
pub use hex_map::{HexMapConfig, build_hex_map, hexagonize_regions};
pub use region::{RESERVED_KEYS, Region};
