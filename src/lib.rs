//! # hexcarto
//!
//! Geometry for hexagon choropleth maps. There are currently three main entry points.
//!
//! ### 1. `hexagon_coordinates` - Single Hexagon
//!
//! ```
//! use hexcarto::hexagon_coordinates;
//!
//! let hexagon = hexagon_coordinates(48.1797222222, -2.8386111111);
//! assert_eq!(hexagon.len(), 6);
//! ```
//!
//! ### 2. `create_regions_geojson` - Regions to a FeatureCollection
//!
//! ```
//! use hexcarto::{Region, RegionsToGeoJson, create_regions_geojson};
//!
//! # fn main() -> Result<(), hexcarto::HexCartoError> {
//! let regions = vec![
//!     Region::new("Bretagne", &(48.1797222222, -2.8386111111))
//!         .with_property("surface", 27208)
//!         .with_hexagon(0.8)?,
//! ];
//!
//! let collection = create_regions_geojson(&regions)?;
//! assert_eq!(collection.features.len(), 1);
//!
//! // Or straight to a GeoJSON string
//! println!("{}", regions.to_geojson_string()?);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `point_at_distance` - Placing Centers
//!
//! Position a region center relative to another one on a spherical Earth:
//!
//! ```
//! use hexcarto::{distance_km, point_at_distance};
//!
//! let bretagne = (48.1797222222, -2.8386111111);
//! let hdf = (49.9661111111, 2.7752777778);
//!
//! let half_way = distance_km(&bretagne, &hdf) / 2.0;
//! let normandie = point_at_distance(bretagne.0, bretagne.1, half_way, 63.0);
//! assert!(normandie.lat > bretagne.0);
//! ```
//!
//! Renderers that expect clockwise rings (d3-style spherical projections) can
//! flip the output with [`orient`] or the two-point heuristic [`rewind`].

pub mod api;
pub mod core;
pub mod io;
pub mod telemetry;
pub mod util;

pub use crate::api::{
    DEFAULT_PROPERTY_KEY, HexMapConfig, RESERVED_KEYS, Region, RegionsToGeoJson, build_hex_map,
    create_regions_geojson, hexagonize_regions, regions_to_feature_collection,
};
pub use crate::core::{
    DEFAULT_HEXAGON_RADIUS, EARTH_RADIUS_KM, HEXAGON_SIDES, HexagonDims, HexagonVertices,
    Orientation, RING_LENGTH, WindingCorrection, checked_hexagon, distance_km,
    hexagon_coordinates, hexagon_coordinates_with_radius, hexagon_polygon, hexagon_ring,
    neighbor_centers, orient, point_at_distance, rewind, ring_orientation, try_point_at_distance,
};
pub use crate::io::{
    GeometryFormat, RegionCsvConfig, read_regions_csv, read_regions_csv_path, read_regions_json,
    regions_to_wkt, write_feature_collection,
};
pub use crate::util::{GeoPoint, HexCartoError, HexCartoResult, LatLng};

pub use geo_types;
pub use geojson;
