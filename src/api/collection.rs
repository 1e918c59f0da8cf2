use crate::api::region::Region;
use crate::util::error::HexCartoResult;
use geojson::FeatureCollection;
use tracing::debug;

/// Key under which each feature's region record is stored in its properties.
pub const DEFAULT_PROPERTY_KEY: &str = "region";

/// Assembles a GeoJSON FeatureCollection with one hexagon Polygon per region.
///
/// Every region must already carry hexagon coordinates; the first one that
/// does not fails the whole call with
/// [`MissingGeometry`](crate::HexCartoError::MissingGeometry). Feature order
/// follows input order and the input regions are left untouched.
///
/// # Example
///
/// ```
/// use hexcarto::{Region, create_regions_geojson};
///
/// # fn main() -> Result<(), hexcarto::HexCartoError> {
/// let regions = vec![
///     Region::new("Bretagne", &(48.1797222222, -2.8386111111)).with_hexagon(0.8)?,
///     Region::new("Normandie", &(49.1211111111, 0.1066666667)).with_hexagon(0.8)?,
/// ];
///
/// let collection = create_regions_geojson(&regions)?;
/// assert_eq!(collection.features.len(), 2);
/// # Ok(())
/// # }
/// ```
pub fn create_regions_geojson(regions: &[Region]) -> HexCartoResult<FeatureCollection> {
    regions_to_feature_collection(regions, DEFAULT_PROPERTY_KEY)
}

/// [`create_regions_geojson`] with a custom properties key.
pub fn regions_to_feature_collection(
    regions: &[Region],
    property_key: &str,
) -> HexCartoResult<FeatureCollection> {
    let features = regions
        .iter()
        .map(|region| region.to_feature(property_key))
        .collect::<HexCartoResult<Vec<_>>>()?;

    debug!(
        features = features.len(),
        property_key, "built region feature collection"
    );

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

/// Trait for converting collections of [`Region`]s to GeoJSON.
///
/// Implemented for `[Region]` and `Vec<Region>`.
pub trait RegionsToGeoJson {
    /// Converts regions to a FeatureCollection of hexagon polygons.
    fn to_feature_collection(&self) -> HexCartoResult<FeatureCollection>;
    /// Converts regions to a compact GeoJSON string.
    fn to_geojson_string(&self) -> HexCartoResult<String>;
}

impl RegionsToGeoJson for [Region] {
    fn to_feature_collection(&self) -> HexCartoResult<FeatureCollection> {
        create_regions_geojson(self)
    }

    fn to_geojson_string(&self) -> HexCartoResult<String> {
        Ok(serde_json::to_string(&self.to_feature_collection()?)?)
    }
}

impl RegionsToGeoJson for Vec<Region> {
    fn to_feature_collection(&self) -> HexCartoResult<FeatureCollection> {
        self.as_slice().to_feature_collection()
    }

    fn to_geojson_string(&self) -> HexCartoResult<String> {
        self.as_slice().to_geojson_string()
    }
}
