use crate::api::collection::{DEFAULT_PROPERTY_KEY, regions_to_feature_collection};
use crate::api::region::Region;
use crate::core::constants::DEFAULT_HEXAGON_RADIUS;
use crate::core::dimensions::HexagonDims;
use crate::core::winding::WindingCorrection;
use crate::util::error::HexCartoResult;
use geojson::FeatureCollection;
use tracing::debug;

/// Configuration for turning regions into a hexagon map.
#[derive(Debug, Clone, PartialEq)]
pub struct HexMapConfig {
    /// Hexagon circumradius, in degrees
    pub radius: f64,
    /// Properties key holding the region record in each feature
    pub property_key: String,
    pub winding: WindingCorrection,
}

impl Default for HexMapConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_HEXAGON_RADIUS,
            property_key: DEFAULT_PROPERTY_KEY.to_string(),
            winding: WindingCorrection::default(),
        }
    }
}

impl HexMapConfig {
    /// # Example
    /// ```
    /// use hexcarto::{HexMapConfig, WindingCorrection};
    ///
    /// let config = HexMapConfig::new()
    ///     .radius(0.8)
    ///     .property_key("area")
    ///     .winding(WindingCorrection::Clockwise);
    /// assert_eq!(config.radius, 0.8);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the radius from the center-to-edge distance instead.
    pub fn apothem(mut self, apothem: f64) -> HexCartoResult<Self> {
        self.radius = HexagonDims::from_apothem(apothem)?.circumradius;
        Ok(self)
    }

    pub fn property_key(mut self, key: impl Into<String>) -> Self {
        self.property_key = key.into();
        self
    }

    pub fn winding(mut self, winding: WindingCorrection) -> Self {
        self.winding = winding;
        self
    }
}

/// Copies the regions, computing hexagons of `radius` for those without one.
///
/// Regions that already carry hexagon coordinates keep them.
pub fn hexagonize_regions(regions: &[Region], radius: f64) -> HexCartoResult<Vec<Region>> {
    regions
        .iter()
        .map(|region| {
            if region.has_geometry() {
                Ok(region.clone())
            } else {
                region.clone().with_hexagon(radius)
            }
        })
        .collect()
}

/// Builds a hexagon map in one go: hexagons, feature collection, winding.
///
/// # Example
///
/// ```
/// use hexcarto::{HexMapConfig, Region, build_hex_map};
///
/// # fn main() -> Result<(), hexcarto::HexCartoError> {
/// let regions = vec![
///     Region::new("Corse", &(42.1497222222, 9.1052777778)),
///     Region::new("Grand Est", &(48.6891666667, 5.6194444444)),
/// ];
///
/// let collection = build_hex_map(&regions, &HexMapConfig::new().radius(0.8))?;
/// assert_eq!(collection.features.len(), 2);
/// # Ok(())
/// # }
/// ```
pub fn build_hex_map(
    regions: &[Region],
    config: &HexMapConfig,
) -> HexCartoResult<FeatureCollection> {
    let computed = regions.iter().filter(|r| !r.has_geometry()).count();
    let regions = hexagonize_regions(regions, config.radius)?;

    let mut collection = regions_to_feature_collection(&regions, &config.property_key)?;
    let reversed = config.winding.apply(&mut collection.features);

    debug!(
        regions = regions.len(),
        computed,
        reversed,
        radius = config.radius,
        winding = ?config.winding,
        "built hex map"
    );
    Ok(collection)
}
