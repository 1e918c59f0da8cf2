use crate::core::geometry::{HexagonVertices, checked_hexagon, hexagon_polygon};
use crate::util::coord::{GeoPoint, LatLng};
use crate::util::error::{HexCartoError, HexCartoResult};
use geo_types::Polygon;
use geojson::{Feature, JsonObject};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Keys owned by the region record itself. They are never stored as extra
/// attributes.
pub const RESERVED_KEYS: [&str; 3] = ["name", "center", "hexagonCoordinates"];

/// A named area drawn as one hexagon on a choropleth map.
///
/// Extra attributes (surface, population, ...) live in `properties` and are
/// carried through to the GeoJSON output untouched. In JSON they sit next to
/// `name` and `center` rather than in a nested object. Attributes named after
/// one of [`RESERVED_KEYS`] are dropped.
///
/// # Example
///
/// ```
/// use hexcarto::Region;
///
/// # fn main() -> Result<(), hexcarto::HexCartoError> {
/// let region = Region::new("Bretagne", &(48.1797222222, -2.8386111111))
///     .with_property("population", 3_400_000)
///     .with_hexagon(0.8)?;
///
/// let polygon = region.to_polygon()?;
/// assert_eq!(polygon.exterior().coords().count(), 7);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    /// Center as `[latitude, longitude]`
    pub center: GeoPoint,
    /// Computed hexagon vertices, `None` until [`Region::with_hexagon`] runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hexagon_coordinates: Option<HexagonVertices>,
    #[serde(flatten)]
    properties: JsonObject,
}

impl Region {
    pub fn new(name: impl Into<String>, center: &impl LatLng) -> Self {
        Self {
            name: name.into(),
            center: GeoPoint::from_lat_lng(center),
            hexagon_coordinates: None,
            properties: JsonObject::new(),
        }
    }

    /// Adds an extra attribute. Reserved keys are ignored with a warning.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if is_reserved(&key) {
            warn!(region = %self.name, key = %key, "ignoring reserved property key");
            return self;
        }
        self.properties.insert(key, value.into());
        self
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn properties(&self) -> &JsonObject {
        &self.properties
    }

    /// Returns the region with hexagon vertices computed around its center.
    ///
    /// Any previously computed hexagon is replaced.
    pub fn with_hexagon(mut self, radius: f64) -> HexCartoResult<Self> {
        self.hexagon_coordinates = Some(checked_hexagon(&self.center, radius)?);
        Ok(self)
    }

    pub fn has_geometry(&self) -> bool {
        self.hexagon_coordinates.is_some()
    }

    /// Converts the computed hexagon into a closed, counterclockwise
    /// `(lng, lat)` polygon.
    pub fn to_polygon(&self) -> HexCartoResult<Polygon<f64>> {
        self.hexagon_coordinates
            .as_ref()
            .map(hexagon_polygon)
            .ok_or_else(|| HexCartoError::MissingGeometry(self.name.clone()))
    }

    /// The region record as a JSON object, without its hexagon coordinates.
    pub fn to_properties(&self) -> JsonObject {
        let mut record: JsonObject = self
            .properties
            .iter()
            .filter(|(key, _)| !is_reserved(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        record.insert("name".to_string(), Value::String(self.name.clone()));
        record.insert(
            "center".to_string(),
            Value::from(vec![self.center.lat, self.center.lng]),
        );
        record
    }

    /// Wraps the region's hexagon in a GeoJSON feature, with the region
    /// record nested under `property_key` in the feature properties.
    pub fn to_feature(&self, property_key: &str) -> HexCartoResult<Feature> {
        let polygon = self.to_polygon()?;

        let mut properties = JsonObject::new();
        properties.insert(
            property_key.to_string(),
            Value::Object(self.to_properties()),
        );

        Ok(Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::from(&polygon)),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        })
    }
}

fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::hexagon_coordinates_with_radius;
    use serde_json::json;

    #[test]
    fn test_new_region_has_no_geometry() {
        let region = Region::new("Corse", &(42.1497222222, 9.1052777778));
        assert!(!region.has_geometry());
        assert!(matches!(
            region.to_polygon(),
            Err(HexCartoError::MissingGeometry(name)) if name == "Corse"
        ));
    }

    #[test]
    fn test_with_hexagon() -> HexCartoResult<()> {
        let region = Region::new("Corse", &(42.1497222222, 9.1052777778)).with_hexagon(0.8)?;
        assert_eq!(
            region.hexagon_coordinates,
            Some(hexagon_coordinates_with_radius(42.1497222222, 9.1052777778, 0.8))
        );
        Ok(())
    }

    #[test]
    fn test_with_hexagon_rejects_bad_input() {
        let region = Region::new("Nowhere", &(f64::NAN, 0.0));
        assert!(matches!(
            region.with_hexagon(1.0),
            Err(HexCartoError::NonFiniteInput { .. })
        ));
    }

    #[test]
    fn test_deserialize_flattens_extra_attributes() -> HexCartoResult<()> {
        let region: Region = serde_json::from_value(json!({
            "name": "Auvergne-Rhône-Alpes",
            "center": [45.5158333333, 4.5380555556],
            "surface": 69711,
            "population": 8042963
        }))?;

        assert_eq!(region.name, "Auvergne-Rhône-Alpes");
        assert_eq!(region.center, GeoPoint::new(45.5158333333, 4.5380555556));
        assert_eq!(region.property("surface"), Some(&json!(69711)));
        assert_eq!(region.property("population"), Some(&json!(8042963)));
        assert!(region.hexagon_coordinates.is_none());
        Ok(())
    }

    #[test]
    fn test_to_properties_drops_hexagon() -> HexCartoResult<()> {
        let region = Region::new("Bretagne", &(48.18, -2.84))
            .with_property("surface", 27208)
            .with_hexagon(1.0)?;

        let record = region.to_properties();
        assert_eq!(record.get("name"), Some(&json!("Bretagne")));
        assert_eq!(record.get("center"), Some(&json!([48.18, -2.84])));
        assert_eq!(record.get("surface"), Some(&json!(27208)));
        assert!(record.get("hexagonCoordinates").is_none());
        Ok(())
    }

    #[test]
    fn test_reserved_keys_are_not_properties() -> HexCartoResult<()> {
        let region = Region::new("Alsace", &(48.3, 7.4))
            .with_property("hexagonCoordinates", json!([1, 2]))
            .with_property("name", "Elsass")
            .with_property("center", json!([0.0, 0.0]))
            .with_property("surface", 8280)
            .with_hexagon(1.0)?;

        assert!(region.property("hexagonCoordinates").is_none());
        assert!(region.property("name").is_none());
        assert_eq!(region.properties().len(), 1);

        let record = region.to_properties();
        assert!(record.get("hexagonCoordinates").is_none());
        assert_eq!(record.get("name"), Some(&json!("Alsace")));
        assert_eq!(record.get("center"), Some(&json!([48.3, 7.4])));

        let feature = region.to_feature("region")?;
        let properties = feature.properties.unwrap_or_default();
        assert!(properties["region"].get("hexagonCoordinates").is_none());
        Ok(())
    }

    #[test]
    fn test_serialize_has_no_duplicate_keys() -> HexCartoResult<()> {
        let region = Region::new("A", &(1.0, 2.0)).with_property("name", "B");
        let json = serde_json::to_string(&region)?;
        assert_eq!(json, r#"{"name":"A","center":[1.0,2.0]}"#);
        Ok(())
    }

    #[test]
    fn test_to_feature() -> HexCartoResult<()> {
        let region = Region::new("Bretagne", &(48.18, -2.84)).with_hexagon(1.0)?;
        let feature = region.to_feature("region")?;

        let value = feature.geometry.map(|g| g.value);
        match value {
            Some(geojson::Value::Polygon(rings)) => {
                assert_eq!(rings.len(), 1);
                assert_eq!(rings[0].len(), 7);
                assert_eq!(rings[0][0], rings[0][6]);
            }
            _ => panic!("Expected Polygon"),
        }

        let properties = feature.properties.unwrap_or_default();
        assert_eq!(properties["region"]["name"], json!("Bretagne"));
        Ok(())
    }
}
