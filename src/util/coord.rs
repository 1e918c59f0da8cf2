use crate::util::error::{HexCartoError, HexCartoResult};
use geo_types::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A WGS84 position in decimal degrees.
///
/// Serialized as a `[latitude, longitude]` pair, the order callers use
/// for region centers. GeoJSON output flips this to `[longitude, latitude]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a point from anything exposing latitude and longitude.
    pub fn from_lat_lng(coord: &impl LatLng) -> Self {
        Self::new(coord.lat(), coord.lng())
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Returns the point unchanged if both components are finite.
    pub fn checked(self) -> HexCartoResult<Self> {
        ensure_finite("latitude", self.lat)?;
        ensure_finite("longitude", self.lng)?;
        Ok(self)
    }

    /// GeoJSON axis order: x = longitude, y = latitude.
    pub fn to_lng_lat(&self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.lat, point.lng]
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from(pair: (f64, f64)) -> Self {
        Self::new(pair.0, pair.1)
    }
}

/// Trait for types that can provide a latitude/longitude pair.
///
/// Tuples and arrays are read as `(latitude, longitude)`. A
/// `geo_types::Point` follows GeoJSON order, so `x` is the longitude.
pub trait LatLng {
    fn lat(&self) -> f64;
    fn lng(&self) -> f64;
}

impl LatLng for GeoPoint {
    fn lat(&self) -> f64 {
        self.lat
    }
    fn lng(&self) -> f64 {
        self.lng
    }
}

impl LatLng for (f64, f64) {
    fn lat(&self) -> f64 {
        self.0
    }
    fn lng(&self) -> f64 {
        self.1
    }
}

impl LatLng for [f64; 2] {
    fn lat(&self) -> f64 {
        self[0]
    }
    fn lng(&self) -> f64 {
        self[1]
    }
}

impl LatLng for Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }
    fn lng(&self) -> f64 {
        self.x()
    }
}

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> HexCartoResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HexCartoError::NonFiniteInput { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_tuple_and_array() {
        let tuple = (48.18, -2.84);
        let array = [48.18, -2.84];
        assert_eq!(tuple.lat(), array.lat());
        assert_eq!(tuple.lng(), array.lng());
        assert_eq!(GeoPoint::from_lat_lng(&tuple), GeoPoint::new(48.18, -2.84));
    }

    #[test]
    fn test_lat_lng_geo_point_uses_xy_as_lng_lat() {
        let point = Point::new(-2.84, 48.18);
        assert_eq!(point.lat(), 48.18);
        assert_eq!(point.lng(), -2.84);
    }

    #[test]
    fn test_serde_pair_order() -> HexCartoResult<()> {
        let point = GeoPoint::new(45.5, 4.5);
        let json = serde_json::to_string(&point)?;
        assert_eq!(json, "[45.5,4.5]");

        let back: GeoPoint = serde_json::from_str(&json)?;
        assert_eq!(back, point);
        Ok(())
    }

    #[test]
    fn test_to_lng_lat_swaps_axes() {
        let coord = GeoPoint::new(45.5, 4.5).to_lng_lat();
        assert_eq!(coord.x, 4.5);
        assert_eq!(coord.y, 45.5);
    }

    #[test]
    fn test_checked_rejects_non_finite() {
        let result = GeoPoint::new(f64::NAN, 1.0).checked();
        assert!(matches!(
            result,
            Err(HexCartoError::NonFiniteInput {
                field: "latitude",
                ..
            })
        ));

        let result = GeoPoint::new(1.0, f64::NEG_INFINITY).checked();
        assert!(matches!(
            result,
            Err(HexCartoError::NonFiniteInput {
                field: "longitude",
                ..
            })
        ));
        assert!(GeoPoint::new(1.0, 2.0).checked().is_ok());
    }
}
