use crate::core::constants::EARTH_RADIUS_KM;
use crate::util::coord::{GeoPoint, LatLng, ensure_finite};
use crate::util::error::HexCartoResult;

/// Point reached by travelling `distance_km` from `(latitude, longitude)`
/// along the initial compass bearing `bearing` (degrees, 0 = north, clockwise).
///
/// Earth is modelled as a sphere of radius [`EARTH_RADIUS_KM`]. The bearing
/// is not normalized and the resulting longitude is not wrapped.
pub fn point_at_distance(latitude: f64, longitude: f64, distance_km: f64, bearing: f64) -> GeoPoint {
    let lat = latitude.to_radians();
    let lng = longitude.to_radians();
    let bearing = bearing.to_radians();
    let delta = distance_km / EARTH_RADIUS_KM;

    let dest_lat = (lat.sin() * delta.cos() + lat.cos() * delta.sin() * bearing.cos()).asin();
    let dest_lng = lng
        + (bearing.sin() * delta.sin() * lat.cos()).atan2(delta.cos() - lat.sin() * dest_lat.sin());

    GeoPoint::new(dest_lat.to_degrees(), dest_lng.to_degrees())
}

/// [`point_at_distance`] with every input required to be finite.
pub fn try_point_at_distance(
    origin: &impl LatLng,
    distance_km: f64,
    bearing: f64,
) -> HexCartoResult<GeoPoint> {
    let origin = GeoPoint::from_lat_lng(origin).checked()?;
    let distance_km = ensure_finite("distance", distance_km)?;
    let bearing = ensure_finite("bearing", bearing)?;

    Ok(point_at_distance(origin.lat, origin.lng, distance_km, bearing))
}

/// Great-circle (haversine) distance in kilometres on the same sphere.
pub fn distance_km(from: &impl LatLng, to: &impl LatLng) -> f64 {
    let lat1 = from.lat().to_radians();
    let lat2 = to.lat().to_radians();
    let d_lat = lat2 - lat1;
    let d_lng = (to.lng() - from.lng()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}
