use crate::core::constants::{
    DEFAULT_HEXAGON_RADIUS, FIRST_VERTEX_ANGLE, HEXAGON_SIDES, RING_LENGTH, VERTEX_ANGLE_STEP,
};
use crate::core::dimensions::HexagonDims;
use crate::util::coord::{GeoPoint, LatLng};
use crate::util::error::HexCartoResult;
use geo_types::{Coord, LineString, Polygon};

/// The six vertices of a hexagon in `(latitude, longitude)` order.
pub type HexagonVertices = [GeoPoint; HEXAGON_SIDES];

/// Hexagon around a point using [`DEFAULT_HEXAGON_RADIUS`].
pub fn hexagon_coordinates(latitude: f64, longitude: f64) -> HexagonVertices {
    hexagon_coordinates_with_radius(latitude, longitude, DEFAULT_HEXAGON_RADIUS)
}

/// Hexagon around a point with the given circumradius, in degrees.
///
/// Vertices sit at `30° + 60°·k`, latitude taken as the first axis, so the
/// sequence runs counterclockwise in `(lat, lng)` space. Degrees are treated
/// as planar units; this is only meaningful for small regions.
pub fn hexagon_coordinates_with_radius(
    latitude: f64,
    longitude: f64,
    radius: f64,
) -> HexagonVertices {
    std::array::from_fn(|k| {
        let angle = (FIRST_VERTEX_ANGLE + k as f64 * VERTEX_ANGLE_STEP).to_radians();
        GeoPoint::new(
            latitude + radius * angle.cos(),
            longitude + radius * angle.sin(),
        )
    })
}

/// Like [`hexagon_coordinates_with_radius`] but rejects non-finite centers
/// and radii that are not strictly positive.
pub fn checked_hexagon(center: &impl LatLng, radius: f64) -> HexCartoResult<HexagonVertices> {
    let center = GeoPoint::from_lat_lng(center).checked()?;
    let radius = HexagonDims::from_circumradius(radius)?.circumradius;
    Ok(hexagon_coordinates_with_radius(
        center.lat, center.lng, radius,
    ))
}

/// Builds the closed GeoJSON ring for a hexagon.
///
/// Each vertex is flipped to `(lng, lat)`, the vertex order is reversed and
/// the first vertex is repeated at the end. The result is a counterclockwise
/// ring in `(lng, lat)` space.
pub fn hexagon_ring(vertices: &HexagonVertices) -> LineString<f64> {
    let mut coords: Vec<Coord<f64>> = Vec::with_capacity(RING_LENGTH);
    coords.extend(vertices.iter().rev().map(GeoPoint::to_lng_lat));
    coords.push(coords[0]);

    LineString::from(coords)
}

pub fn hexagon_polygon(vertices: &HexagonVertices) -> Polygon<f64> {
    Polygon::new(hexagon_ring(vertices), vec![])
}
