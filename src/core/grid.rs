use crate::core::constants::{HEXAGON_SIDES, VERTEX_ANGLE_STEP};
use crate::core::dimensions::HexagonDims;
use crate::util::coord::{GeoPoint, LatLng};
use crate::util::error::HexCartoResult;

/// Centers of the six hexagons sharing an edge with the hexagon of the given
/// circumradius at `center`.
///
/// Neighbours sit at twice the apothem, at `0° + 60°·k`, in the same planar
/// `(lat, lng)` space as [`hexagon_coordinates`](crate::hexagon_coordinates).
pub fn neighbor_centers(
    center: &impl LatLng,
    radius: f64,
) -> HexCartoResult<[GeoPoint; HEXAGON_SIDES]> {
    let center = GeoPoint::from_lat_lng(center).checked()?;
    let spacing = HexagonDims::from_circumradius(radius)?.center_spacing();

    Ok(std::array::from_fn(|k| {
        let angle = (k as f64 * VERTEX_ANGLE_STEP).to_radians();
        GeoPoint::new(
            center.lat + spacing * angle.cos(),
            center.lng + spacing * angle.sin(),
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::DEFAULT_HEXAGON_RADIUS;
    use crate::core::geometry::hexagon_coordinates_with_radius;

    fn close(a: &GeoPoint, b: &GeoPoint) -> bool {
        (a.lat - b.lat).abs() < 1e-9 && (a.lng - b.lng).abs() < 1e-9
    }

    #[test]
    fn test_neighbors_share_an_edge() -> HexCartoResult<()> {
        let radius = 0.8;
        let hex = hexagon_coordinates_with_radius(46.0, 2.0, radius);

        for neighbor in neighbor_centers(&(46.0, 2.0), radius)? {
            let other = hexagon_coordinates_with_radius(neighbor.lat, neighbor.lng, radius);
            let shared = hex
                .iter()
                .filter(|v| other.iter().any(|w| close(v, w)))
                .count();
            assert_eq!(shared, 2);
        }
        Ok(())
    }

    #[test]
    fn test_default_radius_neighbors_on_unit_spacing() -> HexCartoResult<()> {
        let neighbors = neighbor_centers(&(0.0, 0.0), DEFAULT_HEXAGON_RADIUS)?;
        assert!(close(&neighbors[0], &GeoPoint::new(2.0, 0.0)));
        assert!(close(&neighbors[3], &GeoPoint::new(-2.0, 0.0)));
        Ok(())
    }

    #[test]
    fn test_invalid_radius() {
        assert!(neighbor_centers(&(0.0, 0.0), 0.0).is_err());
    }
}
