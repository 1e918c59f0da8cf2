pub mod constants;
pub mod dimensions;
pub mod geodesic;
pub mod geometry;
pub mod grid;
pub mod winding;

pub use constants::{
    DEFAULT_HEXAGON_RADIUS, EARTH_RADIUS_KM, FIRST_VERTEX_ANGLE, HEXAGON_SIDES, RING_LENGTH,
    VERTEX_ANGLE_STEP,
};
pub use dimensions::HexagonDims;
pub use geodesic::{distance_km, point_at_distance, try_point_at_distance};
pub use geometry::{
    HexagonVertices, checked_hexagon, hexagon_coordinates, hexagon_coordinates_with_radius,
    hexagon_polygon, hexagon_ring,
};
pub use grid::neighbor_centers;
pub use winding::{Orientation, WindingCorrection, orient, rewind, ring_orientation};
