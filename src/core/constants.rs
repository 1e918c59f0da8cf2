/// Number of vertices (and sides) of a hexagon
pub const HEXAGON_SIDES: usize = 6;

/// Length of a closed GeoJSON hexagon ring (6 vertices + closing vertex)
pub const RING_LENGTH: usize = HEXAGON_SIDES + 1;

/// Angle of the first vertex, in degrees. Puts a flat edge on the reference axis.
pub const FIRST_VERTEX_ANGLE: f64 = 30.0;

/// Angle between consecutive vertices, in degrees
pub const VERTEX_ANGLE_STEP: f64 = 60.0;

/// Default circumradius, `1 / sin(60°)`, giving a hexagon with an apothem of 1
pub const DEFAULT_HEXAGON_RADIUS: f64 = 1.154_700_538_379_251_5;

/// Mean Earth radius in kilometres used for spherical distance math
pub const EARTH_RADIUS_KM: f64 = 6371.0;
