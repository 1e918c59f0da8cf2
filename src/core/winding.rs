use geo::Area;
use geo_types::{LineString, Polygon};
use geojson::{Feature, Value};
use std::cmp::Ordering;
use tracing::trace;

/// Direction in which a ring's vertices are listed, in `(x, y)` = `(lng, lat)` space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    pub fn opposite(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

/// Ring direction correction applied to a finished feature collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindingCorrection {
    /// Keep rings as built (RFC 7946: counterclockwise exterior rings).
    #[default]
    None,
    /// Two-point [`rewind`] heuristic. Not idempotent.
    Heuristic,
    /// Clockwise exterior rings, as expected by spherical d3-style renderers.
    Clockwise,
    /// Counterclockwise exterior rings.
    CounterClockwise,
}

impl WindingCorrection {
    /// Applies the correction, returning how many rings were reversed.
    pub fn apply(self, features: &mut [Feature]) -> usize {
        match self {
            WindingCorrection::None => 0,
            WindingCorrection::Heuristic => rewind(features),
            WindingCorrection::Clockwise => orient(features, Orientation::Clockwise),
            WindingCorrection::CounterClockwise => orient(features, Orientation::CounterClockwise),
        }
    }
}

/// Reverses the exterior ring of each Polygon feature unless its first
/// position has a smaller x than its second.
///
/// Only sound for the hexagon rings this crate builds. Applying it twice can
/// flip a ring back, so run it exactly once on fresh geometry. Returns the
/// number of rings reversed.
pub fn rewind(features: &mut [Feature]) -> usize {
    let mut reversed = 0;
    for feature in features.iter_mut() {
        let Some(geometry) = feature.geometry.as_mut() else {
            continue;
        };
        if let Value::Polygon(rings) = &mut geometry.value {
            if let Some(exterior) = rings.first_mut() {
                if needs_heuristic_reversal(exterior) {
                    exterior.reverse();
                    reversed += 1;
                }
            }
        }
    }
    trace!(features = features.len(), reversed, "rewind heuristic");
    reversed
}

fn needs_heuristic_reversal(ring: &[Vec<f64>]) -> bool {
    match (
        ring.first().and_then(|p| p.first()),
        ring.get(1).and_then(|p| p.first()),
    ) {
        (Some(x0), Some(x1)) => x0.partial_cmp(x1) != Some(Ordering::Less),
        _ => false,
    }
}

/// Orients every Polygon and MultiPolygon ring by signed area: exterior rings
/// to `exterior`, holes to the opposite direction. Degenerate rings are left
/// alone. Idempotent. Returns the number of rings reversed.
pub fn orient(features: &mut [Feature], exterior: Orientation) -> usize {
    let mut reversed = 0;
    for feature in features.iter_mut() {
        let Some(geometry) = feature.geometry.as_mut() else {
            continue;
        };
        match &mut geometry.value {
            Value::Polygon(rings) => reversed += orient_rings(rings, exterior),
            Value::MultiPolygon(polygons) => {
                for rings in polygons.iter_mut() {
                    reversed += orient_rings(rings, exterior);
                }
            }
            _ => {}
        }
    }
    trace!(features = features.len(), reversed, ?exterior, "orient by signed area");
    reversed
}

fn orient_rings(rings: &mut [Vec<Vec<f64>>], exterior: Orientation) -> usize {
    let mut reversed = 0;
    for (i, ring) in rings.iter_mut().enumerate() {
        let wanted = if i == 0 { exterior } else { exterior.opposite() };
        if ring_orientation(ring) == Some(wanted.opposite()) {
            ring.reverse();
            reversed += 1;
        }
    }
    reversed
}

/// Orientation of a ring of GeoJSON positions from the sign of its shoelace
/// area. `None` when the area is zero or not finite.
pub fn ring_orientation(ring: &[Vec<f64>]) -> Option<Orientation> {
    let coords: Vec<(f64, f64)> = ring
        .iter()
        .filter_map(|p| match p.as_slice() {
            [x, y, ..] => Some((*x, *y)),
            _ => None,
        })
        .collect();

    let area = Polygon::new(LineString::from(coords), vec![]).signed_area();
    if !area.is_finite() || area == 0.0 {
        None
    } else if area > 0.0 {
        Some(Orientation::CounterClockwise)
    } else {
        Some(Orientation::Clockwise)
    }
}
