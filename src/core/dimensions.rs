use crate::util::error::{HexCartoError, HexCartoResult};

/// Measures of a regular hexagon, all derived from the side length.
///
/// For a regular hexagon the circumradius equals the side, and the apothem
/// (center to edge midpoint) is `side * sin(60°)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexagonDims {
    pub side: f64,
    pub circumradius: f64,
    pub apothem: f64,
    pub across_corners: f64,
    pub across_flats: f64,
    pub perimeter: f64,
    pub area: f64,
}

impl HexagonDims {
    pub fn from_side(side: f64) -> HexCartoResult<Self> {
        let side = positive("Side length", side)?;
        let sqrt3 = 3.0_f64.sqrt();

        Ok(Self {
            side,
            circumradius: side,
            apothem: (sqrt3 / 2.0) * side,
            across_corners: 2.0 * side,
            across_flats: sqrt3 * side,
            perimeter: 6.0 * side,
            area: (3.0 * sqrt3 / 2.0) * side * side,
        })
    }

    pub fn from_circumradius(radius: f64) -> HexCartoResult<Self> {
        Self::from_side(positive("Circumradius", radius)?)
    }

    pub fn from_apothem(apothem: f64) -> HexCartoResult<Self> {
        let apothem = positive("Apothem", apothem)?;
        Self::from_side(2.0 * apothem / 3.0_f64.sqrt())
    }

    pub fn from_across_flats(across_flats: f64) -> HexCartoResult<Self> {
        let across_flats = positive("Across-flats", across_flats)?;
        Self::from_side(across_flats / 3.0_f64.sqrt())
    }

    pub fn from_area(area: f64) -> HexCartoResult<Self> {
        let area = positive("Area", area)?;
        Self::from_side(((2.0 * area) / (3.0 * 3.0_f64.sqrt())).sqrt())
    }

    /// Distance between the centers of two edge-adjacent hexagons.
    pub fn center_spacing(&self) -> f64 {
        2.0 * self.apothem
    }
}

fn positive(what: &str, value: f64) -> HexCartoResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(HexCartoError::InvalidDimension(format!(
            "{} must be a positive finite number, got {}",
            what, value
        )))
    }
}
