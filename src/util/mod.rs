pub mod coord;
pub mod error;

pub use coord::{GeoPoint, LatLng};
pub use error::{HexCartoError, HexCartoResult};
