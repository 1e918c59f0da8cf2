use crate::api::region::Region;
use crate::util::error::HexCartoResult;
use geojson::FeatureCollection;
use std::io::{Read, Write};
use tracing::debug;
use wkt::ToWkt;

/// Output format for hexagon geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeometryFormat {
    /// A GeoJSON FeatureCollection
    #[default]
    GeoJson,
    /// Well-Known Text, one `name<TAB>POLYGON((...))` line per region
    Wkt,
}

/// Reads a JSON array of region records.
///
/// ```
/// use hexcarto::read_regions_json;
///
/// # fn main() -> Result<(), hexcarto::HexCartoError> {
/// let json = r#"[{"name": "Corse", "center": [42.1497222222, 9.1052777778], "surface": 8680}]"#;
/// let regions = read_regions_json(json.as_bytes())?;
/// assert_eq!(regions[0].name, "Corse");
/// # Ok(())
/// # }
/// ```
pub fn read_regions_json(reader: impl Read) -> HexCartoResult<Vec<Region>> {
    let regions: Vec<Region> = serde_json::from_reader(reader)?;
    debug!(regions = regions.len(), "read regions from JSON");
    Ok(regions)
}

/// Serializes a feature collection, followed by a newline.
pub fn write_feature_collection(
    mut writer: impl Write,
    collection: &FeatureCollection,
    pretty: bool,
) -> HexCartoResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, collection)?;
    } else {
        serde_json::to_writer(&mut writer, collection)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Renders each region's hexagon as a WKT line prefixed by the region name.
pub fn regions_to_wkt(regions: &[Region]) -> HexCartoResult<Vec<String>> {
    regions
        .iter()
        .map(|region| -> HexCartoResult<String> {
            let polygon = region.to_polygon()?;
            Ok(format!("{}\t{}", region.name, polygon.wkt_string()))
        })
        .collect()
}
