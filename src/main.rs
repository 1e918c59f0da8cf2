use clap::{Parser, ValueEnum};
use hexcarto::{
    DEFAULT_PROPERTY_KEY, GeometryFormat, HexCartoError, HexMapConfig, Region, RegionCsvConfig,
    WindingCorrection, build_hex_map, hexagonize_regions, read_regions_csv_path,
    read_regions_json, regions_to_wkt, write_feature_collection,
};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// Turn named region centers into a hexagon map.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Regions file: `.csv`, or a JSON array of `{name, center, ...}` records
    input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Format::Geojson)]
    format: Format,

    /// Hexagon circumradius, in degrees
    #[arg(short, long, conflicts_with = "apothem")]
    radius: Option<f64>,

    /// Hexagon center-to-edge distance, in degrees
    #[arg(long)]
    apothem: Option<f64>,

    #[arg(short, long, value_enum, default_value_t = Winding::None)]
    winding: Winding,

    /// Properties key holding each region record
    #[arg(long, default_value = DEFAULT_PROPERTY_KEY)]
    property_key: String,

    #[arg(long, default_value = "name")]
    name_column: String,

    #[arg(long, default_value = "lat")]
    lat_column: String,

    #[arg(long, default_value = "lng")]
    lng_column: String,

    /// Pretty-print GeoJSON output
    #[arg(long)]
    pretty: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Geojson,
    Wkt,
}

impl From<Format> for GeometryFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Geojson => GeometryFormat::GeoJson,
            Format::Wkt => GeometryFormat::Wkt,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Winding {
    None,
    Heuristic,
    Clockwise,
    CounterClockwise,
}

impl From<Winding> for WindingCorrection {
    fn from(winding: Winding) -> Self {
        match winding {
            Winding::None => WindingCorrection::None,
            Winding::Heuristic => WindingCorrection::Heuristic,
            Winding::Clockwise => WindingCorrection::Clockwise,
            Winding::CounterClockwise => WindingCorrection::CounterClockwise,
        }
    }
}

fn read_regions(args: &Args) -> Result<Vec<Region>, HexCartoError> {
    let is_csv = args
        .input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        let config = RegionCsvConfig::new(&args.name_column, &args.lat_column, &args.lng_column);
        read_regions_csv_path(&args.input, &config)
    } else {
        let file = File::open(&args.input)?;
        read_regions_json(BufReader::new(file))
    }
}

fn main() -> Result<(), HexCartoError> {
    let args = Args::parse();
    if !hexcarto::telemetry::init_default_tracing(&args.log_level) {
        warn!(
            log_level = %args.log_level,
            "tracing subscriber already installed, --log-level ignored"
        );
    }

    let regions = read_regions(&args)?;

    let mut config = HexMapConfig::new()
        .property_key(args.property_key.as_str())
        .winding(args.winding.into());
    if let Some(radius) = args.radius {
        config = config.radius(radius);
    }
    if let Some(apothem) = args.apothem {
        config = config.apothem(apothem)?;
    }

    info!(
        input = %args.input.display(),
        regions = regions.len(),
        radius = config.radius,
        "building hex map"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match GeometryFormat::from(args.format) {
        GeometryFormat::GeoJson => {
            let collection = build_hex_map(&regions, &config)?;
            write_feature_collection(&mut out, &collection, args.pretty)?;
        }
        GeometryFormat::Wkt => {
            let regions = hexagonize_regions(&regions, config.radius)?;
            for line in regions_to_wkt(&regions)? {
                writeln!(out, "{}", line)?;
            }
        }
    }

    Ok(())
}
