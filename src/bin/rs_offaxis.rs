//! Prints the camera parameters a renderer needs to show an off-axis
//! stereo image on each screen of a CAVE or powerwall.

// std
use std::path::PathBuf;
use std::str::FromStr;
// others
use anyhow::{bail, Context};
use clap::Parser;
use log::{info, warn};
use serde::Serialize;
use strum::IntoEnumIterator;
// offaxis
use rs_offaxis::cameras::stereo::Eye;
use rs_offaxis::cameras::strategy::{CameraSetup, Strategy};
use rs_offaxis::cameras::verify::round_trip_sweep;
use rs_offaxis::core::geometry::Point3f;
use rs_offaxis::core::offaxis::Float;
use rs_offaxis::core::setup::CaveSetup;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest deviation a round trip through the matrices may show.
const VERIFY_TOLERANCE: Float = 1e-6;

/// Derive off-axis cameras for every screen, eye and strategy.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON file describing screens, head and renderer
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// tracked head position, overrides the setup file
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    eye: Option<Point3f>,
    /// distance between the left and right eye (0 for mono)
    #[arg(long)]
    eye_separation: Option<Float>,
    /// strategies to run (default: all of them)
    #[arg(short, long, value_parser = parse_strategy)]
    strategy: Vec<Strategy>,
    /// the renderer accepts explicit projection and view matrices
    #[arg(long)]
    matrix_camera: bool,
    /// the renderer can not crop its perspective camera
    #[arg(long)]
    no_image_region: bool,
    /// print camera setups as JSON
    #[arg(long)]
    json: bool,
    /// run a round-trip sweep with this many random eyes per screen
    #[arg(long, value_name = "SAMPLES")]
    verify: Option<usize>,
    /// seed of the round-trip sweep
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// log derived frusta and reconstruction details
    #[arg(short, long)]
    verbose: bool,
}

fn parse_point(s: &str) -> Result<Point3f, String> {
    let coords: Vec<Float> = s
        .split(',')
        .map(|c| Float::from_str(c.trim()).map_err(|e| format!("{:?}: {}", c, e)))
        .collect::<Result<_, _>>()?;
    match coords[..] {
        [x, y, z] => Ok(Point3f::new(x, y, z)),
        _ => Err(format!("expected X,Y,Z but got {} value(s)", coords.len())),
    }
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    Strategy::from_str(s).map_err(|_| {
        let names: Vec<String> = Strategy::iter().map(|s| s.to_string()).collect();
        format!("unknown strategy {:?}, expected one of {}", s, names.join(", "))
    })
}

#[derive(Serialize)]
struct Record<'a> {
    screen: &'a str,
    eye: Eye,
    strategy: Strategy,
    setup: CameraSetup,
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use simplelog::LevelFilter::{Info, Off, Trace};
    simplelog::TermLogger::init(
        if verbose { Trace } else { Info },
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .set_time_level(Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // handle command line options
    let args = Cli::parse();
    init_logging(args.verbose)?;
    info!("rs_offaxis version {}", VERSION);
    let mut setup: CaveSetup = match &args.config {
        Some(path) => CaveSetup::load(path)
            .with_context(|| format!("could not load setup {}", path.display()))?,
        None => CaveSetup::default(),
    };
    if let Some(eye) = args.eye {
        setup.head = eye;
    }
    if let Some(separation) = args.eye_separation {
        setup.eye_separation = separation;
    }
    if args.matrix_camera {
        setup.renderer.matrix_camera = true;
    }
    if args.no_image_region {
        setup.renderer.image_region = false;
    }
    setup.validate().context("invalid setup")?;
    let strategies: Vec<Strategy> = if args.strategy.is_empty() {
        Strategy::iter().collect()
    } else {
        args.strategy.clone()
    };
    let rig = setup.stereo_rig();
    let mut records: Vec<Record> = Vec::new();
    for screen in &setup.screens {
        for &eye in rig.eyes() {
            let position = rig
                .eye_position(eye)
                .with_context(|| format!("no {} eye position", eye))?;
            for &strategy in &strategies {
                match strategy.camera_setup(
                    &setup.renderer,
                    &screen.quad,
                    &position,
                    &setup.clip_planes,
                ) {
                    Ok(camera) => records.push(Record {
                        screen: &screen.name,
                        eye,
                        strategy,
                        setup: camera,
                    }),
                    Err(e) => warn!(
                        "screen {:?}, {} eye: skipping {}: {}",
                        screen.name, eye, strategy, e
                    ),
                }
            }
        }
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for r in &records {
            print!("[{} / {} eye / {}] {}", r.screen, r.eye, r.strategy, r.setup);
        }
    }
    if let Some(samples) = args.verify {
        let mut failed: Vec<&str> = Vec::new();
        for screen in &setup.screens {
            let report = round_trip_sweep(&screen.quad, samples, args.seed, &setup.clip_planes);
            info!(
                "screen {:?}: {} round trips, {} failed, max errors eye {:e} fovy {:e} aspect {:e} region {:e}",
                screen.name,
                report.samples,
                report.failures,
                report.max_eye_error,
                report.max_fovy_error,
                report.max_aspect_error,
                report.max_region_error
            );
            if !report.passes(VERIFY_TOLERANCE) {
                failed.push(&screen.name);
            }
        }
        if !failed.is_empty() {
            bail!("round-trip verification failed for screen(s) {}", failed.join(", "));
        }
    }
    Ok(())
}
