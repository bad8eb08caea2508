//! Helpers shared by the accompanying binaries: argument
//! parsing, logging setup and the load-calibrate-map
//! pipeline.
//!
//! APIs here shouldn't be considered stable / used as a
//! library.

use std::path::PathBuf;

use anyhow::{Context, Result};
pub use clap::{App, Arg, ArgMatches};
use indicatif::{ProgressBar, ProgressStyle};
pub use inflector::Inflector;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{
    calibration::LookupTable,
    grid::TemperatureGrid,
    input::ImageInput,
    mapper::TemperatureMapper,
    settings::{LegendRegion, Settings},
};

#[macro_export]
macro_rules! args_parser {
    ($name:expr) => {{
        $crate::cli::App::new($name)
            .version(clap::crate_version!())
            .author(clap::crate_authors!())
    }};
}

#[macro_export]
macro_rules! arg {
    ($name:expr) => {{
        use $crate::cli::Inflector;
        $crate::cli::Arg::with_name($name).value_name(&$name.to_screaming_snake_case())
    }};
}

#[macro_export]
macro_rules! opt {
    ($name:expr) => {{
        use $crate::cli::Inflector;
        $crate::cli::Arg::with_name($name)
            .long(&$name.to_kebab_case())
            .value_name(&$name.to_screaming_snake_case())
    }};
}

/// Add the arguments read by [`CalibrationArgs`] to an
/// `App`.
#[macro_export]
macro_rules! with_calibration_args {
    ($app:expr) => {{
        $app.arg(
            $crate::opt!("legend")
                .short("l")
                .help("Image of the colour bar (default: the target image itself)"),
        )
        .arg(
            $crate::opt!("legend region")
                .short("r")
                .help("Region of the legend image holding the colour bar, as x,y,width,height"),
        )
        .arg(
            $crate::opt!("min temp")
                .allow_hyphen_values(true)
                .help("Temperature at the top of the colour bar.  Default is 20"),
        )
        .arg(
            $crate::opt!("max temp")
                .allow_hyphen_values(true)
                .help("Temperature at the bottom of the colour bar.  Default is 100"),
        )
        .arg(
            $crate::opt!("config")
                .short("c")
                .help("JSON settings file (command line values take precedence)"),
        )
        .arg(
            $crate::arg!("target")
                .required(true)
                .help("Thermal image to map"),
        )
    }};
}

/// Inputs and settings common to all binaries.
#[derive(Debug)]
pub struct CalibrationArgs {
    pub target: PathBuf,
    pub legend: Option<PathBuf>,
    pub settings: Settings,
}

impl CalibrationArgs {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let target = matches
            .value_of("target")
            .context("missing target image")?
            .into();
        let legend = matches.value_of("legend").map(PathBuf::from);

        let cmd_line = Settings {
            min_temp: matches
                .is_present("min temp")
                .then(|| clap::value_t_or_exit!(matches.value_of("min temp"), f64)),
            max_temp: matches
                .is_present("max temp")
                .then(|| clap::value_t_or_exit!(matches.value_of("max temp"), f64)),
            legend_region: matches
                .is_present("legend region")
                .then(|| clap::value_t_or_exit!(matches.value_of("legend region"), LegendRegion)),
        };
        let settings = match matches.value_of("config") {
            Some(path) => Settings::from_json_path(path.as_ref())?.merge(cmd_line),
            None => cmd_line,
        };

        Ok(CalibrationArgs {
            target,
            legend,
            settings,
        })
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

pub fn progress_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {wide_bar:cyan/blue} {pos:>7}/{len:7}"),
    );
    bar
}

/// Load both images, build the lookup table and map the
/// target. Both images are decoded before any work is done.
pub fn compute_grid(args: &CalibrationArgs) -> Result<(ImageInput, TemperatureGrid)> {
    let target = ImageInput::load(&args.target)?;
    let legend = args.legend.as_ref().map(ImageInput::load).transpose()?;

    let legend_image = match &legend {
        Some(legend) => &legend.image,
        None => {
            if args.settings.legend_region.is_none() {
                warn!("no legend image or region: sampling the colour bar from the whole target");
            }
            &target.image
        }
    };

    let bounds = args.settings.bounds()?;
    let table = LookupTable::from_legend(legend_image, args.settings.legend_region, bounds)
        .context("could not extract colour bar")?;
    info!(
        entries = table.len(),
        min = bounds.min,
        max = bounds.max,
        "built lookup table"
    );

    let mapper = TemperatureMapper::new(&target.image, &table)
        .with_context(|| format!("could not map {}", target.path.display()))?;
    let (ht, wid) = mapper.dim();
    let bar = progress_bar(ht as u64);
    let grid = mapper.map_par_with(|_| bar.inc(1));
    bar.finish_and_clear();
    info!(width = wid, height = ht, "mapped {}", target.path.display());

    Ok((target, grid))
}
