use std::path::PathBuf;

use anyhow::Result;
use thermal_legend::{args_parser, cli::CalibrationArgs, opt, with_calibration_args};

pub struct Args {
    pub calibration: CalibrationArgs,
    pub output: Option<PathBuf>,
    pub stats: bool,
}

impl Args {
    pub fn from_cmd_line() -> Result<Args> {
        let matches = with_calibration_args!(args_parser!("thermal-map")
            .about("Estimate per-pixel temperatures of a thermal image from its colour bar."))
        .arg(
            opt!("output")
                .short("o")
                .help("Write x,y,temp rows here (default: stdout)"),
        )
        .arg(
            opt!("stats")
                .short("s")
                .takes_value(false)
                .help("Print summary stats as json instead of per-pixel values"),
        )
        .get_matches();

        let calibration = CalibrationArgs::from_matches(&matches)?;
        let output = matches.value_of("output").map(PathBuf::from);
        let stats = matches.is_present("stats");

        Ok(Args {
            calibration,
            output,
            stats,
        })
    }
}
