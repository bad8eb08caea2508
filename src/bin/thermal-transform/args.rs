use std::path::PathBuf;

use anyhow::Result;
use clap::value_t_or_exit;
use thermal_legend::{args_parser, cli::CalibrationArgs, opt, with_calibration_args};

pub struct Args {
    pub calibration: CalibrationArgs,
    pub output: PathBuf,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Args {
    pub fn from_cmd_line() -> Result<Args> {
        let matches = with_calibration_args!(args_parser!("thermal-transform")
            .setting(clap::AppSettings::AllowLeadingHyphen)
            .about("Export estimated temperatures as a 16-bit grayscale image."))
        .arg(
            opt!("output")
                .short("o")
                .required(true)
                .help("Output image path (.tif or .png)"),
        )
        .arg(opt!("min").help("Temperature stored as 0 (default: min temp)"))
        .arg(opt!("max").help("Temperature stored as 65535 (default: max temp)"))
        .get_matches();

        let calibration = CalibrationArgs::from_matches(&matches)?;
        let output = value_t_or_exit!(matches, "output", PathBuf);
        let min = matches
            .is_present("min")
            .then(|| value_t_or_exit!(matches.value_of("min"), f64));
        let max = matches
            .is_present("max")
            .then(|| value_t_or_exit!(matches.value_of("max"), f64));

        Ok(Args {
            calibration,
            output,
            min,
            max,
        })
    }
}
