use anyhow::Result;
use thermal_legend::{args_parser, cli::CalibrationArgs, opt, with_calibration_args};

pub struct Args {
    pub calibration: CalibrationArgs,
    pub points: Vec<String>,
}

impl Args {
    pub fn from_cmd_line() -> Result<Args> {
        let matches = with_calibration_args!(args_parser!("thermal-probe").about(
            "Read temperatures under pointer positions.  Positions are `x y` pairs (image \
             pixels), given with --at or one per line on stdin."
        ))
        .arg(
            opt!("at")
                .short("a")
                .multiple(true)
                .number_of_values(1)
                .help("Position to read, as x,y"),
        )
        .get_matches();

        let calibration = CalibrationArgs::from_matches(&matches)?;
        let points = matches
            .values_of("at")
            .map(|v| v.map(String::from).collect())
            .unwrap_or_default();

        Ok(Args {
            calibration,
            points,
        })
    }
}
