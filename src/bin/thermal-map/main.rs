mod args;

use std::{
    fs::File,
    io::{self, BufWriter},
};

use anyhow::{Context, Result};
use serde_derive::*;
use thermal_legend::{cli, stats::Summary};
use tracing::info;

use args::Args;

fn main() -> Result<()> {
    cli::init_logging();
    let args = Args::from_cmd_line()?;

    let (input, grid) = cli::compute_grid(&args.calibration)?;

    if args.stats {
        #[derive(Debug, Serialize)]
        struct OutputJson {
            path: String,
            width: usize,
            height: usize,
            stats: Summary,
        }

        serde_json::to_writer(
            io::stdout().lock(),
            &OutputJson {
                path: format!("{}", input.path.display()),
                width: grid.width(),
                height: grid.height(),
                stats: grid.stats().summary(),
            },
        )?;
        println!();
        return Ok(());
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create {}", path.display()))?;
            grid.write_csv(BufWriter::new(file))?;
            info!(values = grid.values().len(), "wrote {}", path.display());
        }
        None => grid.write_csv(BufWriter::new(io::stdout().lock()))?,
    }

    Ok(())
}
