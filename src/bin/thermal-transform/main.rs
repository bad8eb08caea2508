mod args;

use anyhow::{Context, Result};
use thermal_legend::{cli, export::ScaleTransform};
use tracing::info;

use args::Args;

fn main() -> Result<()> {
    cli::init_logging();
    let args = Args::from_cmd_line()?;

    let bounds = args.calibration.settings.bounds()?;
    let transform = ScaleTransform::new(
        args.min.unwrap_or(bounds.min),
        args.max.unwrap_or(bounds.max),
    )?;

    let (input, grid) = cli::compute_grid(&args.calibration)?;
    transform
        .write(&grid, &args.output)
        .with_context(|| format!("could not write {}", args.output.display()))?;
    info!("exported {} to {}", input.path.display(), args.output.display());

    let [offset, slope] = transform.inverse_coeffs();
    eprintln!(
        "Transform equation: V = {} + {} C",
        transform.coeffs[0], transform.coeffs[1]
    );
    eprintln!("Inverse equation: C = {} + {} V", offset, slope);
    Ok(())
}
