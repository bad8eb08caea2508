mod args;

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Result};
use thermal_legend::{cli, grid::readout, TemperatureGrid};
use tracing::warn;

use args::Args;

/// Parse `x y` or `x,y` into a pointer position.
fn parse_position(line: &str) -> Result<(f64, f64)> {
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) => Ok((x.parse()?, y.parse()?)),
        _ => Err(anyhow!("expected `x y`, found `{}`", line)),
    }
}

fn respond<W: Write>(grid: &TemperatureGrid, line: &str, out: &mut W) -> Result<()> {
    match parse_position(line) {
        Ok((x, y)) => match grid.at_pointer(x, y) {
            Some(temp) => writeln!(out, "{}", readout(temp))?,
            None => warn!("no pixel under {}", line),
        },
        Err(e) => warn!("{:#}", e),
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    cli::init_logging();
    let args = Args::from_cmd_line()?;
    let (_, grid) = cli::compute_grid(&args.calibration)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.points.is_empty() {
        for point in &args.points {
            respond(&grid, point, &mut out)?;
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        respond(&grid, line.trim(), &mut out)?;
    }
    Ok(())
}
