//! Write a `bins.csv` for a pulse counter: the rate of the measured pulse
//! intervals followed by the equal-probability bin edges of the matching
//! exponential distribution.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use statrs::distribution::{ContinuousCDF, Exp};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate exponential quantile bins for expo-bins")]
struct Args {
    /// Mean interval between pulses, in seconds.
    #[arg(long)]
    mean_interval: f64,

    /// Time resolution of the instrument, in seconds.
    #[arg(long)]
    delta_t: f64,

    /// Fraction of the theoretical bin count to use, in (0, 1].
    #[arg(long, default_value_t = 0.7)]
    safety_factor: f64,

    /// Use this many bins instead of the computed safe count.
    #[arg(long)]
    bins: Option<u64>,

    /// Destination file.
    #[arg(short, long, default_value = "bins.csv")]
    output: PathBuf,
}

/// Largest number of equal-probability bins the instrument can still tell
/// apart: `e * mean_interval / delta_t`, scaled by the safety factor.
fn max_safe_bins(mean_interval: f64, delta_t: f64, safety_factor: f64) -> Result<u64> {
    if !(mean_interval.is_finite() && mean_interval > 0.0) {
        bail!("mean interval must be positive, got {mean_interval}");
    }
    if !(delta_t.is_finite() && delta_t > 0.0) {
        bail!("time resolution must be positive, got {delta_t}");
    }
    if !(safety_factor > 0.0 && safety_factor <= 1.0) {
        bail!("safety factor must be in (0, 1], got {safety_factor}");
    }
    let m_max = std::f64::consts::E * mean_interval / delta_t;
    Ok((m_max * safety_factor).round() as u64)
}

/// Inner edges of `bins` equal-probability bins; the last bin is unbounded
/// so its edge is left out.
fn bin_edges(rate: f64, bins: u64) -> Result<Vec<f64>> {
    if bins < 2 {
        bail!("need at least 2 bins, got {bins}");
    }
    let dist = Exp::new(rate).map_err(|e| anyhow!("invalid rate {rate}: {e}"))?;
    Ok((1..bins)
        .map(|k| dist.inverse_cdf(k as f64 / bins as f64))
        .collect())
}

fn write_bins(path: &Path, rate: f64, edges: &[f64]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for value in std::iter::once(&rate).chain(edges) {
        writer.write_record([value.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let safe = max_safe_bins(args.mean_interval, args.delta_t, args.safety_factor)?;
    let bins = args.bins.unwrap_or(safe);
    if bins > safe {
        log::warn!("{bins} bins requested, but only {safe} are safe at this resolution");
    }

    let rate = 1.0 / args.mean_interval;
    let edges = bin_edges(rate, bins)?;
    write_bins(&args.output, rate, &edges)?;

    log::info!(
        "Wrote rate {rate} and {} edges ({bins} bins) to {}",
        edges.len(),
        args.output.display()
    );
    Ok(())
}
