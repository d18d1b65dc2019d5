//! Threshold gap table command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use exo_eval::compare::DEFAULT_THRESHOLDS;
use exo_eval::{GapReport, SmicBasis};

pub fn run(json: Option<PathBuf>, csv: Option<PathBuf>, verbose: bool) -> Result<()> {
    let basis = SmicBasis::default();
    if verbose {
        eprintln!(
            "SMIC basis: {:.2} EUR/h, annual base {:.2} EUR",
            basis.hourly_gross,
            basis.annual_base()
        );
    }

    let report = GapReport::new(&basis, &DEFAULT_THRESHOLDS);

    print_table(&report);

    if let Some(path) = json {
        let content = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!();
        println!("Saved to: {}", path.display());
    }

    if let Some(path) = csv {
        write_csv(&report, &path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!();
        println!("Saved to: {}", path.display());
    }

    Ok(())
}

fn print_table(report: &GapReport) {
    println!(
        "Annual relief at reference wage levels (EUR, SMIC {:.2}/h):",
        report.smic_hourly_gross
    );
    println!();
    println!(
        "{:<8} {:>6} {:>12} {:>12} {:>12}",
        "Scheme", "Wage", "Baseline", "Target", "Delta"
    );
    println!("{:-<60}", "");

    for comparison in &report.schemes {
        for gap in &comparison.gaps {
            println!(
                "{:<8} {:>6} {:>12.2} {:>12.2} {:>+12.2}",
                comparison.scheme.id(),
                gap.wage_level,
                gap.baseline,
                gap.target,
                gap.delta
            );
        }
    }
}

fn write_csv(report: &GapReport, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["scheme", "wage_level", "baseline", "target", "delta"])?;

    for comparison in &report.schemes {
        for gap in &comparison.gaps {
            wtr.write_record([
                &comparison.scheme.id().to_string(),
                &gap.wage_level.to_string(),
                &format!("{:.2}", gap.baseline),
                &format!("{:.2}", gap.target),
                &format!("{:.2}", gap.delta),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
