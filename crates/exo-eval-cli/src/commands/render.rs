//! Chart rendering command.

use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use exo_eval::{RenderConfig, RenderSession, Scheme, Theme};

pub fn run(
    out_dir: PathBuf,
    schemes: Vec<String>,
    theme: &str,
    with_report: bool,
    verbose: bool,
) -> Result<()> {
    let Some(theme) = Theme::from_name(theme) else {
        bail!("Unknown theme '{}', expected 'dss' or 'igf'", theme);
    };

    let selected = resolve_schemes(&schemes)?;

    let config = RenderConfig::builder()
        .out_dir(&out_dir)
        .theme(theme)
        .build();
    let session = RenderSession::new(config);

    for scheme in &selected {
        if verbose {
            eprintln!("Rendering {} ({})", scheme.id(), scheme.name());
        }
        session.render_scheme(*scheme)?;
    }

    if with_report {
        let report = session.gap_report();
        session.write_gap_report(&report)?;
        if verbose {
            eprintln!("Wrote gaps.json and gaps.csv");
        }
    }

    println!("Wrote {} chart(s) to {}", selected.len(), out_dir.display());
    Ok(())
}

fn resolve_schemes(ids: &[String]) -> Result<Vec<Scheme>> {
    if ids.is_empty() {
        return Ok(Scheme::ALL.to_vec());
    }
    ids.iter()
        .map(|id| {
            Scheme::from_id(id).ok_or_else(|| {
                anyhow!(
                    "Unknown scheme '{}', expected one of ZRR, DFPE, ZRD, ZFU, BER",
                    id
                )
            })
        })
        .collect()
}
