//! Scheme listing command.

use anyhow::Result;
use exo_eval::Scheme;

pub fn run(verbose: bool) -> Result<()> {
    println!("{:<6} {}", "ID", "Name");
    println!("{:-<60}", "");

    for scheme in Scheme::ALL {
        println!("{:<6} {}", scheme.id(), scheme.name());
        if verbose {
            println!("       {}", scheme.legend());
        }
    }

    Ok(())
}
