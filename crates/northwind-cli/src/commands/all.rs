//! All command implementation.

use std::io::{self, Write};

use anyhow::{Context, Result};
use northwind_query::{QueryContext, registry};

use crate::style::colors::SemanticStyle;

/// Runs every routine with its default parameter, each under a heading.
pub fn run(ctx: &QueryContext<'_>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (i, routine) in registry::routines().iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", format!("== {} ==", routine.name).header())?;
        writeln!(out, "{}", routine.description.muted())?;

        routine
            .run(ctx, None, &mut out)
            .with_context(|| format!("Failed to run routine '{}'", routine.name))?;
    }
    out.flush()?;

    Ok(())
}
