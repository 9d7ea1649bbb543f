//! Run command implementation.

use std::io::{self, Write};

use anyhow::{Context, Result};
use northwind_query::{QueryContext, registry};

/// Runs one routine, writing its output to stdout.
pub fn run(ctx: &QueryContext<'_>, name: &str, value: Option<&str>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    registry::run(name, ctx, value, &mut out)
        .with_context(|| format!("Failed to run routine '{name}'"))?;
    out.flush()?;

    Ok(())
}
