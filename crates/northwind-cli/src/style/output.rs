//! Styled messages outside routine output.

use super::colors::SemanticStyle;

/// Prints an error and each of its causes on its own line.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "✗".error(), err);
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "caused by:".muted(), cause);
    }
}

/// Points at the command that runs a listed routine.
pub fn print_run_hint() {
    println!(
        "{} {} {}",
        "→".muted(),
        "Run one with".muted(),
        "northwind run <name> [value]".code()
    );
}
