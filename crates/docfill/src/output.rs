use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

/// Machine-readable payload for --json modes
pub fn print_json(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// One plain result line: a token, a template path
pub fn print_text(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// Success line pointing at a generated document
pub fn print_generated(path: &Path) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{} {}", "✓".green().bold(), path.display())
}
