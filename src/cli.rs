//! Shared CLI output helpers for the orfscan binary.

use std::time::Instant;

use colored::{ColoredString, Colorize};

use crate::codon::{START, STOP};

pub fn banner(subtitle: &str) {
    eprintln!();
    eprintln!("{} {}", "orfscan".bold().cyan(), subtitle.dimmed());
    eprintln!();
}

pub fn section(title: &str) {
    let bar = "─".repeat(50);
    eprintln!("{} {}", title.bold().blue(), bar.dimmed());
}

pub fn kv(key: &str, value: &str) {
    eprintln!("  {:<20} {}", key.dimmed(), value);
}

pub fn success(msg: &str) {
    eprintln!("  {} {}", "✓".green().bold(), msg);
}

pub fn warning(msg: &str) {
    eprintln!("  {} {}", "⚠".yellow(), msg.yellow());
}

/// Colour a protein string: start residues green, stop markers red.
#[must_use]
pub fn protein(protein: &str) -> String {
    protein
        .bytes()
        .map(|aa| {
            let s: ColoredString = match aa {
                START => "M".green().bold(),
                STOP => "*".red().bold(),
                _ => char::from(aa).to_string().normal(),
            };
            s.to_string()
        })
        .collect()
}

pub fn print_elapsed(start: Instant) {
    let elapsed = start.elapsed();
    eprintln!();
    eprintln!("{}  {}", "Time".dimmed(), format!("{elapsed:.1?}").bold());
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protein_keeps_residues_in_order() {
        colored::control::set_override(false);
        assert_eq!(protein("MKL*"), "MKL*");
        assert_eq!(protein(""), "");
    }
}
