//! Output formatting helpers for the CLI.

use dnasim_core::storage::Preset;
use dnasim_core::Encoding;

/// Print an encoding in human-readable form.
pub fn print_encoding(encoding: &Encoding, quiet: bool) {
    if quiet {
        println!("{}", encoding.bases);
        return;
    }

    println!("Binary:   {}", encoding.binary);
    println!("Sequence: {}", encoding.bases);
    println!(
        "Length:   {} bp ({} chars, {} bits)",
        encoding.summary.base_pairs, encoding.summary.characters, encoding.summary.bits
    );
    println!(
        "Status:   {}",
        if encoding.valid { "ACTIVE" } else { "ERROR" }
    );
}

/// Print per-base mapping problems to stderr.
pub fn print_mapping_errors(encoding: &Encoding) {
    for (base, message) in &encoding.errors {
        eprintln!("{}: {}", base, message);
    }
}

/// One-line summary of a preset, used by `presets list`.
pub fn preset_line(preset: &Preset) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        preset.id,
        preset.name,
        preset.mapping(),
        truncate(&preset.text_input, 40)
    )
}

/// Print a single preset with its encoding.
pub fn print_preset(preset: &Preset, quiet: bool) {
    let encoding = Encoding::compute(&preset.text_input, &preset.mapping());

    if !quiet {
        println!("ID: {}", preset.id);
        println!("Name: {}", preset.name);
        println!("Created: {}", preset.created_at.to_rfc3339());
        println!("Mapping: {}", preset.mapping());
        println!("Text: {}", preset.text_input);
        println!();
    }
    print_encoding(&encoding, quiet);
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    short.push_str("...");
    short
}
