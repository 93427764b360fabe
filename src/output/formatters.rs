//! Formatting utilities for terminal output

use crate::core::{Code, Feedback, Symbol};
use colored::{ColoredString, Colorize};

/// Peg colors for the first six symbols: red, green, yellow, blue, purple, orange
pub const PALETTE: [(&str, (u8, u8, u8)); 6] = [
    ("Red", (255, 0, 0)),
    ("Green", (0, 255, 0)),
    ("Yellow", (255, 255, 0)),
    ("Blue", (0, 0, 255)),
    ("Purple", (128, 0, 128)),
    ("Orange", (255, 165, 0)),
];

/// Name of the color drawn for a symbol, if it has one
#[must_use]
pub fn color_name(symbol: Symbol) -> Option<&'static str> {
    PALETTE.get(symbol.index()).map(|(name, _)| *name)
}

/// Letter-to-color key for the named symbols of an alphabet, e.g. `A = Red, B = Green`
#[must_use]
pub fn color_legend(alphabet_size: usize) -> String {
    (0..alphabet_size)
        .filter_map(|i| u8::try_from(i).ok().map(Symbol::new))
        .filter_map(|s| Some(format!("{} = {}", s.letter(), color_name(s)?)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A single symbol as a colored peg, or its letter past the palette
#[must_use]
pub fn symbol_peg(symbol: Symbol) -> ColoredString {
    match PALETTE.get(symbol.index()) {
        Some(&(_, (r, g, b))) => "●".truecolor(r, g, b),
        None => symbol.letter().to_string().bold(),
    }
}

/// Format a code as a row of colored pegs
#[must_use]
pub fn code_to_pegs(code: &Code) -> String {
    code.symbols()
        .iter()
        .map(|&s| symbol_peg(s).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format feedback as key pegs: `●` exact, `○` partial, `·` none
#[must_use]
pub fn feedback_to_pegs(feedback: Feedback, length: usize) -> String {
    let exact = usize::from(feedback.exact());
    let partial = usize::from(feedback.partial());
    let none = length.saturating_sub(exact + partial);

    format!(
        "{}{}{}",
        "●".repeat(exact),
        "○".repeat(partial),
        "·".repeat(none)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the largest possible entropy
#[must_use]
pub fn entropy_bar(entropy: f64, total_candidates: usize, width: usize) -> String {
    let max_entropy = (total_candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// Colored distribution bar for guess-count histograms
#[must_use]
pub fn distribution_bar(count: usize, max_count: usize, width: usize) -> String {
    let bar = create_progress_bar(count as f64, max_count as f64, width);
    let filled = bar.chars().take_while(|&c| c == '█').count();
    format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(width - filled).bright_black()
    )
}
