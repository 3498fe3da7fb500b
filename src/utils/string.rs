//! String manipulation utilities

use crate::constants::display;

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Format a process index as a display label, e.g. `P3`
pub fn process_label(id: usize) -> String {
    format!("{}{id}", display::PROCESS_PREFIX)
}

/// Join a sequence of process ids into a wait chain, e.g. `P0 → P1 → P0`
pub fn wait_chain(path: &[usize]) -> String {
    path.iter()
        .map(|&id| process_label(id))
        .collect::<Vec<_>>()
        .join(display::WAIT_ARROW)
}
