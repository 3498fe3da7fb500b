//! Configuration constants for gridlock

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

/// Cycle display configuration
pub mod display {
    /// Separator used when printing a wait chain
    pub const WAIT_ARROW: &str = " → ";

    /// Prefix used when labelling a process by index
    pub const PROCESS_PREFIX: &str = "P";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
    }

    #[test]
    fn test_display_constants() {
        assert_eq!(display::WAIT_ARROW, " → ");
        assert_eq!(display::PROCESS_PREFIX, "P");
    }
}
