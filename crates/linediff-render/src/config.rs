use serde::{Deserialize, Serialize};

/// Configuration for the listing printer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Wrap deletions in red and insertions in green.
    pub colorize: bool,
    /// Width of each line number column.
    pub line_width: usize,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            colorize: false,
            line_width: 4,
        }
    }
}

impl PrinterConfig {
    /// Default layout with color turned on or off.
    pub fn colored(colorize: bool) -> Self {
        Self {
            colorize,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = PrinterConfig::default();
        assert!(!c.colorize);
        assert_eq!(c.line_width, 4);
    }

    #[test]
    fn colored_keeps_layout() {
        let c = PrinterConfig::colored(true);
        assert!(c.colorize);
        assert_eq!(c.line_width, 4);
    }
}
