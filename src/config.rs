use serde::{Deserialize, Serialize};

/// Formatting options for the diagnostic vector dump.
///
/// The default reproduces the classic `printf("%e ")` layout: six fractional
/// digits, every element followed by a single space, and a trailing newline.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PrintOptions {
    /// Digits after the decimal point of the mantissa.
    pub precision: usize,

    pub separator: String,

    /// Emit the separator after the last element as well.
    pub trailing_separator: bool,

    pub line_terminator: String,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            precision: 6,
            separator: " ".to_string(),
            trailing_separator: true,
            line_terminator: "\n".to_string(),
        }
    }
}

impl PrintOptions {
    pub fn new(precision: usize, separator: &str) -> Self {
        Self {
            precision,
            separator: separator.to_string(),
            ..Self::default()
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}
