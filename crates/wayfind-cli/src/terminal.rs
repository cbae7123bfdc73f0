//! Terminal styling and color utilities.
//!
//! ANSI escape codes for maze drawings, route listings and the search trace,
//! plus the environment checks that decide whether to use them.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    /// Bold reverse green for the start marker.
    pub const TAG_START: &str = "\x1b[1;7;32m";
    /// Bold reverse magenta for the goal marker.
    pub const TAG_GOAL: &str = "\x1b[1;7;35m";

    /// Bright bold white for emphasis (costs, vertex ids).
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for walls and secondary text.
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for enqueued vertices.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for path cells and successful checks.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow for relaxed edges.
    pub const YELLOW: &str = "\x1b[33m";
    /// Red for failures.
    pub const RED: &str = "\x1b[31m";
}

/// Resolved color codes, either actual ANSI sequences or empty strings when
/// color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_start: &'static str,
    pub tag_goal: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_start: colors::TAG_START,
            tag_goal: colors::TAG_GOAL,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            red: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_start: "",
            tag_goal: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            yellow: "",
            red: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Palette for the given `--no-color` flag, falling back to detection.
    #[must_use]
    pub fn for_flag(no_color: bool) -> Self {
        if no_color {
            Self::plain()
        } else {
            Self::detect()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Format a count with thousand separators (commas).
///
/// ```
/// # use wayfind_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(1000), "1,000");
/// assert_eq!(format_with_separators(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_with_separators(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Format a cost for display; unreachable costs print as `inf`.
#[must_use]
pub fn format_cost(cost: f64) -> String {
    if cost.is_infinite() {
        "inf".to_string()
    } else if cost.fract() == 0.0 && cost.abs() < 1e15 {
        format!("{cost:.0}")
    } else {
        format!("{cost:.3}")
    }
}
