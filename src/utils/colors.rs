/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// State color for verbose tick lines:
/// active → green, idle → cyan, in a break → yellow.
pub fn color_for_state(is_idle: bool, in_break: bool) -> &'static str {
    if in_break {
        YELLOW
    } else if is_idle {
        CYAN
    } else {
        GREEN
    }
}
