//! 8-color ANSI escapes. Kept as literal sequences so terminals render the
//! exact same bytes every build.

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const PURPLE: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";
pub const BRIGHT_RED: &str = "\x1b[31;1m";
pub const BRIGHT_GREEN: &str = "\x1b[32;1m";
pub const BRIGHT_YELLOW: &str = "\x1b[33;1m";
pub const BRIGHT_BLUE: &str = "\x1b[34;1m";
pub const BRIGHT_PURPLE: &str = "\x1b[35;1m";
pub const BRIGHT_CYAN: &str = "\x1b[36;1m";

/// Test.
pub const DEFAULT_LEVEL0: &str = PURPLE;
/// Debug.
pub const DEFAULT_LEVEL1: &str = GREEN;
/// Info.
pub const DEFAULT_LEVEL2: &str = BLUE;
/// Warning.
pub const DEFAULT_LEVEL3: &str = YELLOW;
/// Error.
pub const DEFAULT_LEVEL4: &str = RED;
/// Any rank outside 0..=4.
pub const DEFAULT_NO_LEVEL: &str = GREEN;

/// Start code for a severity rank.
#[must_use]
pub const fn rank_color(rank: u8) -> &'static str {
    match rank {
        0 => DEFAULT_LEVEL0,
        1 => DEFAULT_LEVEL1,
        2 => DEFAULT_LEVEL2,
        3 => DEFAULT_LEVEL3,
        4 => DEFAULT_LEVEL4,
        _ => DEFAULT_NO_LEVEL,
    }
}

/// Wraps `text` in the rank's color and a trailing reset.
#[must_use]
pub fn colorize(rank: u8, text: &str) -> String {
    let color = rank_color(rank);
    format!("{color}{text}{RESET}")
}
