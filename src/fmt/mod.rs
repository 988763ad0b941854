//! Pure line rendering: timestamp/level prefix, rank colors, printf substitution.
//! Nothing here touches a sink, so surrounding code may use it standalone.

pub mod color;
mod printf;
mod wrap;

pub use color::{RESET, colorize, rank_color};
pub use printf::sprintf;
pub use wrap::{TIMESTAMP_FORMAT, wrap_time, wrap_time_at};
