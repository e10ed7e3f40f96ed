pub mod colors;
pub mod duration;
pub mod path;

pub use duration::format_duration;
pub use duration::parse_duration;
