// Common utilities

pub mod log_format;
pub mod split;

pub use log_format::LogFormat;
pub use split::split_segments;
