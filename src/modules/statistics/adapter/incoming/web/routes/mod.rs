mod get_statistics;
mod update_statistics;

pub use get_statistics::*;
pub use update_statistics::*;
