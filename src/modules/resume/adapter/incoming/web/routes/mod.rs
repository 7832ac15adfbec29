mod get_resume;
mod update_resume;

pub use get_resume::*;
pub use update_resume::*;
