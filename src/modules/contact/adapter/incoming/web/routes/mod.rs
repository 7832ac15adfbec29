mod get_contact_submission;
mod get_contact_submissions;
mod submit_contact;

pub use get_contact_submission::*;
pub use get_contact_submissions::*;
pub use submit_contact::*;
