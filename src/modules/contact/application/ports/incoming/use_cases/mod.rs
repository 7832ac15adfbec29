mod get_contact_submission;
mod list_contact_submissions;
mod submit_contact;

pub use get_contact_submission::{GetContactSubmissionError, GetContactSubmissionUseCase};
pub use list_contact_submissions::{
    ListContactSubmissionsError, ListContactSubmissionsUseCase, CONTACT_LIST_LIMIT,
};
pub use submit_contact::{SubmitContactCommand, SubmitContactError, SubmitContactUseCase};
