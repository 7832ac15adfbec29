pub mod api;
pub mod document_id;
pub mod mongo;
pub mod owner;
pub mod time;
pub mod validation;
