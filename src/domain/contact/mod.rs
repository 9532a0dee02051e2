//! Contact module - the gated request form and its email summary.

mod errors;
mod submission;
mod summary;

pub mod events;

pub use errors::ContactError;
pub use events::{ContactBlocked, ContactFailed, ContactSubmitted};
pub use submission::{
    ContactSubmission, MAX_BUSINESS_LEN, MAX_EMAIL_LEN, MAX_MESSAGE_LEN, MAX_NAME_LEN,
    MAX_PHONE_LEN,
};
pub use summary::summarize;
