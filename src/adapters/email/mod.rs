//! Contact mailer implementations.
//!
//! - `ResendMailer` - Resend HTTP API (production)
//! - `MockMailer` - Recording mailer for tests and local runs

mod mock_mailer;
mod resend_mailer;

pub use mock_mailer::MockMailer;
pub use resend_mailer::{ResendConfig, ResendMailer};
