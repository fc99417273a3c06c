//! Screens outside the link dashboard.

pub mod auth;
pub mod sms;
pub mod terms;


pub use auth::{submit_login, submit_signup, AuthScreenError, Navigation};
pub use sms::{OptInError, SmsOptInForm};
pub use terms::{render_terms, WELCOME_TITLE};
