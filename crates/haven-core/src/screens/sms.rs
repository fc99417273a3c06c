//! SMS opt-in screen.

use thiserror::Error;

use crate::api::HavenApiClient;

pub const OPT_IN_SUCCESS: &str = "Successfully opted in for SMS updates!";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptInError {
    #[error("Phone number is required")]
    MissingPhone,
    #[error("Failed to opt in. Please try again.")]
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmsOptInForm {
    phone: String,
    in_flight: bool,
    status: Option<String>,
}

impl SmsOptInForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        if self.in_flight {
            "Opting in..."
        } else {
            "Opt In via SMS"
        }
    }

    /// Post the phone number; the status line reflects the outcome.
    pub async fn submit(&mut self, api: &HavenApiClient) -> Result<(), OptInError> {
        self.status = None;
        let phone = self.phone.trim().to_string();
        if phone.is_empty() {
            return Err(OptInError::MissingPhone);
        }

        self.in_flight = true;
        let result = api.sms_opt_in(&phone).await;
        self.in_flight = false;

        match result {
            Ok(()) => {
                tracing::info!("SMS opt-in accepted");
                self.status = Some(OPT_IN_SUCCESS.to_string());
                Ok(())
            }
            Err(error) => {
                tracing::error!("SMS opt-in failed: {}", error);
                let failure = OptInError::Failed;
                self.status = Some(failure.to_string());
                Err(failure)
            }
        }
    }
}
