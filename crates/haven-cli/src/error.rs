use std::io;

use haven_core::api::ApiError;
use haven_core::capture::CaptureError;
use haven_core::collection::RefreshError;
use haven_core::screens::{AuthScreenError, OptInError};
use haven_core::session::SessionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] haven_core::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    AuthScreen(#[from] AuthScreenError),
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error(transparent)]
    Refresh(#[from] RefreshError),
    #[error(transparent)]
    OptIn(#[from] OptInError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Not signed in. Run `haven login --email <EMAIL> --password <PASSWORD>` first.")]
    NotSignedIn,
}
