//! haven-core - Core library for Link Haven
//!
//! This crate contains the shared models, session store, REST client, and the
//! screen logic (auth, link capture, link timeline) used by Link Haven
//! front ends.

pub mod api;
pub mod capture;
pub mod collection;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod screens;
pub mod session;
pub mod timeline;

#[cfg(test)]
mod test_support;

pub use error::{Error, Result};
pub use models::{Link, LinkId, Session, SessionUser, Source};
