pub mod add;
pub mod auth_cmd;
pub mod categories;
pub mod common;
pub mod completions;
pub mod config;
pub mod list;
pub mod opt_in;
pub mod pages;
