#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod demo;
pub mod input;
pub mod options;
pub mod presentation;
pub mod query;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
