//! homemon: configuration surface of a home-server monitoring integration.
//!
//! Layers:
//! - `domain`: domain forest, tri-state selection queries
//! - `application`: selection controller, connection form, localization
//! - `infrastructure`: host accessors, filesystem, DI container
//! - `cli`: argument parsing, dispatch, rendering

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
