//! Configuration, logging and tooling around `zonesnap-core`.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
mod config;
pub mod replay;
pub mod utils;

pub use config::*;
