//! bfhl-cli library - exposes modules for unit tests

pub mod commands;
pub mod utils;
