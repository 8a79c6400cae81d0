pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod filter;
pub mod input;
pub mod render;
pub mod service;
pub mod session;
