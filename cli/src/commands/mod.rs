pub mod cli;
pub mod filter;
pub mod init;
pub mod session;
pub mod submit;
pub mod validate;
