//! State of one client screen: input, filters, last response and last error.

mod state;

pub use state::{Applied, Session, Submission};
