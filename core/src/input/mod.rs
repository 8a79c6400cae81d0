//! Input sanitizing and request validation.
//!
//! Raw text arrives from an argument, a file, stdin or a session line. It is
//! trimmed, typographic quotes are straightened, and the result must be a JSON
//! object carrying a `data` array before anything is sent.

mod request;
mod sanitize;

pub use request::{parse_request, ParsedRequest};
pub use sanitize::sanitize;
