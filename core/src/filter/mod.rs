//! Client-side projection of a service response onto the selected filters.

mod kind;
mod project;

pub use kind::{FilterKind, FilterSelection, UnknownFilter};
pub use project::{filter_response, is_truthy, FilteredResponse};
