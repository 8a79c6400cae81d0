//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `bfhl_core::api` instead of reaching into internal modules.

pub use crate::config::{
    get_bfhl_data_dir, load_default, load_from_path, resolve_base_url, ApiConfig, AppConfig,
    LoggingConfig, API_URL_ENV,
};
pub use crate::context::{AppContext, ServiceFactory};
pub use crate::error::{CliError, ServiceError, TransportKind, ValidationError};
pub use crate::filter::{
    filter_response, is_truthy, FilterKind, FilterSelection, FilteredResponse, UnknownFilter,
};
pub use crate::input::{parse_request, sanitize, ParsedRequest};
pub use crate::render::{
    render_filtered, render_full, render_json, render_text, NO_FILTERS_PLACEHOLDER,
};
pub use crate::service::{endpoint_url, BfhlService, BFHL_PATH};
pub use crate::session::{Applied, Session, Submission};
