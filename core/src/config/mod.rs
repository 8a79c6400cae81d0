mod load;
mod types;

pub use load::{get_bfhl_data_dir, load_default, load_from_path, resolve_base_url, API_URL_ENV};
pub use types::{ApiConfig, AppConfig, LoggingConfig};
