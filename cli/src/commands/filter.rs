use bfhl_core::api as core_api;
use serde_json::Value;

use crate::commands::cli::{FilterResponseArgs, OutputFormat};
use crate::utils::read_file;

pub fn handle_filter(args: FilterResponseArgs) -> Result<i32, core_api::CliError> {
    let raw = read_file(&args.response_file)?;
    let response: Value = serde_json::from_str(&raw).map_err(|e| {
        core_api::CliError::Command(format!(
            "response file '{}' is not JSON: {}",
            args.response_file, e
        ))
    })?;
    let selection: core_api::FilterSelection = args.filters.filters.into_iter().collect();
    let filtered = core_api::filter_response(Some(&response), &selection);

    let out = match args.format {
        OutputFormat::Text => core_api::render_filtered(filtered.as_ref()),
        OutputFormat::Json => serde_json::to_string_pretty(&filtered).map_err(|e| {
            core_api::CliError::Command(format!("failed to render result: {}", e))
        })?,
    };
    println!("{}", out);
    Ok(0)
}

pub fn handle_filters() -> Result<i32, core_api::CliError> {
    for kind in core_api::FilterKind::ALL {
        println!(
            "{:<18} {:<28} <- {}",
            kind.as_str(),
            kind.label(),
            kind.backend_field()
        );
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cli::FilterArgs;
    use bfhl_core::api::FilterKind;
    use std::io::Write;

    #[test]
    fn test_filter_saved_response() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"highestLowercaseAlphabet":["z"]}}"#).unwrap();
        let args = FilterResponseArgs {
            response_file: file.path().to_string_lossy().to_string(),
            filters: FilterArgs {
                filters: vec![FilterKind::HighestLowercase],
            },
            format: OutputFormat::Json,
        };
        assert_eq!(handle_filter(args).unwrap(), 0);
    }

    #[test]
    fn test_filter_rejects_non_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<html>").unwrap();
        let args = FilterResponseArgs {
            response_file: file.path().to_string_lossy().to_string(),
            filters: FilterArgs::default(),
            format: OutputFormat::Text,
        };
        let err = handle_filter(args).unwrap_err();
        assert!(err.to_string().contains("is not JSON"));
    }
}
