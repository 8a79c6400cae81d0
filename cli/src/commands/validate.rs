use bfhl_core::api as core_api;

use crate::commands::cli::ValidateArgs;
use crate::utils::read_input;

/// Prints the request exactly as it would be sent.
pub fn handle_validate(args: ValidateArgs) -> Result<i32, core_api::CliError> {
    let raw = read_input(&args.input)?;
    let request = core_api::parse_request(&raw)?;
    let body = serde_json::to_string_pretty(&request)
        .map_err(|e| core_api::CliError::Command(format!("failed to render request: {}", e)))?;
    println!("{}", body);
    eprintln!("ok: 'data' has {} item(s)", request.data().len());
    Ok(0)
}
