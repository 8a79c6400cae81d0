use std::io::Read;

use bfhl_core::api::CliError;

use crate::commands::cli::InputArgs;

/// Expands `~` and environment variables in a user-supplied path.
pub fn expand_path(path: &str) -> Result<String, CliError> {
    shellexpand::full(path)
        .map(|p| p.into_owned())
        .map_err(|e| CliError::Command(format!("cannot expand path '{}': {}", path, e)))
}

pub fn read_file(path: &str) -> Result<String, CliError> {
    let expanded = expand_path(path)?;
    std::fs::read_to_string(&expanded).map_err(|e| {
        CliError::Command(format!("failed to read '{}': {}", expanded, e))
    })
}

/// Reads raw input from `--input`, `--input-file` or stdin.
///
/// With no flag at all, stdin is used when it is not a terminal.
pub fn read_input(args: &InputArgs) -> Result<String, CliError> {
    if let Some(text) = args.input.as_deref() {
        return Ok(text.to_string());
    }
    if let Some(path) = args.input_file.as_deref() {
        return read_file(path);
    }
    if args.stdin || !atty::is(atty::Stream::Stdin) {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Err(CliError::Command(
        "no input given (use --input, --input-file or --stdin)".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_input_prefers_inline_text() {
        let args = InputArgs {
            input: Some(r#"{"data":[]}"#.to_string()),
            ..Default::default()
        };
        assert_eq!(read_input(&args).unwrap(), r#"{"data":[]}"#);
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{“data”: [“x”]}}").unwrap();
        let args = InputArgs {
            input_file: Some(file.path().to_string_lossy().to_string()),
            ..Default::default()
        };
        assert_eq!(read_input(&args).unwrap(), "{“data”: [“x”]}");
    }

    #[test]
    fn test_read_file_missing_reports_path() {
        let err = read_file("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
