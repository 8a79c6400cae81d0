use bfhl_core::api::{FilterKind, UnknownFilter};
use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn parse_filter_kind(s: &str) -> Result<FilterKind, UnknownFilter> {
    s.parse()
}

#[derive(Parser, Debug)]
#[command(name = "bfhl", version, about = "Send JSON to a /bfhl endpoint and filter the reply")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Read configuration from this file instead of ~/.bfhl/config.toml or ./config.toml.
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct InputArgs {
    /// JSON text, e.g. '{"data": ["A", "1"]}'. Curly quotes are accepted.
    #[arg(long, group = "input_source")]
    pub input: Option<String>,

    #[arg(long, group = "input_source")]
    pub input_file: Option<String>,

    #[arg(long, group = "input_source")]
    pub stdin: bool,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Response fields to show: alphabets, numbers, highestLowercase.
    /// Repeat the flag or pass a comma separated list; order is kept.
    #[arg(
        long = "filter",
        short = 'f',
        value_delimiter = ',',
        action = clap::ArgAction::Append,
        value_parser = parse_filter_kind
    )]
    pub filters: Vec<FilterKind>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Overrides BFHL_API_URL and [api].base_url.
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct FilterResponseArgs {
    /// File holding a saved JSON response.
    #[arg(long)]
    pub response_file: String,

    #[command(flatten)]
    pub filters: FilterArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct SessionArgs {
    #[arg(long)]
    pub base_url: Option<String>,

    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct InitArgs {
    #[arg(long)]
    pub base_url: String,

    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Overwrite an existing config file.
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the input, POST it to <base>/bfhl and print the filtered and full response.
    Submit(SubmitArgs),
    /// Check the input locally without sending it.
    Validate(ValidateArgs),
    /// Apply filters to a saved response.
    Filter(FilterResponseArgs),
    /// List available filters.
    Filters,
    /// Interactive screen: edit input and filters, submit repeatedly.
    Session(SessionArgs),
    /// Write ~/.bfhl/config.toml.
    Init(InitArgs),
}

impl Commands {
    /// Commands that talk to the service need the config file and a service context.
    /// The rest run offline so a broken config cannot block them.
    pub fn needs_config(&self) -> bool {
        matches!(self, Commands::Submit(_) | Commands::Session(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_args_parse_filters_in_order() {
        let args = Args::try_parse_from([
            "bfhl",
            "submit",
            "--input",
            r#"{"data":[]}"#,
            "-f",
            "numbers,highestLowercase",
            "--filter",
            "alphabets",
        ])
        .unwrap();
        let Commands::Submit(submit) = args.command else {
            panic!("expected submit");
        };
        assert_eq!(
            submit.filters.filters,
            vec![
                FilterKind::Numbers,
                FilterKind::HighestLowercase,
                FilterKind::Alphabets
            ]
        );
        assert_eq!(submit.format, OutputFormat::Text);
    }

    #[test]
    fn test_unknown_filter_is_rejected() {
        let res = Args::try_parse_from(["bfhl", "submit", "--stdin", "--filter", "vowels"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_input_sources_are_exclusive() {
        let res = Args::try_parse_from([
            "bfhl",
            "validate",
            "--input",
            "{}",
            "--input-file",
            "x.json",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn test_validate_with_single_input_source_parses() {
        let args =
            Args::try_parse_from(["bfhl", "validate", "--input", r#"{"data":[1]}"#]).unwrap();
        let Commands::Validate(validate) = args.command else {
            panic!("expected validate");
        };
        assert_eq!(validate.input.input.as_deref(), Some(r#"{"data":[1]}"#));
        assert!(!validate.input.stdin);
    }

    #[test]
    fn test_only_network_commands_need_config() {
        let parse = |argv: &[&str]| Args::try_parse_from(argv).unwrap().command;
        assert!(parse(&["bfhl", "submit", "--stdin"]).needs_config());
        assert!(parse(&["bfhl", "session"]).needs_config());
        assert!(!parse(&["bfhl", "validate", "--stdin"]).needs_config());
        assert!(!parse(&["bfhl", "filters"]).needs_config());
        assert!(!parse(&["bfhl", "filter", "--response-file", "r.json"]).needs_config());
        assert!(!parse(&["bfhl", "init", "--base-url", "http://x", "--force"]).needs_config());
    }
}
