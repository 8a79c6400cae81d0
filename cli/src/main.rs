use bfhl_cli::commands::{self, cli};
use bfhl_core::api as core_api;
use bfhl_core::error;
use bfhl_plugins::factory::PluginsServiceFactory;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, error::CliError> {
    let args = cli::Args::parse();
    if !args.command.needs_config() {
        init_tracing(&core_api::LoggingConfig::default()).map_err(error::CliError::Config)?;
        return dispatch_offline(args.command);
    }

    let cfg = load_config(args.config.as_deref())?;
    init_tracing(&cfg.logging).map_err(error::CliError::Config)?;

    let ctx = core_api::AppContext::new(cfg, &PluginsServiceFactory)?;
    dispatch(args.command, &ctx).await
}

fn load_config(path: Option<&str>) -> Result<core_api::AppConfig, error::CliError> {
    match path {
        Some(path) => {
            let expanded = bfhl_cli::utils::expand_path(path)?;
            core_api::load_from_path(std::path::Path::new(&expanded))
        }
        None => core_api::load_default(),
    }
    .map_err(|e| error::CliError::Config(e.to_string()))
}

fn exit_code_for_error(e: &error::CliError) -> i32 {
    // 0: success
    // 11: config error
    // 12: input rejected before sending
    // 20: IO / command usage error
    // 30: service or network error
    // 50: internal/uncategorized
    match e {
        error::CliError::Config(_) => 11,
        error::CliError::Validation(_) => 12,
        error::CliError::Io(_) => 20,
        error::CliError::Command(_) => 20,
        error::CliError::Service(_) => 30,
        error::CliError::Anyhow(_) => 50,
    }
}

async fn dispatch(cmd: cli::Commands, ctx: &core_api::AppContext) -> Result<i32, error::CliError> {
    match cmd {
        cli::Commands::Submit(submit_args) => {
            commands::submit::handle_submit(submit_args, ctx).await
        }
        cli::Commands::Session(session_args) => {
            commands::session::handle_session(session_args, ctx).await
        }
        other => dispatch_offline(other),
    }
}

fn dispatch_offline(cmd: cli::Commands) -> Result<i32, error::CliError> {
    match cmd {
        cli::Commands::Validate(validate_args) => {
            commands::validate::handle_validate(validate_args)
        }
        cli::Commands::Filter(filter_args) => commands::filter::handle_filter(filter_args),
        cli::Commands::Filters => commands::filter::handle_filters(),
        cli::Commands::Init(init_args) => commands::init::handle_init(init_args),
        cli::Commands::Submit(_) | cli::Commands::Session(_) => Err(error::CliError::Command(
            "command requires a service context".to_string(),
        )),
    }
}

fn init_tracing(logging: &core_api::LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(logging.level.clone()).map_err(|e| e.to_string())?,
    };

    let mut maybe_writer = None;

    if logging.file {
        let dir = match logging
            .directory
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(d) => std::path::PathBuf::from(shellexpand::tilde(d).into_owned()),
            None => std::env::temp_dir().join("bfhl"),
        };

        std::fs::create_dir_all(&dir).map_err(|e| format!("create log dir failed: {e}"))?;
        let file_name = format!("bfhl.{}.log", std::process::id());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        maybe_writer = Some(non_blocking);
    }

    if !logging.console && maybe_writer.is_none() {
        return Err("logging disabled for both console and file".to_string());
    }

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}
