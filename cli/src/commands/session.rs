//! Line-driven version of the single-screen form.
//!
//! One command per line. Every command is handled to completion before the next
//! line is read, so the session state has a single owner.

use std::io::Write;

use bfhl_core::api as core_api;
use bfhl_core::api::{FilterKind, FilterSelection};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::commands::cli::{OutputFormat, SessionArgs};
use crate::commands::submit::{render, run_submission};

const HELP: &str = "\
commands:
  input <json>       replace the JSON input
  filter [f,...]     set filters (no argument clears them)
  add <f>            add one filter
  remove <f>         remove one filter
  submit             validate and send the input
  show               print filtered and full response
  help               this text
  quit               leave the session
filters: alphabets, numbers, highestLowercase";

#[derive(Debug, PartialEq, Eq)]
enum SessionCommand {
    Input(String),
    Filter(String),
    Add(String),
    Remove(String),
    Submit,
    Show,
    Help,
    Quit,
    Unknown(String),
}

fn parse_line(line: &str) -> Option<SessionCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };
    Some(match cmd.to_ascii_lowercase().as_str() {
        "input" => SessionCommand::Input(rest.to_string()),
        "filter" | "filters" => SessionCommand::Filter(rest.to_string()),
        "add" => SessionCommand::Add(rest.to_string()),
        "remove" | "rm" => SessionCommand::Remove(rest.to_string()),
        "submit" => SessionCommand::Submit,
        "show" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        _ => SessionCommand::Unknown(cmd.to_string()),
    })
}

fn write_filtered<W: Write>(out: &mut W, session: &core_api::Session) -> std::io::Result<()> {
    writeln!(
        out,
        "Filtered Response:\n{}",
        core_api::render_filtered(session.filtered().as_ref())
    )
}

/// Runs commands from `reader` until EOF or `quit`. Returns the final session.
pub async fn run_session<R, W>(
    reader: R,
    out: &mut W,
    ctx: &core_api::AppContext,
    base_url: Option<&str>,
    mut session: core_api::Session,
) -> Result<core_api::Session, core_api::CliError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let Some(cmd) = parse_line(&line) else {
            continue;
        };
        tracing::debug!(target: "bfhl.session", command = ?cmd, "session command");
        match cmd {
            SessionCommand::Input(text) => {
                session.set_input(&text);
                writeln!(out, "input set ({} chars)", session.input().chars().count())?;
            }
            SessionCommand::Filter(list) => match FilterSelection::parse_list(&list) {
                Ok(selection) => {
                    session.set_filters(selection);
                    write_filtered(out, &session)?;
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            SessionCommand::Add(name) => match name.parse::<FilterKind>() {
                Ok(kind) => {
                    session.select(kind);
                    write_filtered(out, &session)?;
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            SessionCommand::Remove(name) => match name.parse::<FilterKind>() {
                Ok(kind) => {
                    session.deselect(kind);
                    write_filtered(out, &session)?;
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            SessionCommand::Submit => {
                match run_submission(&mut session, ctx, base_url).await {
                    Ok(_) => {}
                    Err(core_api::CliError::Validation(_)) | Err(core_api::CliError::Service(_)) => {
                        // already recorded on the session
                    }
                    Err(other) => writeln!(out, "{}", other)?,
                }
                write!(out, "{}", render(&session, OutputFormat::Text))?;
            }
            SessionCommand::Show => write!(out, "{}", render(&session, OutputFormat::Text))?,
            SessionCommand::Help => writeln!(out, "{}", HELP)?,
            SessionCommand::Quit => break,
            SessionCommand::Unknown(name) => {
                writeln!(out, "unknown command '{}', type 'help'", name)?
            }
        }
        out.flush()?;
    }
    Ok(session)
}

pub async fn handle_session(
    args: SessionArgs,
    ctx: &core_api::AppContext,
) -> Result<i32, core_api::CliError> {
    let mut session = core_api::Session::new();
    session.set_filters(args.filters.filters.into_iter().collect());

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    if atty::is(atty::Stream::Stdin) {
        writeln!(stdout, "{}", HELP)?;
    }
    run_session(stdin, &mut stdout, ctx, args.base_url.as_deref(), session).await?;
    Ok(0)
}
