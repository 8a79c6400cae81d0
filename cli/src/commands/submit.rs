use bfhl_core::api as core_api;

use crate::commands::cli::{OutputFormat, SubmitArgs};
use crate::utils::read_input;

/// Validates, resolves the base URL, sends, and stores the outcome on `session`.
///
/// The base URL is looked up only after the input passed validation.
pub async fn run_submission(
    session: &mut core_api::Session,
    ctx: &core_api::AppContext,
    base_url: Option<&str>,
) -> Result<core_api::Applied, core_api::CliError> {
    let submission = session.prepare_submission()?;
    let base_url = ctx.base_url(base_url)?;
    tracing::info!(
        target: "bfhl.submit",
        url = %core_api::endpoint_url(&base_url),
        service = ctx.service().name(),
        generation = submission.generation,
        "sending request"
    );
    session.send(submission, ctx.service(), &base_url).await
}

pub fn render(session: &core_api::Session, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => session.render_text(),
        OutputFormat::Json => session.render_json(),
    }
}

pub async fn handle_submit(
    args: SubmitArgs,
    ctx: &core_api::AppContext,
) -> Result<i32, core_api::CliError> {
    let raw = read_input(&args.input)?;
    let mut session = core_api::Session::new();
    session.set_input(&raw);
    session.set_filters(args.filters.filters.into_iter().collect());

    run_submission(&mut session, ctx, args.base_url.as_deref()).await?;
    print!("{}", render(&session, args.format));
    if args.format == OutputFormat::Json {
        println!();
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfhl_core::api::{AppConfig, FilterKind, FilteredResponse};
    use mockito::Server;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn ctx() -> core_api::AppContext {
        let svc = bfhl_plugins::factory::build_service(&AppConfig::default()).unwrap();
        core_api::AppContext::with_service(AppConfig::default(), svc)
    }

    #[tokio::test]
    async fn test_run_submission_filters_live_response() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/bfhl")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"alphabets":["A","B"],"numbers":[1,2],"highestLowercaseAlphabet":[]}"#)
            .expect(1)
            .create_async()
            .await;

        let mut session = core_api::Session::new();
        session.set_input("{“data”: [“A”, “B”, “1”, “2”]}");
        session.set_filters([FilterKind::Alphabets].into_iter().collect());

        let applied = run_submission(&mut session, &ctx(), Some(&server.url()))
            .await
            .unwrap();
        assert_eq!(applied, core_api::Applied::Response);
        assert_eq!(
            session.filtered().map(FilteredResponse::into_value),
            Some(json!({"alphabets": ["A", "B"]}))
        );
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_server() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/bfhl")
            .with_status(200)
            .expect(0)
            .create_async()
            .await;

        let mut session = core_api::Session::new();
        session.set_input(r#"{"foo": [1]}"#);
        let err = run_submission(&mut session, &ctx(), Some(&server.url()))
            .await
            .unwrap_err();
        assert!(matches!(err, core_api::CliError::Validation(_)));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_service_error_is_reported_with_prefix() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/bfhl")
            .with_status(422)
            .with_body(r#"{"message":"Invalid data"}"#)
            .create_async()
            .await;

        let mut session = core_api::Session::new();
        session.set_input(r#"{"data": [true]}"#);
        let err = run_submission(&mut session, &ctx(), Some(&server.url()))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "API error: Invalid data");
        assert_eq!(session.error(), Some("API error: Invalid data"));
    }

    #[test]
    fn test_render_json_format() {
        let session = core_api::Session::new();
        let out: serde_json::Value =
            serde_json::from_str(&render(&session, OutputFormat::Json)).unwrap();
        assert_eq!(out["filtered"], serde_json::Value::Null);
    }
}
