use serde_json::Value;

use crate::error::{CliError, ServiceError};
use crate::filter::{filter_response, FilterKind, FilterSelection, FilteredResponse};
use crate::input::{parse_request, ParsedRequest};
use crate::render;
use crate::service::BfhlService;

/// A validated request waiting to be sent, tagged with its submission generation.
#[derive(Debug, Clone)]
pub struct Submission {
    pub generation: u64,
    pub request: ParsedRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Response stored, error cleared.
    Response,
    /// Error stored, previous response kept.
    Error,
    /// A newer submission was issued meanwhile; outcome dropped.
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    input: String,
    selection: FilterSelection,
    response: Option<Value>,
    error: Option<String>,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, raw: &str) {
        self.input = raw.trim().to_string();
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn set_filters(&mut self, selection: FilterSelection) {
        self.selection = selection;
    }

    pub fn select(&mut self, kind: FilterKind) -> bool {
        self.selection.select(kind)
    }

    pub fn deselect(&mut self, kind: FilterKind) -> bool {
        self.selection.deselect(kind)
    }

    pub fn response(&self) -> Option<&Value> {
        self.response.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Derived on every call from the current response and selection.
    pub fn filtered(&self) -> Option<FilteredResponse> {
        filter_response(self.response.as_ref(), &self.selection)
    }

    /// Validates the current input.
    ///
    /// On failure the user-visible message is stored and nothing should be sent.
    pub fn prepare_submission(&mut self) -> Result<Submission, CliError> {
        match parse_request(&self.input) {
            Ok(request) => {
                self.generation += 1;
                tracing::debug!(
                    target: "bfhl.session",
                    generation = self.generation,
                    items = request.data().len(),
                    "submission prepared"
                );
                Ok(Submission {
                    generation: self.generation,
                    request,
                })
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(CliError::Validation(e))
            }
        }
    }

    /// Stores the outcome of `generation`. Only the latest issued submission may write.
    pub fn apply_outcome(
        &mut self,
        generation: u64,
        outcome: Result<Value, ServiceError>,
    ) -> Applied {
        if generation != self.generation {
            tracing::debug!(
                target: "bfhl.session",
                generation,
                latest = self.generation,
                "dropping stale outcome"
            );
            return Applied::Stale;
        }
        match outcome {
            Ok(value) => {
                self.response = Some(value);
                self.error = None;
                Applied::Response
            }
            Err(e) => {
                tracing::warn!(target: "bfhl.session", error = %e, "submission failed");
                self.error = Some(format!("API error: {}", e.user_message()));
                Applied::Error
            }
        }
    }

    /// Sends a prepared submission and stores its outcome.
    ///
    /// A service failure is kept on the session and also returned.
    pub async fn send(
        &mut self,
        submission: Submission,
        service: &dyn BfhlService,
        base_url: &str,
    ) -> Result<Applied, CliError> {
        let outcome = service.submit(base_url, &submission.request).await;
        let failure = outcome.as_ref().err().cloned();
        match (self.apply_outcome(submission.generation, outcome), failure) {
            (Applied::Error, Some(e)) => Err(CliError::Service(e)),
            (applied, _) => Ok(applied),
        }
    }

    /// Validate, send, store. Errors are also kept on the session for display.
    pub async fn submit(
        &mut self,
        service: &dyn BfhlService,
        base_url: &str,
    ) -> Result<Applied, CliError> {
        let submission = self.prepare_submission()?;
        self.send(submission, service, base_url).await
    }

    pub fn render_text(&self) -> String {
        render::render_text(
            self.error(),
            self.filtered().as_ref(),
            self.response.as_ref(),
        )
    }

    pub fn render_json(&self) -> String {
        render::render_json(
            self.error(),
            self.filtered().as_ref(),
            self.response.as_ref(),
        )
    }
}
