//! Submit handler against a scripted backend.

use super::test_utils::{Reply, ScriptedTransport, FILE};
use pgen_console::client::{SubmissionClient, SubmissionOutcome};
use pgen_console::command::{ClauseKind, CommandBuilder, Subcommand};
use pgen_console::error::ConsoleError;
use pgen_console::view::handlers::{on_input, on_submit, on_toggle};
use pgen_console::view::{StatusColor, ViewState, FAILURE_TEXT, SUCCESS_TEXT};
use serde_json::json;
use std::sync::Arc;

fn sample_view() -> ViewState {
    let mut view = ViewState::new(FILE);
    on_toggle(&mut view, ClauseKind::Sample, true);
    on_input(&mut view, ClauseKind::Sample, r#"IID=="S1""#);
    view
}

#[tokio::test]
async fn test_success_marker_turns_status_green() {
    let transport = Arc::new(ScriptedTransport::replying("Success: 3 rows"));
    let client = SubmissionClient::new(transport.clone(), "/submit_query");
    let mut view = sample_view();

    let (command, outcome) =
        on_submit(&mut view, &CommandBuilder::default(), &client, Subcommand::Query).await;

    assert!(outcome.unwrap().is_success());
    let result = view.result.unwrap();
    assert_eq!(result.text, SUCCESS_TEXT);
    assert_eq!(result.color, StatusColor::Green);

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "/submit_query");
    assert_eq!(requests[0].1, json!({ "query": command }));
}

#[tokio::test]
async fn test_error_body_turns_status_red() {
    let transport = Arc::new(ScriptedTransport::replying("Error: bad syntax"));
    let client = SubmissionClient::new(transport, "/submit_query");
    let mut view = sample_view();

    let (_, outcome) =
        on_submit(&mut view, &CommandBuilder::default(), &client, Subcommand::Filter).await;

    assert_eq!(
        outcome.unwrap(),
        SubmissionOutcome::Failure {
            body: "Error: bad syntax".to_string()
        }
    );
    let result = view.result.unwrap();
    assert_eq!(result.text, FAILURE_TEXT);
    assert_eq!(result.color, StatusColor::Red);
}

#[tokio::test]
async fn test_transport_failure_is_reported_not_retried() {
    let transport = Arc::new(ScriptedTransport::new(vec![Reply::Refused, Reply::Body("Success")]));
    let client = SubmissionClient::new(transport.clone(), "/submit_query");
    let mut view = sample_view();

    let (_, outcome) =
        on_submit(&mut view, &CommandBuilder::default(), &client, Subcommand::Query).await;

    assert!(matches!(outcome, Err(ConsoleError::Connection(_))));
    assert_eq!(view.result.unwrap().color, StatusColor::Red);
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_empty_form_is_still_submitted() {
    let transport = Arc::new(ScriptedTransport::replying("Error: no predicate"));
    let client = SubmissionClient::new(transport.clone(), "/submit_query");
    let mut view = ViewState::new(FILE);

    let (command, _) =
        on_submit(&mut view, &CommandBuilder::default(), &client, Subcommand::Query).await;

    assert_eq!(command, format!("pgen-rs query {}", FILE));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_last_resolved_submission_owns_status_line() {
    let transport = Arc::new(ScriptedTransport::new(vec![
        Reply::Body("Success"),
        Reply::Body("Error: timeout in backend"),
    ]));
    let client = SubmissionClient::new(transport, "/submit_query");
    let mut view = sample_view();
    let builder = CommandBuilder::default();

    on_submit(&mut view, &builder, &client, Subcommand::Query).await;
    assert_eq!(view.result.as_ref().unwrap().color, StatusColor::Green);
    on_submit(&mut view, &builder, &client, Subcommand::Filter).await;
    assert_eq!(view.result.as_ref().unwrap().color, StatusColor::Red);
}
