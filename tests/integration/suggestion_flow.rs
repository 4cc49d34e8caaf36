//! Ask / select handlers against a scripted suggestion endpoint.

use super::test_utils::{ScriptedTransport, FILE};
use pgen_console::client::SuggestionClient;
use pgen_console::command::ClauseKind;
use pgen_console::view::handlers::{on_ask, on_input, on_prompt, on_select_suggestion};
use pgen_console::view::ViewState;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_three_suggestions_then_select_second() {
    let transport = Arc::new(ScriptedTransport::replying("a\nb\nc"));
    let client = SuggestionClient::new(transport.clone(), "/fetch_ai_response");
    let mut view = ViewState::new(FILE);
    on_input(&mut view, ClauseKind::Variant, "previous text");
    on_prompt(&mut view, ClauseKind::Variant, "rare variants");

    let count = on_ask(&mut view, &client, ClauseKind::Variant).await.unwrap();
    assert_eq!(count, 3);
    assert_eq!(view.panel(ClauseKind::Variant).suggestions, vec!["a", "b", "c"]);

    assert!(on_select_suggestion(&mut view, ClauseKind::Variant, 1));
    assert_eq!(view.clause(ClauseKind::Variant).raw_text, "b");

    assert_eq!(
        transport.requests()[0].1,
        json!({
            "pfile_prefix": FILE,
            "prompt": "rare variants",
            "query_type": "Variant",
        })
    );
}

#[tokio::test]
async fn test_new_fetch_replaces_previous_list() {
    let transport = Arc::new(ScriptedTransport::new(vec![
        super::test_utils::Reply::Body("x\ny"),
        super::test_utils::Reply::Body("z"),
    ]));
    let client = SuggestionClient::new(transport, "/fetch_ai_response");
    let mut view = ViewState::new(FILE);

    on_ask(&mut view, &client, ClauseKind::Sample).await.unwrap();
    on_ask(&mut view, &client, ClauseKind::Sample).await.unwrap();
    assert_eq!(view.panel(ClauseKind::Sample).suggestions, vec!["z"]);
}

#[tokio::test]
async fn test_empty_response_yields_one_empty_entry() {
    let transport = Arc::new(ScriptedTransport::replying(""));
    let client = SuggestionClient::new(transport, "/fetch_ai_response");
    let mut view = ViewState::new(FILE);
    on_input(&mut view, ClauseKind::Sample, "keep me?");

    let count = on_ask(&mut view, &client, ClauseKind::Sample).await.unwrap();
    assert_eq!(count, 1);
    assert!(on_select_suggestion(&mut view, ClauseKind::Sample, 0));
    assert_eq!(view.clause(ClauseKind::Sample).raw_text, "");
}

#[tokio::test]
async fn test_failed_fetch_keeps_existing_list() {
    let transport = Arc::new(ScriptedTransport::new(vec![
        super::test_utils::Reply::Body("one"),
        super::test_utils::Reply::Refused,
    ]));
    let client = SuggestionClient::new(transport, "/fetch_ai_response");
    let mut view = ViewState::new(FILE);

    on_ask(&mut view, &client, ClauseKind::Variant).await.unwrap();
    assert!(on_ask(&mut view, &client, ClauseKind::Variant).await.is_err());
    assert_eq!(view.panel(ClauseKind::Variant).suggestions, vec!["one"]);
}
