//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ConsoleError;
use crate::view::FAILURE_TEXT;

/// Map domain/service errors to a string for CLI output.
///
/// Transport failures read like a failed submission, with the cause appended.
pub fn map_error(e: &ConsoleError) -> String {
    match e {
        ConsoleError::RequestFailed { .. }
        | ConsoleError::Timeout(_)
        | ConsoleError::Connection(_)
        | ConsoleError::Http(_) => format!("{} ({})", FAILURE_TEXT, e),
        _ => e.to_string(),
    }
}
