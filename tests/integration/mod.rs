//! Integration tests for pgen-console

mod cli_binary;
mod submission_flow;
mod suggestion_flow;
mod test_utils;
