//! Property tests for command assembly and quoting

mod command_invariants;
mod quoting;
