//! routemate CLI library.
//!
//! Subcommand handlers and output rendering for the `routemate` binary. The
//! lookups themselves live in `routemate-lib`.

pub mod commands;
pub mod output;
