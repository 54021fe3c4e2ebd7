//! Terminal front-end: play checkers against the greedy bot on stdin/stdout.
//!
//! Logs go to stderr; set `RUST_LOG=plum_checkers=debug` to watch the session.

use std::io;

use plum_checkers::session::session_config::SessionConfig;
use plum_checkers::text_ui::text_loop::run_stdio_loop;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    run_stdio_loop(SessionConfig::default())
}
