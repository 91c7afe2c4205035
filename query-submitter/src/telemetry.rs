//! Log output for the submitter.
//!
//! stdout belongs to the rendered answer, so events from this crate go to
//! stderr only. Other crates (reqwest, hyper) stay at the base filter level.

use std::io::{self, IsTerminal};

use tracing_subscriber::filter::{self, Directive, EnvFilter, LevelFilter};
use tracing_subscriber::fmt::{self, format::FmtSpan, time::ChronoUtc};
use tracing_subscriber::{Layer, registry::LookupSpan};

/// Target prefix of every event emitted by this crate.
pub const TARGET_PREFIX: &str = "query_submitter";

/// Filter level used when `RUST_LOG` is unset.
const BASE_LEVEL: &str = "warn";

/// Compact stderr layer that only renders this crate's events.
///
/// Timestamps are UTC seconds; `send`/`submit` spans report their duration on close.
pub fn stderr_layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_timer(ChronoUtc::new("%Y-%m-%dT%H:%M:%SZ".to_string()))
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(filter::filter_fn(|meta| {
            meta.target().starts_with(TARGET_PREFIX)
        }))
}

/// `RUST_LOG` (or `warn`) plus this crate at `debug` when verbose, `warn` otherwise.
pub fn cli_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(BASE_LEVEL))
        .add_directive(crate_directive(verbose))
}

fn crate_directive(verbose: bool) -> Directive {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    format!("{TARGET_PREFIX}={level}")
        .parse()
        .unwrap_or_else(|_| Directive::from(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_switches_crate_level() {
        let verbose = crate_directive(true).to_string().to_lowercase();
        assert_eq!(verbose, "query_submitter=debug");
        let quiet = crate_directive(false).to_string().to_lowercase();
        assert_eq!(quiet, "query_submitter=warn");
    }
}
