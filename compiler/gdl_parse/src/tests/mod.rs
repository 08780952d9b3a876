//! Parser tests.
//!
//! Tests are organized into modules by category:
//! - `parser`: productions of the grammar language and the trees they build
//! - `recovery`: syntax errors, resynchronization and the parse limits
//! - `speculation`: probed decisions and the transactional sink

mod parser;

use std::sync::Once;

use gdl_ir::Ast;

use crate::{parse_source, ParseOutput};

static TRACING_INIT: Once = Once::new();

/// Install a log subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=gdl_parse=trace` to follow decisions and recovery.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(EnvFilter::from_default_env())
                .try_init();
        }
    });
}

/// Parse `source` and fail the test on any error.
fn parse_ok(source: &str) -> Ast {
    init_tracing();
    let output = parse_source(source);
    assert!(
        !output.has_errors(),
        "unexpected errors for {source:?}: {:#?}",
        output.errors
    );
    assert!(!output.halted);
    output.ast
}

fn parse_err(source: &str) -> ParseOutput {
    init_tracing();
    let output = parse_source(source);
    assert!(output.has_errors(), "expected errors for {source:?}");
    output
}
