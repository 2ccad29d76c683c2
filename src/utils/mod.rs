use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "expense_ledger=info";

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `expense_ledger=info`. Leaves an already installed global subscriber alone.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = fmt().with_env_filter(filter).try_init();
    });
}
