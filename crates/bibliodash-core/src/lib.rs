//! Bibliodash Core - Shared infrastructure for the bibliometrics dashboard
//!
//! Logging, progress reporting, the shared HTTP client and runtime,
//! retry helpers and graceful shutdown used by the other crates.

pub mod http;
pub mod logging;
pub mod progress;
pub mod retry;
pub mod shutdown;

// Re-exports for convenience
pub use http::{HttpConfig, StreamError, fetch_text, http_config, set_http_config};
pub use logging::{IndicatifLogger, init_logging};
pub use progress::{ProgressContext, SharedProgress, fmt_num};
pub use retry::{backoff_duration, retry_with_backoff};
pub use shutdown::{install_signal_handlers, is_shutdown_requested, request_shutdown};
