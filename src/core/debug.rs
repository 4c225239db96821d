//! Lightweight debug logging gated by QMA_DEBUG=1 (or `qma --debug`).
use std::sync::OnceLock;

static ENABLED: OnceLock<bool> = OnceLock::new();

pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| std::env::var("QMA_DEBUG").ok().as_deref() == Some("1"))
}

/// Turns logging on for the rest of the process. Has no effect once
/// `is_enabled` has already been resolved.
pub fn enable() {
    let _ = ENABLED.set(true);
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() { eprintln!($($arg)*); }
    }};
}
