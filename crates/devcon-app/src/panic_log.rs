//! Panic reporting through `log`.
//!
//! Command panics are caught by dispatch, but the default hook would still
//! print `thread 'main' panicked at ...` to stderr, in the middle of the
//! overlay. The host replaces it so panics go through the logger instead.

use std::panic;

/// Replace the default panic hook with one that logs at error level.
pub fn install() {
    panic::set_hook(Box::new(|info| {
        log::error!("{info}");
    }));
}
