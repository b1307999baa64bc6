//! Cooperative close requests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag asking long-running controls to stop
///
/// Clones share the flag. Controls check it between lines or iterations,
/// never in the middle of a line.
#[derive(Debug, Clone, Default)]
pub struct CloseSignal {
    requested: Arc<AtomicBool>,
}

impl CloseSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every holder of this signal to stop
    pub fn request_close(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    pub fn is_close_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Clear a previous request so the signal can be reused
    pub fn clear(&self) {
        self.requested.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_flag() {
        let signal = CloseSignal::new();
        let observer = signal.clone();
        assert!(!observer.is_close_requested());

        signal.request_close();
        assert!(observer.is_close_requested());

        observer.clear();
        assert!(!signal.is_close_requested());
    }
}
