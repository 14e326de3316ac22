use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Issues generation tokens for in-flight fetches.
///
/// Network responses carry no ordering guarantee relative to the user's
/// current selection: a slow response for a superseded query, category, or
/// page can land after the user has moved on. Each fetch takes a token at
/// launch; its result is applied only if the token is still current when the
/// response arrives. Issuing a new token supersedes every outstanding one.
#[derive(Clone, Default)]
pub struct RequestGuard {
    current: Arc<AtomicU64>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede all outstanding tokens and hand out a fresh one.
    pub fn issue(&self) -> RequestToken {
        let generation = self.current.fetch_add(1, Ordering::Relaxed) + 1;
        RequestToken {
            generation,
            current: Arc::clone(&self.current),
        }
    }
}

#[derive(Clone)]
pub struct RequestToken {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl RequestToken {
    /// Whether the fetch holding this token is still the most recent one.
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::Relaxed) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_current() {
        let guard = RequestGuard::new();
        let token = guard.issue();
        assert!(token.is_current());
    }

    #[test]
    fn issuing_supersedes_outstanding_tokens() {
        let guard = RequestGuard::new();
        let stale = guard.issue();
        let fresh = guard.issue();
        assert!(!stale.is_current());
        assert!(fresh.is_current());
    }

    #[test]
    fn clones_share_staleness() {
        let guard = RequestGuard::new();
        let token = guard.issue();
        let carried_into_task = token.clone();
        guard.issue();
        assert!(!token.is_current());
        assert!(!carried_into_task.is_current());
    }

    #[test]
    fn guard_clones_invalidate_each_other() {
        let guard = RequestGuard::new();
        let other_view = guard.clone();
        let token = guard.issue();
        other_view.issue();
        assert!(!token.is_current());
    }
}
