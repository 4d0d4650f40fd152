//! Random Port - injectable randomness for action selection

/// Source of uniform random choices.
///
/// Injected so that the session can be driven deterministically in tests.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniformly distributed index in `0..len`. Callers never pass `0`.
    fn gen_index(&self, len: usize) -> usize;
}
