//! Action service for choosing the answer to a round
//!
//! Picks uniformly among the actions that keep the local player inside the
//! speed bounds. Randomness comes from the injected `RandomPort`.

use std::sync::Arc;

use speedbot_domain::{Action, PlayerState};

use crate::ports::outbound::RandomPort;

/// Service choosing a random legal action for the local player
#[derive(Clone)]
pub struct ActionService {
    random: Arc<dyn RandomPort>,
}

impl ActionService {
    /// Create a new ActionService drawing from the given random source
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    /// Choose one of `me.legal_actions()` uniformly at random
    pub fn choose(&self, me: &PlayerState) -> Action {
        let candidates = me.legal_actions();
        let index = self.random.gen_index(candidates.len());
        debug_assert!(
            index < candidates.len(),
            "RandomPort returned {} for {} candidates",
            index,
            candidates.len()
        );
        candidates[index]
    }
}
