//! Fixed-capacity buffer for intents collected between ticks.

use arrayvec::ArrayVec;

use crate::types::Intent;

/// Intents buffered per tick before the rest are dropped
pub const INTENT_QUEUE_CAPACITY: usize = 32;

/// Intents in arrival order, handed to the engine once per tick
#[derive(Debug, Clone, Default)]
pub struct IntentQueue {
    items: ArrayVec<Intent, INTENT_QUEUE_CAPACITY>,
    dropped: u32,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an intent. Returns false (and counts a drop) when full.
    pub fn push(&mut self, intent: Intent) -> bool {
        if self.items.try_push(intent).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            return false;
        }
        true
    }

    pub fn as_slice(&self) -> &[Intent] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Intents rejected for lack of space since the last [`IntentQueue::take_dropped`]
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    pub fn take_dropped(&mut self) -> u32 {
        std::mem::take(&mut self.dropped)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
