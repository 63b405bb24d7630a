/// Identifier allocation for open sounds
use crate::domain::shared::{Result, SoundError};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

/// Set of identifiers held by currently-open sounds
///
/// A new sound gets `max(open ids) + 1`, so an id becomes free again once
/// every higher-numbered sound has been closed. Clones share the same set.
#[derive(Debug, Clone, Default)]
pub struct SoundRegistry {
    open: Arc<Mutex<BTreeSet<u32>>>,
}

impl SoundRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next identifier and mark it open
    ///
    /// Fails with `IdsExhausted` while `u32::MAX` is held by an open sound.
    pub fn allocate(&self) -> Result<u32> {
        let mut open = self.lock();
        let id = match open.iter().next_back() {
            Some(max) => max.checked_add(1).ok_or(SoundError::IdsExhausted)?,
            None => 1,
        };
        open.insert(id);
        Ok(id)
    }

    /// Forget an identifier. Returns false if it was not open.
    pub fn release(&self, id: u32) -> bool {
        self.lock().remove(&id)
    }

    /// Identifiers currently open, ascending
    pub fn open_ids(&self) -> Vec<u32> {
        self.lock().iter().copied().collect()
    }

    pub fn is_open(&self, id: u32) -> bool {
        self.lock().contains(&id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeSet<u32>> {
        // Every update is a single insert or remove
        self.open.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
