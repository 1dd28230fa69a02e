//! Session-keyed registry of in-memory cart slots.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tienda_cart::{CartSlot, CartSlotError};
use tienda_core::CartSessionId;

/// In-memory cart slot registry: one whole-value slot per session.
///
/// Writes are last-writer-wins with no version check; concurrent sessions
/// never share a slot, and a single session's commands are applied one at a
/// time by the caller.
#[derive(Debug, Default)]
pub struct InMemoryCartSlots {
    slots: RwLock<HashMap<CartSessionId, String>>,
}

impl InMemoryCartSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a slot handle bound to one session's storage.
    pub fn slot(self: &Arc<Self>, session: CartSessionId) -> SessionSlot {
        SessionSlot {
            session,
            slots: Arc::clone(self),
        }
    }

    /// Number of sessions currently holding a persisted cart.
    pub fn persisted_sessions(&self) -> usize {
        self.slots.read().map(|m| m.len()).unwrap_or(0)
    }
}

/// `CartSlot` handle for a single session inside an [`InMemoryCartSlots`].
#[derive(Debug, Clone)]
pub struct SessionSlot {
    session: CartSessionId,
    slots: Arc<InMemoryCartSlots>,
}

impl SessionSlot {
    pub fn session(&self) -> CartSessionId {
        self.session
    }
}

impl CartSlot for SessionSlot {
    fn load(&self) -> Result<Option<String>, CartSlotError> {
        let map = self
            .slots
            .slots
            .read()
            .map_err(|_| CartSlotError::Unavailable("slot registry lock poisoned".to_string()))?;
        Ok(map.get(&self.session).cloned())
    }

    fn save(&self, payload: &str) -> Result<(), CartSlotError> {
        let mut map = self
            .slots
            .slots
            .write()
            .map_err(|_| CartSlotError::Unavailable("slot registry lock poisoned".to_string()))?;
        map.insert(self.session, payload.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), CartSlotError> {
        let mut map = self
            .slots
            .slots
            .write()
            .map_err(|_| CartSlotError::Unavailable("slot registry lock poisoned".to_string()))?;
        map.remove(&self.session);
        Ok(())
    }
}
