use std::collections::HashMap;

use super::{Backend, StoreError};
use crate::game::session::Game;

/// Games held in a map for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    games: HashMap<String, Game>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl Backend for MemoryBackend {
    fn load(&self, owner: &str) -> Result<Option<Game>, StoreError> {
        Ok(self.games.get(owner).cloned())
    }

    fn save(&mut self, owner: &str, game: &Game) -> Result<(), StoreError> {
        self.games.insert(owner.to_string(), game.clone());
        Ok(())
    }

    fn remove(&mut self, owner: &str) -> Result<bool, StoreError> {
        Ok(self.games.remove(owner).is_some())
    }
}
