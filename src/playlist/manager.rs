use std::collections::HashMap;

use super::models::Playlist;
use crate::errors::PlaylistManagerError;

/// Playlists keyed by lower-cased name. The normalized key never leaves this
/// type; callers always see the name as it was created.
#[derive(Debug, Default)]
pub struct PlaylistManager {
    playlists: HashMap<String, Playlist>,
}

fn key(name: &str) -> String {
    name.to_lowercase()
}

impl PlaylistManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.playlists.contains_key(&key(name))
    }

    pub fn create(&mut self, name: &str) -> Result<&Playlist, PlaylistManagerError> {
        let normalized = key(name);
        if self.playlists.contains_key(&normalized) {
            return Err(PlaylistManagerError::AlreadyExists);
        }
        log::debug!("Creating playlist '{}'", name);
        Ok(self
            .playlists
            .entry(normalized)
            .or_insert_with(|| Playlist::new(name)))
    }

    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&key(name))
    }

    pub fn get_or_fail(&self, name: &str) -> Result<&Playlist, PlaylistManagerError> {
        self.get(name).ok_or(PlaylistManagerError::NotFound)
    }

    pub fn get_mut_or_fail(&mut self, name: &str) -> Result<&mut Playlist, PlaylistManagerError> {
        self.playlists
            .get_mut(&key(name))
            .ok_or(PlaylistManagerError::NotFound)
    }

    pub fn delete(&mut self, name: &str) -> Result<Playlist, PlaylistManagerError> {
        let removed = self
            .playlists
            .remove(&key(name))
            .ok_or(PlaylistManagerError::NotFound)?;
        log::debug!("Deleted playlist '{}'", removed.name());
        Ok(removed)
    }

    /// All playlists ordered by display name.
    pub fn all(&self) -> Vec<&Playlist> {
        let mut playlists: Vec<&Playlist> = self.playlists.values().collect();
        playlists.sort_by(|a, b| a.name().cmp(b.name()));
        playlists
    }
}
