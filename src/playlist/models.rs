use crate::errors::PlaylistError;

/// A named, ordered list of distinct videos, held by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    name: String,
    video_ids: Vec<String>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            video_ids: Vec::new(),
        }
    }

    /// Name with the case it was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    pub fn add(&mut self, video_id: &str) -> Result<(), PlaylistError> {
        if self.contains(video_id) {
            return Err(PlaylistError::AlreadyPresent);
        }
        self.video_ids.push(video_id.to_string());
        Ok(())
    }

    pub fn remove(&mut self, video_id: &str) -> Result<(), PlaylistError> {
        let position = self
            .video_ids
            .iter()
            .position(|id| id == video_id)
            .ok_or(PlaylistError::NotPresent)?;
        self.video_ids.remove(position);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.video_ids.clear();
    }
}

impl std::fmt::Display for Playlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
