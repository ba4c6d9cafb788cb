use crate::errors::PlaybackError;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Paused,
    Playing,
}

/// Tracks the single active video and whether it is playing or paused.
///
/// The video is held by id, a key into the library, so flag changes made
/// through the library are always visible here. `Stopped` holds no video and
/// `Paused`/`Playing` always hold one.
#[derive(Debug, Default)]
pub struct VideoPlayback {
    current: Option<String>,
    status: PlaybackStatus,
}

impl VideoPlayback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was active. Stopping the previous video first is the
    /// caller's job.
    pub fn play(&mut self, video_id: impl Into<String>) {
        self.current = Some(video_id.into());
        self.status = PlaybackStatus::Playing;
    }

    pub fn pause(&mut self) -> Result<(), PlaybackError> {
        self.check_video()?;
        self.status = PlaybackStatus::Paused;
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), PlaybackError> {
        self.check_video()?;
        if self.status != PlaybackStatus::Paused {
            return Err(PlaybackError::NotPaused);
        }
        self.status = PlaybackStatus::Playing;
        Ok(())
    }

    /// Returns the id of the video that was stopped.
    pub fn stop(&mut self) -> Result<String, PlaybackError> {
        let video_id = self.current.take().ok_or(PlaybackError::NoVideo)?;
        self.status = PlaybackStatus::Stopped;
        Ok(video_id)
    }

    pub fn current(&self) -> Result<&str, PlaybackError> {
        self.current.as_deref().ok_or(PlaybackError::NoVideo)
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status != PlaybackStatus::Stopped
    }

    fn check_video(&self) -> Result<(), PlaybackError> {
        self.current().map(|_| ())
    }
}
