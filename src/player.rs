//! The video player: one method per user-facing command.
//!
//! `VideoPlayer` owns the library, the playlists and the playback state and
//! enforces the rules that span them. It never writes to the terminal; each
//! operation returns the `Event`s that happened, or a `Rejection` naming the
//! attempted action and the reason it failed.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::errors::AppError;
use crate::library::models::Video;
use crate::library::VideoLibrary;
use crate::playback::{PlaybackStatus, VideoPlayback};
use crate::playlist::PlaylistManager;

pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Something that happened as the result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    VideoCount(usize),
    /// Rendered videos, flagged ones included.
    VideoList(Vec<String>),
    Playing(String),
    Stopping(String),
    Pausing(String),
    AlreadyPaused(String),
    Continuing(String),
    NoVideosAvailable,
    NowPlaying { video: String, paused: bool },
    NothingPlaying,
    PlaylistCreated(String),
    AddedToPlaylist { playlist: String, title: String },
    RemovedFromPlaylist { playlist: String, title: String },
    PlaylistCleared(String),
    PlaylistDeleted(String),
    PlaylistList(Vec<String>),
    PlaylistContents { playlist: String, videos: Vec<String> },
    Flagged { title: String, reason: String },
    FlagRemoved(String),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::VideoCount(count) => write!(f, "{} videos in the library", count),
            Event::VideoList(videos) => {
                write!(f, "Here's a list of all available videos:")?;
                for video in videos {
                    write!(f, "\n{}", video)?;
                }
                Ok(())
            }
            Event::Playing(title) => write!(f, "Playing video: {}", title),
            Event::Stopping(title) => write!(f, "Stopping video: {}", title),
            Event::Pausing(title) => write!(f, "Pausing video: {}", title),
            Event::AlreadyPaused(title) => write!(f, "Video already paused: {}", title),
            Event::Continuing(title) => write!(f, "Continuing video: {}", title),
            Event::NoVideosAvailable => write!(f, "No videos available"),
            Event::NowPlaying { video, paused } => {
                write!(f, "Currently playing: {}", video)?;
                if *paused {
                    write!(f, " - PAUSED")?;
                }
                Ok(())
            }
            Event::NothingPlaying => write!(f, "No video is currently playing"),
            Event::PlaylistCreated(name) => {
                write!(f, "Successfully created new playlist: {}", name)
            }
            Event::AddedToPlaylist { playlist, title } => {
                write!(f, "Added video to {}: {}", playlist, title)
            }
            Event::RemovedFromPlaylist { playlist, title } => {
                write!(f, "Removed video from {}: {}", playlist, title)
            }
            Event::PlaylistCleared(name) => {
                write!(f, "Successfully removed all videos from {}", name)
            }
            Event::PlaylistDeleted(name) => write!(f, "Deleted playlist: {}", name),
            Event::PlaylistList(names) if names.is_empty() => {
                write!(f, "No playlists exist yet")
            }
            Event::PlaylistList(names) => {
                write!(f, "Showing all playlists:")?;
                for name in names {
                    write!(f, "\n  {}", name)?;
                }
                Ok(())
            }
            Event::PlaylistContents { playlist, videos } => {
                write!(f, "Showing playlist: {}", playlist)?;
                if videos.is_empty() {
                    return write!(f, "\nNo videos here yet");
                }
                for video in videos {
                    write!(f, "\n  {}", video)?;
                }
                Ok(())
            }
            Event::Flagged { title, reason } => {
                write!(f, "Successfully flagged video: {} (reason: {})", title, reason)
            }
            Event::FlagRemoved(title) => {
                write!(f, "Successfully removed flag from video: {}", title)
            }
        }
    }
}

/// The command a `Rejection` was raised for. Playlist actions carry the
/// playlist name as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    PlayVideo,
    StopVideo,
    PauseVideo,
    ContinueVideo,
    CreatePlaylist,
    AddToPlaylist(String),
    RemoveFromPlaylist(String),
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    FlagVideo,
    AllowVideo,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::PlayVideo => write!(f, "play video"),
            Action::StopVideo => write!(f, "stop video"),
            Action::PauseVideo => write!(f, "pause video"),
            Action::ContinueVideo => write!(f, "continue video"),
            Action::CreatePlaylist => write!(f, "create playlist"),
            Action::AddToPlaylist(name) => write!(f, "add video to {}", name),
            Action::RemoveFromPlaylist(name) => write!(f, "remove video from {}", name),
            Action::ClearPlaylist(name) => write!(f, "clear playlist {}", name),
            Action::DeletePlaylist(name) => write!(f, "delete playlist {}", name),
            Action::ShowPlaylist(name) => write!(f, "show playlist {}", name),
            Action::FlagVideo => write!(f, "flag video"),
            Action::AllowVideo => write!(f, "remove flag from video"),
        }
    }
}

/// A command that could not be carried out. Nothing was changed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot {action}: {error}")]
pub struct Rejection {
    pub action: Action,
    #[source]
    pub error: AppError,
}

impl Rejection {
    pub fn new(action: Action, error: impl Into<AppError>) -> Self {
        Self {
            action,
            error: error.into(),
        }
    }
}

pub type Outcome = Result<Vec<Event>, Rejection>;

/// Ranked results of a title or tag search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    query: String,
    /// (video id, rendered video)
    hits: Vec<(String, String)>,
}

impl SearchResults {
    fn new(query: &str, videos: Vec<&Video>) -> Self {
        Self {
            query: query.to_string(),
            hits: videos
                .into_iter()
                .map(|video| (video.id().to_string(), video.to_string()))
                .collect(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.hits.iter().map(|(id, _)| id.as_str())
    }

    /// Video id for a 1-based result number.
    pub fn pick(&self, number: usize) -> Option<&str> {
        let index = number.checked_sub(1)?;
        self.hits.get(index).map(|(id, _)| id.as_str())
    }
}

impl fmt::Display for SearchResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hits.is_empty() {
            return write!(f, "No search results for {}", self.query);
        }
        write!(f, "Here are the results for {}:", self.query)?;
        for (number, (_, video)) in self.hits.iter().enumerate() {
            write!(f, "\n  {}) {}", number + 1, video)?;
        }
        Ok(())
    }
}

pub struct VideoPlayer {
    library: VideoLibrary,
    playlists: PlaylistManager,
    playback: VideoPlayback,
    rng: StdRng,
}

impl VideoPlayer {
    pub fn new(library: VideoLibrary) -> Self {
        Self::with_rng(library, StdRng::from_os_rng())
    }

    /// A player whose random picks are reproducible.
    pub fn with_seed(library: VideoLibrary, seed: u64) -> Self {
        Self::with_rng(library, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(library: VideoLibrary, rng: StdRng) -> Self {
        Self {
            library,
            playlists: PlaylistManager::new(),
            playback: VideoPlayback::new(),
            rng,
        }
    }

    pub fn library(&self) -> &VideoLibrary {
        &self.library
    }

    pub fn playlists(&self) -> &PlaylistManager {
        &self.playlists
    }

    pub fn playback(&self) -> &VideoPlayback {
        &self.playback
    }

    pub fn number_of_videos(&self) -> Event {
        Event::VideoCount(self.library.len())
    }

    pub fn show_all_videos(&self) -> Event {
        Event::VideoList(render(self.library.all()))
    }

    pub fn play_video(&mut self, video_id: &str) -> Outcome {
        let title = self
            .library
            .get_or_fail(video_id)
            .map_err(AppError::from)
            .and_then(|video| {
                video.check_allowed()?;
                Ok(video.title().to_string())
            })
            .map_err(|e| Rejection::new(Action::PlayVideo, e))?;

        let mut events = Vec::new();
        if self.playback.is_active() {
            events.extend(self.stop_video()?);
        }

        log::debug!("Playing '{}'", video_id);
        self.playback.play(video_id);
        events.push(Event::Playing(title));
        Ok(events)
    }

    pub fn play_random_video(&mut self) -> Outcome {
        match self.library.random_allowed_id(&mut self.rng) {
            Some(video_id) => {
                let video_id = video_id.to_string();
                self.play_video(&video_id)
            }
            None => Ok(vec![Event::NoVideosAvailable]),
        }
    }

    pub fn stop_video(&mut self) -> Outcome {
        let title = self
            .current_video()
            .map(|video| video.title().to_string())
            .map_err(|e| Rejection::new(Action::StopVideo, e))?;

        let stopped = self
            .playback
            .stop()
            .map_err(|e| Rejection::new(Action::StopVideo, e))?;
        log::debug!("Stopped '{}'", stopped);
        Ok(vec![Event::Stopping(title)])
    }

    pub fn pause_video(&mut self) -> Outcome {
        let title = self
            .current_video()
            .map(|video| video.title().to_string())
            .map_err(|e| Rejection::new(Action::PauseVideo, e))?;

        if self.playback.status() == PlaybackStatus::Paused {
            return Ok(vec![Event::AlreadyPaused(title)]);
        }
        self.playback
            .pause()
            .map_err(|e| Rejection::new(Action::PauseVideo, e))?;
        Ok(vec![Event::Pausing(title)])
    }

    pub fn continue_video(&mut self) -> Outcome {
        let title = self
            .current_video()
            .map(|video| video.title().to_string())
            .map_err(|e| Rejection::new(Action::ContinueVideo, e))?;

        self.playback
            .resume()
            .map_err(|e| Rejection::new(Action::ContinueVideo, e))?;
        Ok(vec![Event::Continuing(title)])
    }

    pub fn show_playing(&self) -> Event {
        let paused = match self.playback.status() {
            PlaybackStatus::Stopped => return Event::NothingPlaying,
            PlaybackStatus::Paused => true,
            PlaybackStatus::Playing => false,
        };
        match self.current_video() {
            Ok(video) => Event::NowPlaying {
                video: video.to_string(),
                paused,
            },
            Err(_) => Event::NothingPlaying,
        }
    }

    pub fn create_playlist(&mut self, playlist_name: &str) -> Outcome {
        self.playlists
            .create(playlist_name)
            .map_err(|e| Rejection::new(Action::CreatePlaylist, e))?;
        Ok(vec![Event::PlaylistCreated(playlist_name.to_string())])
    }

    pub fn add_to_playlist(&mut self, playlist_name: &str, video_id: &str) -> Outcome {
        let title = self
            .try_add_to_playlist(playlist_name, video_id)
            .map_err(|e| Rejection::new(Action::AddToPlaylist(playlist_name.to_string()), e))?;
        Ok(vec![Event::AddedToPlaylist {
            playlist: playlist_name.to_string(),
            title,
        }])
    }

    fn try_add_to_playlist(&mut self, playlist_name: &str, video_id: &str) -> Result<String, AppError> {
        let playlist = self.playlists.get_mut_or_fail(playlist_name)?;
        let video = self.library.get_or_fail(video_id)?;
        video.check_allowed()?;
        playlist.add(video.id())?;
        log::debug!("Added '{}' to playlist '{}'", video_id, playlist.name());
        Ok(video.title().to_string())
    }

    pub fn remove_from_playlist(&mut self, playlist_name: &str, video_id: &str) -> Outcome {
        let title = self
            .try_remove_from_playlist(playlist_name, video_id)
            .map_err(|e| {
                Rejection::new(Action::RemoveFromPlaylist(playlist_name.to_string()), e)
            })?;
        Ok(vec![Event::RemovedFromPlaylist {
            playlist: playlist_name.to_string(),
            title,
        }])
    }

    fn try_remove_from_playlist(
        &mut self,
        playlist_name: &str,
        video_id: &str,
    ) -> Result<String, AppError> {
        let playlist = self.playlists.get_mut_or_fail(playlist_name)?;
        let video = self.library.get_or_fail(video_id)?;
        playlist.remove(video.id())?;
        log::debug!("Removed '{}' from playlist '{}'", video_id, playlist.name());
        Ok(video.title().to_string())
    }

    pub fn clear_playlist(&mut self, playlist_name: &str) -> Outcome {
        self.playlists
            .get_mut_or_fail(playlist_name)
            .map_err(|e| Rejection::new(Action::ClearPlaylist(playlist_name.to_string()), e))?
            .clear();
        Ok(vec![Event::PlaylistCleared(playlist_name.to_string())])
    }

    pub fn delete_playlist(&mut self, playlist_name: &str) -> Outcome {
        self.playlists
            .delete(playlist_name)
            .map_err(|e| Rejection::new(Action::DeletePlaylist(playlist_name.to_string()), e))?;
        Ok(vec![Event::PlaylistDeleted(playlist_name.to_string())])
    }

    pub fn show_playlist(&self, playlist_name: &str) -> Outcome {
        let playlist = self
            .playlists
            .get_or_fail(playlist_name)
            .map_err(|e| Rejection::new(Action::ShowPlaylist(playlist_name.to_string()), e))?;

        let videos = playlist
            .video_ids()
            .iter()
            .filter_map(|id| self.library.get(id))
            .map(ToString::to_string)
            .collect();
        Ok(vec![Event::PlaylistContents {
            playlist: playlist_name.to_string(),
            videos,
        }])
    }

    pub fn show_all_playlists(&self) -> Event {
        Event::PlaylistList(
            self.playlists
                .all()
                .into_iter()
                .map(|playlist| playlist.name().to_string())
                .collect(),
        )
    }

    pub fn search_videos(&self, search_term: &str) -> SearchResults {
        SearchResults::new(search_term, self.library.search_by_title(search_term))
    }

    pub fn search_videos_with_tag(&self, video_tag: &str) -> SearchResults {
        SearchResults::new(video_tag, self.library.search_by_tag(video_tag))
    }

    /// Plays the result with the given 1-based number, if there is one.
    pub fn play_search_result(
        &mut self,
        results: &SearchResults,
        selection: Option<usize>,
    ) -> Option<Outcome> {
        let video_id = results.pick(selection?)?.to_string();
        Some(self.play_video(&video_id))
    }

    /// Flags a video, stopping it first if it is the one playing. A missing
    /// or empty reason is recorded as "Not supplied".
    pub fn flag_video(&mut self, video_id: &str, flag_reason: Option<&str>) -> Outcome {
        let reason = flag_reason
            .filter(|reason| !reason.is_empty())
            .unwrap_or(DEFAULT_FLAG_REASON);

        let video = self
            .library
            .get_mut_or_fail(video_id)
            .map_err(|e| Rejection::new(Action::FlagVideo, e))?;
        video
            .flag(reason)
            .map_err(|e| Rejection::new(Action::FlagVideo, e))?;
        let flagged = Event::Flagged {
            title: video.title().to_string(),
            reason: reason.to_string(),
        };
        log::debug!("Flagged '{}': {}", video_id, reason);

        let mut events = Vec::new();
        if self.playback.current().ok() == Some(video_id) {
            events.extend(self.stop_video()?);
        }
        events.push(flagged);
        Ok(events)
    }

    pub fn allow_video(&mut self, video_id: &str) -> Outcome {
        let video = self
            .library
            .get_mut_or_fail(video_id)
            .map_err(|e| Rejection::new(Action::AllowVideo, e))?;
        video
            .unflag()
            .map_err(|e| Rejection::new(Action::AllowVideo, e))?;
        log::debug!("Removed flag from '{}'", video_id);
        Ok(vec![Event::FlagRemoved(video.title().to_string())])
    }

    fn current_video(&self) -> Result<&Video, AppError> {
        let video_id = self.playback.current()?;
        Ok(self.library.get_or_fail(video_id)?)
    }
}

fn render(videos: Vec<&Video>) -> Vec<String> {
    videos.into_iter().map(ToString::to_string).collect()
}
