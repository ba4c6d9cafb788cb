//! Typed errors for the video shelf.
//!
//! Every component owns a small `thiserror` enum whose display text is the
//! reason shown to the user. `AppError` gathers them so the player can hand a
//! single type to whoever renders the outcome.

use std::path::PathBuf;

use thiserror::Error;

/// Misuse of a video's moderation flag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("Video is not flagged")]
    NotFlagged,

    /// The video is flagged and can't be played or added to a playlist.
    #[error("Video is currently flagged (reason: {0})")]
    Flagged(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("Video does not exist")]
    VideoNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("No video is currently playing")]
    NoVideo,

    #[error("Video is not paused")]
    NotPaused,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("Video already added")]
    AlreadyPresent,

    #[error("Video is not in playlist")]
    NotPresent,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistManagerError {
    #[error("A playlist with the same name already exists")]
    AlreadyExists,

    #[error("Playlist does not exist")]
    NotFound,
}

/// Broad category of a recoverable domain failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    AlreadyPresent,
    NotPresent,
    FlagState,
    PlaybackState,
}

/// Any recoverable failure raised by the domain model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Flag(#[from] FlagError),

    #[error(transparent)]
    Library(#[from] LibraryError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error(transparent)]
    Playlist(#[from] PlaylistError),

    #[error(transparent)]
    PlaylistManager(#[from] PlaylistManagerError),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Flag(_) => ErrorKind::FlagState,
            AppError::Library(LibraryError::VideoNotFound) => ErrorKind::NotFound,
            AppError::Playback(_) => ErrorKind::PlaybackState,
            AppError::Playlist(PlaylistError::AlreadyPresent) => ErrorKind::AlreadyPresent,
            AppError::Playlist(PlaylistError::NotPresent) => ErrorKind::NotPresent,
            AppError::PlaylistManager(PlaylistManagerError::AlreadyExists) => {
                ErrorKind::AlreadyExists
            }
            AppError::PlaylistManager(PlaylistManagerError::NotFound) => ErrorKind::NotFound,
        }
    }
}

/// Fatal problems with the catalog data source. These abort startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog record on line {line}: expected 3 fields, found {found}")]
    Malformed { line: usize, found: usize },

    #[error("Duplicate video id '{id}' on line {line}")]
    DuplicateId { id: String, line: usize },
}
