//! Parsing of the line-oriented command language.
//!
//! A line is split on whitespace; the first word names the command
//! (case-insensitively) and the rest are its arguments. Argument counts are
//! checked here so the player only ever sees well-formed requests.

use thiserror::Error;

pub const INVALID_COMMAND: &str =
    "Please enter a valid command, type HELP for a list of available commands.";

pub const HELP_TEXT: &str = "
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, url and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all the videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> -Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.
";

/// A line that could not be turned into a command. The display text is the
/// usage hint shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{}", INVALID_COMMAND)]
    Empty,

    #[error("Please enter {command} command followed by {expected}.")]
    Usage {
        command: &'static str,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo(String),
    Help,
    Exit,
    /// Not a known command. Answered with a notice rather than an error.
    Unrecognized(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (name, args) = words.split_first().ok_or(CommandError::Empty)?;

        let command = match name.to_uppercase().as_str() {
            "NUMBER_OF_VIDEOS" => Command::NumberOfVideos,
            "SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
            "PLAY" => {
                let [video_id] = expect_args::<1>(args, "PLAY", "video_id")?;
                Command::Play(video_id)
            }
            "PLAY_RANDOM" => Command::PlayRandom,
            "STOP" => Command::Stop,
            "PAUSE" => Command::Pause,
            "CONTINUE" => Command::Continue,
            "SHOW_PLAYING" => Command::ShowPlaying,
            "CREATE_PLAYLIST" => {
                let [playlist] = expect_args::<1>(args, "CREATE_PLAYLIST", "a playlist name")?;
                Command::CreatePlaylist(playlist)
            }
            "ADD_TO_PLAYLIST" => {
                let [playlist, video_id] = expect_args::<2>(
                    args,
                    "ADD_TO_PLAYLIST",
                    "a playlist name and video_id to add",
                )?;
                Command::AddToPlaylist { playlist, video_id }
            }
            "REMOVE_FROM_PLAYLIST" => {
                let [playlist, video_id] = expect_args::<2>(
                    args,
                    "REMOVE_FROM_PLAYLIST",
                    "a playlist name and video_id to remove",
                )?;
                Command::RemoveFromPlaylist { playlist, video_id }
            }
            "CLEAR_PLAYLIST" => {
                let [playlist] = expect_args::<1>(args, "CLEAR_PLAYLIST", "a playlist name")?;
                Command::ClearPlaylist(playlist)
            }
            "DELETE_PLAYLIST" => {
                let [playlist] = expect_args::<1>(args, "DELETE_PLAYLIST", "a playlist name")?;
                Command::DeletePlaylist(playlist)
            }
            "SHOW_PLAYLIST" => {
                let [playlist] = expect_args::<1>(args, "SHOW_PLAYLIST", "a playlist name")?;
                Command::ShowPlaylist(playlist)
            }
            "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
            "SEARCH_VIDEOS" => {
                let [term] = expect_args::<1>(args, "SEARCH_VIDEOS", "a search term")?;
                Command::SearchVideos(term)
            }
            "SEARCH_VIDEOS_WITH_TAG" => {
                let [tag] = expect_args::<1>(args, "SEARCH_VIDEOS_WITH_TAG", "a video tag")?;
                Command::SearchVideosWithTag(tag)
            }
            "FLAG_VIDEO" => match args {
                [video_id] => Command::FlagVideo {
                    video_id: video_id.to_string(),
                    reason: None,
                },
                [video_id, reason] => Command::FlagVideo {
                    video_id: video_id.to_string(),
                    reason: Some(reason.to_string()),
                },
                _ => {
                    return Err(CommandError::Usage {
                        command: "FLAG_VIDEO",
                        expected: "a video_id and an optional flag reason",
                    })
                }
            },
            "ALLOW_VIDEO" => {
                let [video_id] = expect_args::<1>(args, "ALLOW_VIDEO", "a video_id")?;
                Command::AllowVideo(video_id)
            }
            "HELP" => Command::Help,
            "EXIT" if args.is_empty() => Command::Exit,
            _ => Command::Unrecognized(line.trim().to_string()),
        };
        Ok(command)
    }
}

fn expect_args<const N: usize>(
    args: &[&str],
    command: &'static str,
    expected: &'static str,
) -> Result<[String; N], CommandError> {
    let args: [&str; N] = args
        .try_into()
        .map_err(|_| CommandError::Usage { command, expected })?;
    Ok(args.map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("NUMBER_OF_VIDEOS"), Ok(Command::NumberOfVideos));
        assert_eq!(Command::parse("  show_all_videos  "), Ok(Command::ShowAllVideos));
        assert_eq!(Command::parse("Play_Random"), Ok(Command::PlayRandom));
        assert_eq!(Command::parse("HELP"), Ok(Command::Help));
        assert_eq!(Command::parse("exit"), Ok(Command::Exit));
    }

    #[test]
    fn test_parse_keeps_argument_case() {
        assert_eq!(
            Command::parse("play Amazing_Cats_Video_Id"),
            Ok(Command::Play("Amazing_Cats_Video_Id".to_string()))
        );
        assert_eq!(
            Command::parse("ADD_TO_PLAYLIST My_List  funny_dogs_video_id"),
            Ok(Command::AddToPlaylist {
                playlist: "My_List".to_string(),
                video_id: "funny_dogs_video_id".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_flag_video_optional_reason() {
        assert_eq!(
            Command::parse("FLAG_VIDEO some_id"),
            Ok(Command::FlagVideo {
                video_id: "some_id".to_string(),
                reason: None,
            })
        );
        assert_eq!(
            Command::parse("FLAG_VIDEO some_id spam"),
            Ok(Command::FlagVideo {
                video_id: "some_id".to_string(),
                reason: Some("spam".to_string()),
            })
        );
        assert_eq!(
            Command::parse("FLAG_VIDEO").unwrap_err().to_string(),
            "Please enter FLAG_VIDEO command followed by a video_id and an optional flag reason."
        );
    }

    #[test]
    fn test_usage_messages() {
        assert_eq!(
            Command::parse("PLAY").unwrap_err().to_string(),
            "Please enter PLAY command followed by video_id."
        );
        assert_eq!(
            Command::parse("PLAY a b").unwrap_err().to_string(),
            "Please enter PLAY command followed by video_id."
        );
        assert_eq!(
            Command::parse("REMOVE_FROM_PLAYLIST list").unwrap_err().to_string(),
            "Please enter REMOVE_FROM_PLAYLIST command followed by a playlist name and video_id to remove."
        );
        assert_eq!(
            Command::parse("SEARCH_VIDEOS_WITH_TAG").unwrap_err().to_string(),
            "Please enter SEARCH_VIDEOS_WITH_TAG command followed by a video tag."
        );
    }

    #[test]
    fn test_empty_and_unknown_input() {
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert_eq!(Command::parse("").unwrap_err().to_string(), INVALID_COMMAND);
        assert_eq!(
            Command::parse("DANCE now"),
            Ok(Command::Unrecognized("DANCE now".to_string()))
        );
        assert_eq!(
            Command::parse("EXIT please"),
            Ok(Command::Unrecognized("EXIT please".to_string()))
        );
    }
}
