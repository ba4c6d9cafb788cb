//! Interactive front end: reads commands line by line, hands them to the
//! player and prints whatever comes back.

use std::io::{self, BufRead, Write};

use crate::commands::{Command, HELP_TEXT, INVALID_COMMAND};
use crate::config::DEFAULT_PROMPT;
use crate::player::{Outcome, SearchResults, VideoPlayer};

pub const WELCOME: &str = "Hello and welcome to YouTube, what would you like to do?
    Enter HELP for list of available commands or EXIT to terminate.";
pub const GOODBYE: &str = "YouTube has now terminated its execution. Thank you and goodbye!";
pub const SEARCH_CHOICE_PROMPT: &str =
    "Would you like to play any of the above? If yes, specify the number of the video.
If your answer is not a valid number, we will assume it's a no.";

pub struct Shell<R, W> {
    player: VideoPlayer,
    input: R,
    output: W,
    prompt: String,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(player: VideoPlayer, input: R, output: W) -> Self {
        Self {
            player,
            input,
            output,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn player(&self) -> &VideoPlayer {
        &self.player
    }

    /// Runs until EXIT or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", WELCOME)?;
        loop {
            write!(self.output, "{}", self.prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            match Command::parse(&line) {
                Ok(Command::Exit) => break,
                Ok(command) => self.execute(command)?,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
        writeln!(self.output, "{}", GOODBYE)
    }

    pub fn execute(&mut self, command: Command) -> io::Result<()> {
        log::debug!("Executing {:?}", command);
        let player = &mut self.player;
        let outcome: Outcome = match command {
            Command::NumberOfVideos => Ok(vec![player.number_of_videos()]),
            Command::ShowAllVideos => Ok(vec![player.show_all_videos()]),
            Command::Play(video_id) => player.play_video(&video_id),
            Command::PlayRandom => player.play_random_video(),
            Command::Stop => player.stop_video(),
            Command::Pause => player.pause_video(),
            Command::Continue => player.continue_video(),
            Command::ShowPlaying => Ok(vec![player.show_playing()]),
            Command::CreatePlaylist(name) => player.create_playlist(&name),
            Command::AddToPlaylist { playlist, video_id } => {
                player.add_to_playlist(&playlist, &video_id)
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                player.remove_from_playlist(&playlist, &video_id)
            }
            Command::ClearPlaylist(name) => player.clear_playlist(&name),
            Command::DeletePlaylist(name) => player.delete_playlist(&name),
            Command::ShowPlaylist(name) => player.show_playlist(&name),
            Command::ShowAllPlaylists => Ok(vec![player.show_all_playlists()]),
            Command::SearchVideos(term) => {
                let results = player.search_videos(&term);
                return self.offer_results(results);
            }
            Command::SearchVideosWithTag(tag) => {
                let results = player.search_videos_with_tag(&tag);
                return self.offer_results(results);
            }
            Command::FlagVideo { video_id, reason } => {
                player.flag_video(&video_id, reason.as_deref())
            }
            Command::AllowVideo(video_id) => player.allow_video(&video_id),
            Command::Help => return writeln!(self.output, "{}", HELP_TEXT),
            Command::Exit => return Ok(()),
            Command::Unrecognized(_) => return writeln!(self.output, "{}", INVALID_COMMAND),
        };
        self.print(outcome)
    }

    /// Lists search results and plays the one the user picks, if any.
    fn offer_results(&mut self, results: SearchResults) -> io::Result<()> {
        writeln!(self.output, "{}", results)?;
        if results.is_empty() {
            return Ok(());
        }

        writeln!(self.output, "{}", SEARCH_CHOICE_PROMPT)?;
        self.output.flush()?;
        let selection = self
            .read_line()?
            .and_then(|answer| answer.trim().parse::<usize>().ok());

        match self.player.play_search_result(&results, selection) {
            Some(outcome) => self.print(outcome),
            None => Ok(()),
        }
    }

    fn print(&mut self, outcome: Outcome) -> io::Result<()> {
        match outcome {
            Ok(events) => {
                for event in events {
                    writeln!(self.output, "{}", event)?;
                }
                Ok(())
            }
            Err(rejection) => writeln!(self.output, "{}", rejection),
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
