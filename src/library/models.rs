use crate::errors::FlagError;

/// Moderation state of a video.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlagState {
    #[default]
    Unflagged,
    Flagged(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    title: String,
    id: String,
    tags: Vec<String>,
    flag: FlagState,
}

impl Video {
    pub fn new(title: impl Into<String>, id: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
            tags,
            flag: FlagState::Unflagged,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn flag_state(&self) -> &FlagState {
        &self.flag
    }

    pub fn is_flagged(&self) -> bool {
        matches!(self.flag, FlagState::Flagged(_))
    }

    pub fn flag_reason(&self) -> Option<&str> {
        match &self.flag {
            FlagState::Flagged(reason) => Some(reason),
            FlagState::Unflagged => None,
        }
    }

    pub fn flag(&mut self, reason: impl Into<String>) -> Result<(), FlagError> {
        if self.is_flagged() {
            return Err(FlagError::AlreadyFlagged);
        }
        self.flag = FlagState::Flagged(reason.into());
        Ok(())
    }

    pub fn unflag(&mut self) -> Result<(), FlagError> {
        if !self.is_flagged() {
            return Err(FlagError::NotFlagged);
        }
        self.flag = FlagState::Unflagged;
        Ok(())
    }

    /// Fails if the video is flagged. Checked before playing a video or
    /// adding it to a playlist.
    pub fn check_allowed(&self) -> Result<(), FlagError> {
        match &self.flag {
            FlagState::Flagged(reason) => Err(FlagError::Flagged(reason.clone())),
            FlagState::Unflagged => Ok(()),
        }
    }
}

// Amazing Cats (amazing_cats_video_id) [#cat #animal] - FLAGGED (reason: dont_like_cats)
impl std::fmt::Display for Video {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))?;
        if let FlagState::Flagged(reason) = &self.flag {
            write!(f, " - FLAGGED (reason: {})", reason)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats() -> Video {
        Video::new(
            "Amazing Cats",
            "amazing_cats_video_id",
            vec!["#cat".to_string(), "#animal".to_string()],
        )
    }

    #[test]
    fn test_display() {
        assert_eq!(
            cats().to_string(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );

        let untagged = Video::new("Video about nothing", "nothing_video_id", Vec::new());
        assert_eq!(
            untagged.to_string(),
            "Video about nothing (nothing_video_id) []"
        );
    }

    #[test]
    fn test_display_flagged() {
        let mut video = cats();
        video.flag("dont_like_cats").unwrap();
        assert_eq!(
            video.to_string(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal] - FLAGGED (reason: dont_like_cats)"
        );
    }

    #[test]
    fn test_flag_unflag_round_trip() {
        let original = cats();
        let mut video = original.clone();

        assert_eq!(video.flag_state(), &FlagState::Unflagged);

        video.flag("spam").unwrap();
        assert!(video.is_flagged());
        assert_eq!(video.flag_reason(), Some("spam"));
        assert_eq!(video.flag_state(), &FlagState::Flagged("spam".to_string()));

        video.unflag().unwrap();
        assert_eq!(video, original);
        assert_eq!(video.unflag(), Err(FlagError::NotFlagged));
    }

    #[test]
    fn test_double_flag_rejected() {
        let mut video = cats();
        video.flag("first").unwrap();
        assert_eq!(video.flag("second"), Err(FlagError::AlreadyFlagged));
        assert_eq!(video.flag_reason(), Some("first"));
    }

    #[test]
    fn test_check_allowed() {
        let mut video = cats();
        assert!(video.check_allowed().is_ok());

        video.flag("bad").unwrap();
        let err = video.check_allowed().unwrap_err();
        assert_eq!(err.to_string(), "Video is currently flagged (reason: bad)");
    }
}
