pub mod loader;
pub mod models;

use std::collections::HashMap;
use std::path::Path;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::errors::{CatalogError, LibraryError};
use models::Video;

/// The fixed catalog of videos, keyed by id. Membership never changes after
/// construction; only per-video flag state does.
#[derive(Debug, Default)]
pub struct VideoLibrary {
    videos: HashMap<String, Video>,
}

impl VideoLibrary {
    pub fn new(videos: Vec<Video>) -> Self {
        Self {
            videos: videos
                .into_iter()
                .map(|video| (video.id().to_string(), video))
                .collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let videos = loader::load_catalog(path)?;
        log::info!("Loaded {} videos from {}", videos.len(), path.display());
        Ok(Self::new(videos))
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.videos.contains_key(video_id)
    }

    pub fn get(&self, video_id: &str) -> Option<&Video> {
        self.videos.get(video_id)
    }

    pub fn get_or_fail(&self, video_id: &str) -> Result<&Video, LibraryError> {
        self.get(video_id).ok_or(LibraryError::VideoNotFound)
    }

    pub fn get_mut_or_fail(&mut self, video_id: &str) -> Result<&mut Video, LibraryError> {
        self.videos
            .get_mut(video_id)
            .ok_or(LibraryError::VideoNotFound)
    }

    /// All videos, ordered by their rendered form.
    pub fn all(&self) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.values().collect();
        videos.sort_by_cached_key(|video| video.to_string());
        videos
    }

    pub fn allowed(&self) -> Vec<&Video> {
        self.all()
            .into_iter()
            .filter(|video| !video.is_flagged())
            .collect()
    }

    /// Case-insensitive substring match on the title of allowed videos.
    pub fn search_by_title(&self, term: &str) -> Vec<&Video> {
        let term = term.to_lowercase();
        self.allowed()
            .into_iter()
            .filter(|video| video.title().to_lowercase().contains(&term))
            .collect()
    }

    /// Exact, case-sensitive match against any tag of allowed videos.
    pub fn search_by_tag(&self, tag: &str) -> Vec<&Video> {
        self.allowed()
            .into_iter()
            .filter(|video| video.tags().iter().any(|t| t == tag))
            .collect()
    }

    pub fn random_allowed_id<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.allowed().choose(rng).copied().map(Video::id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn library() -> VideoLibrary {
        let videos = loader::parse_catalog(
            "Funny Dogs | funny_dogs_video_id | #dog , #animal\n\
             Amazing Cats | amazing_cats_video_id | #cat , #animal\n\
             Another Cat Video | another_cat_video_id | #cat , #animal\n\
             Life at Google | life_at_google_video_id | #google , #career\n\
             Video about nothing | nothing_video_id |\n",
        )
        .unwrap();
        VideoLibrary::new(videos)
    }

    fn ids<'a>(videos: &[&'a Video]) -> Vec<&'a str> {
        videos.iter().map(|video| video.id()).collect()
    }

    #[test]
    fn test_lookup() {
        let library = library();
        assert_eq!(library.len(), 5);
        assert!(library.contains("funny_dogs_video_id"));
        assert!(!library.contains("FUNNY_DOGS_VIDEO_ID"));
        assert_eq!(
            library.get_or_fail("does_not_exist").unwrap_err(),
            LibraryError::VideoNotFound
        );
    }

    #[test]
    fn test_all_sorted_by_display() {
        let library = library();
        assert_eq!(
            ids(&library.all()),
            [
                "amazing_cats_video_id",
                "another_cat_video_id",
                "funny_dogs_video_id",
                "life_at_google_video_id",
                "nothing_video_id",
            ]
        );
    }

    #[test]
    fn test_allowed_excludes_exactly_flagged() {
        let mut library = library();
        library
            .get_mut_or_fail("funny_dogs_video_id")
            .unwrap()
            .flag("bad")
            .unwrap();

        let all = library.all();
        let allowed = library.allowed();
        assert_eq!(all.len(), 5);
        assert_eq!(allowed.len(), 4);
        assert!(allowed.iter().all(|video| all.contains(video)));
        assert!(!ids(&allowed).contains(&"funny_dogs_video_id"));
    }

    #[test]
    fn test_search_by_title_case_insensitive() {
        let mut library = library();
        assert_eq!(
            ids(&library.search_by_title("CAT")),
            ["amazing_cats_video_id", "another_cat_video_id"]
        );

        library
            .get_mut_or_fail("another_cat_video_id")
            .unwrap()
            .flag("spam")
            .unwrap();
        assert_eq!(
            ids(&library.search_by_title("cat")),
            ["amazing_cats_video_id"]
        );
        assert!(library.search_by_title("blah").is_empty());
    }

    #[test]
    fn test_search_by_tag_exact() {
        let library = library();
        assert_eq!(
            ids(&library.search_by_tag("#animal")),
            [
                "amazing_cats_video_id",
                "another_cat_video_id",
                "funny_dogs_video_id"
            ]
        );
        assert!(library.search_by_tag("#ANIMAL").is_empty());
        assert!(library.search_by_tag("animal").is_empty());
    }

    #[test]
    fn test_random_allowed_id() {
        let mut library = library();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let id = library.random_allowed_id(&mut rng).unwrap();
            assert!(library.contains(id));
        }

        let all_ids: Vec<String> = library.all().iter().map(|v| v.id().to_string()).collect();
        for id in &all_ids {
            library.get_mut_or_fail(id).unwrap().flag("gone").unwrap();
        }
        assert_eq!(library.random_allowed_id(&mut rng), None);
    }
}
