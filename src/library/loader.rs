use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::errors::CatalogError;

use super::models::Video;

pub const FIELD_DELIMITER: char = '|';
pub const TAG_DELIMITER: char = ',';

pub fn load_catalog(path: &Path) -> Result<Vec<Video>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&content)
}

/// Parses `title | id | tag,tag` records, one per line. Blank lines are
/// skipped; any other line without exactly three fields is fatal.
pub fn parse_catalog(content: &str) -> Result<Vec<Video>, CatalogError> {
    let mut seen = HashSet::new();
    let mut videos = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = raw.split(FIELD_DELIMITER).map(str::trim).collect();
        let [title, id, tags] = fields[..] else {
            return Err(CatalogError::Malformed {
                line,
                found: fields.len(),
            });
        };

        if !seen.insert(id.to_string()) {
            return Err(CatalogError::DuplicateId {
                id: id.to_string(),
                line,
            });
        }

        videos.push(Video::new(title, id, parse_tags(tags)));
    }

    Ok(videos)
}

fn parse_tags(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }
    field
        .split(TAG_DELIMITER)
        .map(|tag| tag.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_trims_fields_and_tags() {
        let videos =
            parse_catalog("  Amazing Cats | amazing_cats_video_id |  #cat , #animal \n").unwrap();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title(), "Amazing Cats");
        assert_eq!(videos[0].id(), "amazing_cats_video_id");
        assert_eq!(videos[0].tags(), ["#cat", "#animal"]);
    }

    #[test]
    fn test_parse_empty_tags() {
        let videos = parse_catalog("Video about nothing | nothing_video_id |").unwrap();
        assert!(videos[0].tags().is_empty());
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let content = "A | a_id | x\n\n   \nB | b_id | y\n";
        let videos = parse_catalog(content).unwrap();
        assert_eq!(videos.len(), 2);
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        let content = "A | a_id | x\nB | b_id\n";
        match parse_catalog(content) {
            Err(CatalogError::Malformed { line, found }) => {
                assert_eq!(line, 2);
                assert_eq!(found, 2);
            }
            other => panic!("expected malformed error, got {:?}", other),
        }

        assert!(matches!(
            parse_catalog("A | a_id | x | extra"),
            Err(CatalogError::Malformed { line: 1, found: 4 })
        ));
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let content = "A | same_id | x\nB | same_id | y\n";
        assert!(matches!(
            parse_catalog(content),
            Err(CatalogError::DuplicateId { line: 2, .. })
        ));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Funny Dogs | funny_dogs_video_id | #dog , #animal").unwrap();

        let videos = load_catalog(file.path()).unwrap();
        assert_eq!(videos[0].title(), "Funny Dogs");
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_catalog(&dir.path().join("videos.txt"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
