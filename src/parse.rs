//! Text formats: the photo collection read as input and the slideshow
//! written as output.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::entity::{Id, Orientation, Photo, Tag};
use crate::model::slide::Slide;
use crate::slideshow::Slideshow;

impl Photo {
    /// Parses `orientation tag_count tag_1 ... tag_n`.
    pub fn from_line(id: Id, line: &str) -> Result<Photo> {
        let mut tokens = line.split_whitespace();
        let orientation = tokens.next().unwrap_or_default().parse::<Orientation>()?;
        let declared = match tokens.next() {
            Some(token) => token.parse::<usize>().map_err(|_| Error::InvalidTagCount {
                id,
                token: token.to_string(),
            })?,
            None => {
                return Err(Error::InvalidTagCount {
                    id,
                    token: String::new(),
                })
            }
        };
        let tags: HashSet<Tag> = tokens.map(str::to_string).collect();
        if tags.len() != declared {
            return Err(Error::TagCountMismatch {
                id,
                declared,
                found: tags.len(),
            });
        }
        Ok(Photo::new(id, orientation, tags))
    }
}

/// Drops the leading count line and the trailing empty line, then parses each
/// remaining line as a photo whose id is its position.
pub fn parse_photos(content: &str) -> Result<Vec<Arc<Photo>>> {
    let lines: Vec<&str> = content.split('\n').collect();
    let body = match lines.len() {
        0..=2 => &[][..],
        n => &lines[1..n - 1],
    };
    let photos = body
        .iter()
        .enumerate()
        .map(|(id, line)| Photo::from_line(id, line.trim_end_matches('\r')).map(Arc::new))
        .collect::<Result<Vec<_>>>()?;
    debug!("Parsed {} photos", photos.len());
    Ok(photos)
}

pub fn load_photos(path: impl AsRef<Path>) -> Result<Vec<Arc<Photo>>> {
    let path = path.as_ref();
    debug!("Loading photos from {:?}", path);
    parse_photos(&fs::read_to_string(path)?)
}

fn lookup(photos: &[Arc<Photo>], used: &mut HashSet<Id>, id: Id) -> Result<Arc<Photo>> {
    let photo = photos.get(id).ok_or(Error::UnknownPhoto(id))?;
    if !used.insert(id) {
        return Err(Error::PhotoReused(id));
    }
    Ok(Arc::clone(photo))
}

/// Rebuilds a slideshow from its serialized form against the photos it was
/// built from. Every slide goes through the slide constructors and
/// [`Slideshow::append`], so the score is recomputed transition by transition.
pub fn parse_slideshow(content: &str, photos: &[Arc<Photo>]) -> Result<Slideshow> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let declared = match lines.next() {
        Some((line, header)) => header.parse::<usize>().map_err(|_| Error::InvalidSlideLine {
            line,
            content: header.to_string(),
        })?,
        None => return Ok(Slideshow::new()),
    };

    let mut used = HashSet::new();
    let mut slideshow = Slideshow::new();
    for (line, text) in lines {
        let invalid = || Error::InvalidSlideLine {
            line,
            content: text.to_string(),
        };
        let ids = text
            .split_whitespace()
            .map(|token| token.parse::<Id>().map_err(|_| invalid()))
            .collect::<Result<Vec<Id>>>()?;
        let slide = match ids[..] {
            [id] => Slide::horizontal(lookup(photos, &mut used, id)?)?,
            [first, second] => Slide::vertical(
                lookup(photos, &mut used, first)?,
                lookup(photos, &mut used, second)?,
            )?,
            _ => return Err(invalid()),
        };
        slideshow.append(slide);
    }

    if slideshow.len() != declared {
        return Err(Error::SlideCountMismatch {
            declared,
            found: slideshow.len(),
        });
    }
    debug!("Parsed slideshow of {} slides, score {}", slideshow.len(), slideshow.score());
    Ok(slideshow)
}

pub fn load_slideshow(path: impl AsRef<Path>, photos: &[Arc<Photo>]) -> Result<Slideshow> {
    let path = path.as_ref();
    debug!("Loading slideshow from {:?}", path);
    parse_slideshow(&fs::read_to_string(path)?, photos)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "4\nH 3 cat beach sun\nV 2 selfie smile\nV 2 garden selfie\nH 2 garden cat\n";

    #[test]
    fn test_from_line_horizontal() {
        let photo = Photo::from_line(7, "H 3 cat beach sun").unwrap();
        assert_eq!(photo.id(), 7);
        assert_eq!(photo.orientation(), Orientation::Horizontal);
        assert_eq!(photo.tags().len(), 3);
        assert!(photo.tags().contains("beach"));
    }

    #[test]
    fn test_from_line_invalid_orientation() {
        assert!(matches!(
            Photo::from_line(0, "X 1 cat"),
            Err(Error::InvalidOrientation(token)) if token == "X"
        ));
    }

    #[test]
    fn test_from_line_tag_count_mismatch() {
        assert!(matches!(
            Photo::from_line(2, "H 3 cat beach"),
            Err(Error::TagCountMismatch { id: 2, declared: 3, found: 2 })
        ));
    }

    #[test]
    fn test_from_line_duplicate_tags_fail_count() {
        assert!(matches!(
            Photo::from_line(0, "V 2 cat cat"),
            Err(Error::TagCountMismatch { declared: 2, found: 1, .. })
        ));
    }

    #[test]
    fn test_from_line_invalid_tag_count() {
        assert!(matches!(
            Photo::from_line(1, "H two cat beach"),
            Err(Error::InvalidTagCount { id: 1, token }) if token == "two"
        ));
        assert!(matches!(Photo::from_line(1, "H"), Err(Error::InvalidTagCount { .. })));
    }

    #[test]
    fn test_parse_photos_skips_header_and_trailer() {
        let photos = parse_photos(EXAMPLE).unwrap();
        assert_eq!(photos.len(), 4);
        let ids: Vec<Id> = photos.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(photos[1].orientation(), Orientation::Vertical);
    }

    #[test]
    fn test_parse_photos_handles_crlf() {
        let photos = parse_photos("1\r\nH 2 cat sun\r\n").unwrap();
        assert_eq!(photos.len(), 1);
        assert!(photos[0].tags().contains("sun"));
    }

    #[test]
    fn test_parse_photos_empty_input() {
        assert!(parse_photos("").unwrap().is_empty());
        assert!(parse_photos("0\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_photos_fails_whole_file() {
        let result = parse_photos("2\nH 1 cat\nQ 1 dog\n");
        assert!(matches!(result, Err(Error::InvalidOrientation(_))));
    }

    #[test]
    fn test_parse_slideshow() {
        let photos = parse_photos(EXAMPLE).unwrap();
        let slideshow = parse_slideshow("3\n0\n3\n1 2\n", &photos).unwrap();
        assert_eq!(slideshow.len(), 3);
        assert_eq!(slideshow.score(), 2);
        assert_eq!(slideshow.serialize(), "3\n0\n3\n1 2\n");
    }

    #[test]
    fn test_parse_slideshow_unknown_photo() {
        let photos = parse_photos(EXAMPLE).unwrap();
        assert!(matches!(parse_slideshow("1\n9\n", &photos), Err(Error::UnknownPhoto(9))));
    }

    #[test]
    fn test_parse_slideshow_reused_photo() {
        let photos = parse_photos(EXAMPLE).unwrap();
        assert!(matches!(parse_slideshow("2\n0\n0\n", &photos), Err(Error::PhotoReused(0))));
    }

    #[test]
    fn test_parse_slideshow_orientation_mismatch() {
        let photos = parse_photos(EXAMPLE).unwrap();
        assert!(matches!(
            parse_slideshow("1\n1\n", &photos),
            Err(Error::OrientationMismatch { id: 1, .. })
        ));
    }

    #[test]
    fn test_parse_slideshow_count_mismatch() {
        let photos = parse_photos(EXAMPLE).unwrap();
        assert!(matches!(
            parse_slideshow("3\n0\n3\n", &photos),
            Err(Error::SlideCountMismatch { declared: 3, found: 2 })
        ));
    }

    #[test]
    fn test_parse_slideshow_invalid_line() {
        let photos = parse_photos(EXAMPLE).unwrap();
        assert!(matches!(
            parse_slideshow("1\n1 2 3\n", &photos),
            Err(Error::InvalidSlideLine { line: 2, .. })
        ));
        assert!(matches!(
            parse_slideshow("1\nzero\n", &photos),
            Err(Error::InvalidSlideLine { line: 2, .. })
        ));
    }
}
