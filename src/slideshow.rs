use std::fmt;
use std::fs;
use std::path::Path;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::error::Result;
use crate::model::score::Score;
use crate::model::slide::Slide;

/// Ordered slides plus the running total of their transition scores.
///
/// Slides only ever enter through [`Slideshow::append`], which adds the score
/// of the new transition before pushing, so `score` always equals the sum over
/// adjacent pairs.
#[derive(Debug, Clone, Default)]
pub struct Slideshow {
    slides: Vec<Slide>,
    score: Score,
}

impl Slideshow {
    pub fn new() -> Slideshow {
        Slideshow::default()
    }

    pub fn from_slides(slides: impl IntoIterator<Item = Slide>) -> Slideshow {
        let mut slideshow = Slideshow::new();
        for slide in slides {
            slideshow.append(slide);
        }
        slideshow
    }

    pub fn append(&mut self, slide: Slide) {
        if let Some(last) = self.slides.last() {
            let diff = last.score(&slide);
            trace!(slide = %slide, diff, "append");
            self.score += diff;
        }
        self.slides.push(slide);
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    /// Rescans every adjacent pair; independent of the cached total.
    pub fn transition_scores(&self) -> impl Iterator<Item = Score> + '_ {
        self.slides.iter().tuple_windows().map(|(a, b)| a.score(b))
    }

    pub fn serialize(&self) -> String {
        self.to_string()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.serialize())?;
        debug!("Saved {} slides (score {}) to {:?}", self.len(), self.score, path);
        Ok(())
    }
}

impl fmt::Display for Slideshow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.slides.len())?;
        writeln!(f, "{}", self.slides.iter().join("\n"))
    }
}

impl FromIterator<Slide> for Slideshow {
    fn from_iter<I: IntoIterator<Item = Slide>>(iter: I) -> Self {
        Slideshow::from_slides(iter)
    }
}

impl Extend<Slide> for Slideshow {
    fn extend<I: IntoIterator<Item = Slide>>(&mut self, iter: I) {
        for slide in iter {
            self.append(slide);
        }
    }
}

impl<'a> IntoIterator for &'a Slideshow {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}
