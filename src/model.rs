pub mod entity {
    use std::collections::HashSet;
    use std::fmt;
    use std::str::FromStr;

    use crate::error::Error;

    pub type Id = usize;
    pub type Tag = String;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Orientation {
        Horizontal,
        Vertical,
    }

    impl FromStr for Orientation {
        type Err = Error;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "H" => Ok(Orientation::Horizontal),
                "V" => Ok(Orientation::Vertical),
                other => Err(Error::InvalidOrientation(other.to_string())),
            }
        }
    }

    impl fmt::Display for Orientation {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Orientation::Horizontal => write!(f, "H"),
                Orientation::Vertical => write!(f, "V"),
            }
        }
    }

    /// A photograph from the input collection. Immutable once built; slides
    /// share it behind an `Arc`.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Photo {
        id: Id,
        orientation: Orientation,
        tags: HashSet<Tag>,
    }

    impl Photo {
        pub fn new(id: Id, orientation: Orientation, tags: HashSet<Tag>) -> Photo {
            Photo { id, orientation, tags }
        }

        pub fn id(&self) -> Id {
            self.id
        }

        pub fn orientation(&self) -> Orientation {
            self.orientation
        }

        pub fn tags(&self) -> &HashSet<Tag> {
            &self.tags
        }
    }

    impl fmt::Display for Photo {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.id)
        }
    }
}

pub mod score {
    use std::collections::HashSet;

    use super::entity::Tag;

    pub type Score = usize;

    /// Interest of a transition between two tag sets: the smallest of the
    /// shared tags, the tags only in `first`, and the tags only in `second`.
    pub fn score_tags(first: &HashSet<Tag>, second: &HashSet<Tag>) -> Score {
        let common = first.intersection(second).count();
        let first_only = first.len() - common;
        let second_only = second.len() - common;
        common.min(first_only).min(second_only)
    }
}

pub mod slide {
    use std::collections::HashSet;
    use std::fmt;
    use std::hash::{Hash, Hasher};
    use std::sync::Arc;

    use itertools::Either;

    use super::entity::{Id, Orientation, Photo, Tag};
    use super::score::{score_tags, Score};
    use crate::error::{Error, Result};

    fn require(photo: &Photo, expected: Orientation) -> Result<()> {
        if photo.orientation() == expected {
            Ok(())
        } else {
            Err(Error::OrientationMismatch {
                id: photo.id(),
                expected,
                found: photo.orientation(),
            })
        }
    }

    #[derive(Debug, Clone)]
    pub struct HorizontalSlide {
        photo: Arc<Photo>,
    }

    impl HorizontalSlide {
        pub fn new(photo: Arc<Photo>) -> Result<HorizontalSlide> {
            require(&photo, Orientation::Horizontal)?;
            Ok(HorizontalSlide { photo })
        }

        pub fn photo(&self) -> &Photo {
            &self.photo
        }

        pub fn tags(&self) -> &HashSet<Tag> {
            self.photo.tags()
        }
    }

    impl PartialEq for HorizontalSlide {
        fn eq(&self, other: &Self) -> bool {
            self.photo.id() == other.photo.id()
        }
    }

    impl Eq for HorizontalSlide {}

    impl Hash for HorizontalSlide {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.photo.id().hash(state);
        }
    }

    impl fmt::Display for HorizontalSlide {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.photo)
        }
    }

    /// Two vertical photos shown side by side. `first` and `second` keep their
    /// construction order for output, but identity ignores it.
    #[derive(Debug, Clone)]
    pub struct VerticalSlide {
        first: Arc<Photo>,
        second: Arc<Photo>,
        tags: HashSet<Tag>,
    }

    impl VerticalSlide {
        pub fn new(first: Arc<Photo>, second: Arc<Photo>) -> Result<VerticalSlide> {
            require(&first, Orientation::Vertical)?;
            require(&second, Orientation::Vertical)?;
            if first.id() == second.id() {
                return Err(Error::DuplicatePhoto(first.id()));
            }
            let tags = first.tags().union(second.tags()).cloned().collect();
            Ok(VerticalSlide { first, second, tags })
        }

        pub fn first(&self) -> &Photo {
            &self.first
        }

        pub fn second(&self) -> &Photo {
            &self.second
        }

        pub fn tags(&self) -> &HashSet<Tag> {
            &self.tags
        }

        fn key(&self) -> (Id, Id) {
            let (a, b) = (self.first.id(), self.second.id());
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        }
    }

    impl PartialEq for VerticalSlide {
        fn eq(&self, other: &Self) -> bool {
            self.key() == other.key()
        }
    }

    impl Eq for VerticalSlide {}

    impl Hash for VerticalSlide {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.key().hash(state);
        }
    }

    impl fmt::Display for VerticalSlide {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} {}", self.first, self.second)
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub enum Slide {
        Horizontal(HorizontalSlide),
        Vertical(VerticalSlide),
    }

    impl Slide {
        pub fn horizontal(photo: Arc<Photo>) -> Result<Slide> {
            HorizontalSlide::new(photo).map(Slide::Horizontal)
        }

        pub fn vertical(first: Arc<Photo>, second: Arc<Photo>) -> Result<Slide> {
            VerticalSlide::new(first, second).map(Slide::Vertical)
        }

        pub fn tags(&self) -> &HashSet<Tag> {
            match self {
                Slide::Horizontal(slide) => slide.tags(),
                Slide::Vertical(slide) => slide.tags(),
            }
        }

        pub fn score(&self, other: &Slide) -> Score {
            score_tags(self.tags(), other.tags())
        }

        /// Photo ids in construction order.
        pub fn photo_ids(&self) -> impl Iterator<Item = Id> {
            match self {
                Slide::Horizontal(slide) => Either::Left(std::iter::once(slide.photo.id())),
                Slide::Vertical(slide) => {
                    Either::Right([slide.first.id(), slide.second.id()].into_iter())
                }
            }
        }
    }

    impl From<HorizontalSlide> for Slide {
        fn from(slide: HorizontalSlide) -> Self {
            Slide::Horizontal(slide)
        }
    }

    impl From<VerticalSlide> for Slide {
        fn from(slide: VerticalSlide) -> Self {
            Slide::Vertical(slide)
        }
    }

    impl fmt::Display for Slide {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Slide::Horizontal(slide) => fmt::Display::fmt(slide, f),
                Slide::Vertical(slide) => fmt::Display::fmt(slide, f),
            }
        }
    }
}
