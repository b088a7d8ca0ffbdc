use thiserror::Error;

use crate::model::entity::{Id, Orientation};

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid orientation '{0}', expected 'H' or 'V'")]
    InvalidOrientation(String),

    #[error("photo {id}: invalid tag count '{token}'")]
    InvalidTagCount { id: Id, token: String },

    #[error("photo {id}: declared {declared} tags but found {found} distinct")]
    TagCountMismatch { id: Id, declared: usize, found: usize },

    #[error("photo {id} is {found}, slide needs {expected}")]
    OrientationMismatch {
        id: Id,
        expected: Orientation,
        found: Orientation,
    },

    #[error("photo {0} cannot be paired with itself")]
    DuplicatePhoto(Id),

    #[error("line {line}: invalid slide '{content}'")]
    InvalidSlideLine { line: usize, content: String },

    #[error("unknown photo {0}")]
    UnknownPhoto(Id),

    #[error("photo {0} is used by more than one slide")]
    PhotoReused(Id),

    #[error("declared {declared} slides but found {found}")]
    SlideCountMismatch { declared: usize, found: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
