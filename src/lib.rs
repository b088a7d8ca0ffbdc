//! Photo slideshow model and transition scoring.
//!
//! Photos are parsed from the puzzle's input format, grouped into slides by an
//! external assembler, and appended to a [`Slideshow`] that keeps its total
//! transition score up to date on every append.

pub mod error;
pub mod model;
pub mod parse;
pub mod slideshow;

pub use error::{Error, Result};
pub use model::entity::{Id, Orientation, Photo, Tag};
pub use model::score::{score_tags, Score};
pub use model::slide::{HorizontalSlide, Slide, VerticalSlide};
pub use parse::{load_photos, load_slideshow, parse_photos, parse_slideshow};
pub use slideshow::Slideshow;
