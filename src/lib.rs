//! Timed banner carousel: cycles a display target through a fixed list of
//! image locations, one step per period.

pub mod carousel;
pub mod constants;
pub mod error;
pub mod interval;
pub mod page;
pub mod target;

pub use carousel::{Carousel, TickOutcome};
pub use error::CarouselError;
pub use interval::Interval;
pub use page::{Banner, Page};
pub use target::{DisplayTarget, TargetLookup};
