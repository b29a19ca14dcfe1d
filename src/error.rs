/// Errors raised while setting up a carousel.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CarouselError {
    /// The carousel was given input it cannot run with; nothing was scheduled.
    #[error("configuration error: {0}")]
    Configuration(String),
}
