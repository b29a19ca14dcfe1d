use std::path::PathBuf;

use clap::Parser;

use banner_carousel::constants::{
    DEFAULT_IMAGES, DEFAULT_PERIOD_MS, DEFAULT_TARGET_ID, WINDOW_HEIGHT, WINDOW_WIDTH,
};

#[derive(Parser, Debug)]
#[command(name = "banner-carousel", version, about = "Cycle a banner through a list of images")]
pub struct Args {
    /// Image locations, resolved against --root
    #[arg(conflicts_with = "dir")]
    pub images: Vec<String>,

    /// Use every image file in this directory, sorted by name
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Directory that image locations are resolved against
    #[arg(long, default_value = ".", conflicts_with = "dir")]
    pub root: PathBuf,

    /// Milliseconds between banner changes
    #[arg(long, default_value_t = DEFAULT_PERIOD_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub period_ms: u64,

    /// Identifier of the banner element to update
    #[arg(long, default_value = DEFAULT_TARGET_ID)]
    pub target: String,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,
}

impl Args {
    /// Locations given on the command line, or the built-in banner pair.
    pub fn listed_images(&self) -> Vec<String> {
        if self.images.is_empty() {
            DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect()
        } else {
            self.images.clone()
        }
    }
}
