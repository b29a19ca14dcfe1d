pub const WINDOW_WIDTH: i32 = 960;            // Default window width
pub const WINDOW_HEIGHT: i32 = 540;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const DEFAULT_PERIOD_MS: u64 = 3000;      // Time between banner changes (milliseconds)
pub const DEFAULT_TARGET_ID: &str = "bannerImg";
pub const DEFAULT_IMAGES: [&str; 2] = ["/static/image/banner.png", "/static/image/banner_1.png"];

pub const BANNER_MARGIN: f32 = 0.05;          // Fraction of the window kept free around the banner
