use std::collections::HashMap;
use std::path::PathBuf;

use raylib::prelude::*;
use tracing::{debug, warn};

use banner_carousel::constants::BANNER_MARGIN;
use banner_carousel::page::Banner;

use crate::texture_loader::{load_texture_with_exif_rotation, resolve_location};

/// Draws a banner element, loading the texture behind its `src` on demand.
pub struct BannerRenderer {
    root: PathBuf,
    // None marks a location that failed to load, so it is not retried every frame
    textures: HashMap<String, Option<Texture2D>>,
}

impl BannerRenderer {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            textures: HashMap::new(),
        }
    }

    /// Makes sure the texture for `location` has been loaded (or has failed once).
    pub fn prepare(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, location: &str) {
        if self.textures.contains_key(location) {
            return;
        }

        let path = resolve_location(&self.root, location);
        let texture = match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => {
                debug!(%location, "texture loaded");
                Some(texture)
            }
            Err(e) => {
                warn!(%location, error = %e, "failed to load banner image");
                None
            }
        };
        self.textures.insert(location.to_string(), texture);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, banner: Option<&Banner>) {
        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;

        let Some(location) = banner.and_then(Banner::src) else {
            return;
        };

        match self.textures.get(location) {
            Some(Some(texture)) => {
                let tex_width = texture.width() as f32;
                let tex_height = texture.height() as f32;

                // Fit inside the window, keeping the margin free
                let scale = ((screen_width * (1.0 - 2.0 * BANNER_MARGIN)) / tex_width)
                    .min((screen_height * (1.0 - 2.0 * BANNER_MARGIN)) / tex_height);
                let scaled_width = tex_width * scale;
                let scaled_height = tex_height * scale;

                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    Rectangle::new(
                        (screen_width - scaled_width) * 0.5,
                        (screen_height - scaled_height) * 0.5,
                        scaled_width,
                        scaled_height,
                    ),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE,
                );
            }
            _ => {
                // Placeholder frame for images that could not be loaded
                let x = (screen_width * BANNER_MARGIN) as i32;
                let y = (screen_height * BANNER_MARGIN) as i32;
                let w = (screen_width * (1.0 - 2.0 * BANNER_MARGIN)) as i32;
                let h = (screen_height * (1.0 - 2.0 * BANNER_MARGIN)) as i32;
                d.draw_rectangle_lines(x, y, w, h, Color::DARKGRAY);
                d.draw_text(location, x + 10, y + 10, 20, Color::GRAY);
            }
        }
    }
}
