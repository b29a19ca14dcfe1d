use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use banner_carousel::constants::FPS;
use banner_carousel::{Banner, Carousel, Page};

mod cli;
mod renderer;
mod texture_loader;

use crate::cli::Args;
use crate::renderer::BannerRenderer;
use crate::texture_loader::load_sorted_image_paths;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "banner_carousel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // --- Image Locations ---
    let (root, locations) = match &args.dir {
        Some(dir) => {
            let paths = load_sorted_image_paths(dir)
                .with_context(|| format!("loading images from {}", dir.display()))?;
            // Locations are file names, resolved against the listed directory
            let locations = paths
                .iter()
                .filter_map(|p| p.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .collect::<Vec<_>>();
            (dir.clone(), locations)
        }
        None => (args.root.clone(), args.listed_images()),
    };

    let mut carousel = Carousel::initialize(
        locations,
        args.target.clone(),
        Duration::from_millis(args.period_ms),
    )
    .context("starting carousel")?;
    info!(
        images = carousel.sequence().len(),
        period_ms = args.period_ms,
        target_id = %carousel.target_id(),
        "carousel running"
    );

    // --- Page with the banner showing the first image ---
    let mut page = Page::new();
    page.insert(args.target.clone(), Banner::with_src(carousel.current_location()));
    let mut detached: Option<Banner> = None;

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Banner Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut renderer = BannerRenderer::new(root);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time().max(0.0));

        if rl.is_key_pressed(KeyboardKey::KEY_S) && carousel.is_running() {
            carousel.stop();
            info!(location = %carousel.current_location(), "carousel stopped");
        }

        // Detach / re-attach the banner element
        if rl.is_key_pressed(KeyboardKey::KEY_H) {
            match page.remove(&args.target) {
                Some(banner) => {
                    info!(target_id = %args.target, "banner removed from page");
                    detached = Some(banner);
                }
                None => {
                    if let Some(banner) = detached.take() {
                        info!(target_id = %args.target, "banner restored to page");
                        page.insert(args.target.clone(), banner);
                    }
                }
            }
        }

        carousel.update(dt, &mut page);

        if let Some(src) = page.get(&args.target).and_then(Banner::src) {
            renderer.prepare(&mut rl, &thread, src);
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        renderer.draw(&mut d, page.get(&args.target));

        let status = match carousel.next_tick_in() {
            Some(left) => format!(
                "{}/{}  next in {:.1}s of {:.1}s  [S] stop  [H] hide",
                carousel.cursor() + 1,
                carousel.sequence().len(),
                left.as_secs_f32(),
                carousel.period().as_secs_f32()
            ),
            None => format!(
                "{}/{}  stopped  [H] hide",
                carousel.cursor() + 1,
                carousel.sequence().len()
            ),
        };
        d.draw_text(&status, 10, 10, 16, Color::LIGHTGRAY);
    }

    Ok(())
}
