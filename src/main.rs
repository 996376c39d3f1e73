// src/main.rs

use ledview::{
    color::Argb, HeadlessSurface, RendererHost, RendererOptions, SurfaceRegistry,
};

use anyhow::Context;
use log::info;

/// Strip length used by the demo.
const DEMO_LED_COUNT: usize = 8;

/// Main entry point for the `ledview` demo driver.
///
/// Renders a few frames into a headless surface so the component can be
/// exercised, and its logging observed, without any platform windowing
/// glue. Real hosts register their own `Surface` implementation and feed
/// hex frames from whatever engine they embed.
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting ledview demo...");

    let surface = HeadlessSurface::new();
    let capture = surface.clone();

    let mut surfaces = SurfaceRegistry::new();
    surfaces.register("demo", Box::new(surface));

    let mut host = RendererHost::new();
    host.init(
        &mut surfaces,
        "demo",
        DEMO_LED_COUNT,
        1,
        RendererOptions::default(),
    )
    .context("failed to initialize LED renderer")?;

    // One full frame: a red-to-blue ramp across the strip.
    let mut hex = String::new();
    for i in 0..DEMO_LED_COUNT {
        let b = (i * 255 / (DEMO_LED_COUNT - 1)) as u8;
        let color = Argb::from_channels(255, 255 - b, 0, b);
        hex.push_str(&format!("{:08X}", color.0));
    }
    host.render(&hex);

    // A short frame: one white LED, the rest of the strip at background.
    host.render("FFFFFFFF");

    // Flip direction and poke a single LED through the debug entry point.
    if let Some(renderer) = host.renderer_mut() {
        renderer.set_reversed(true)?;
        renderer.set_single_pixel(0, Argb(0xFFFF00FF))?;
        info!("Strip has {} LED(s), reversed", renderer.led_count());
    }

    // Shrink to half the LEDs and light them green.
    host.resize(DEMO_LED_COUNT / 2, None);
    host.render(&"FF00FF00".repeat(DEMO_LED_COUNT / 2));

    if let Some(frame) = capture.last_frame() {
        info!(
            "Presented {} frame(s); last output {}x{} pixels",
            capture.present_count(),
            frame.width(),
            frame.height()
        );
    }

    Ok(())
}
