// src/renderer/tests.rs

use crate::buffer::PixelBuffer;
use crate::color::{Argb, Rgb};
use crate::config::RendererOptions;
use crate::display::{HeadlessSurface, SurfaceRegistry};
use crate::renderer::{RendererError, StripRenderer};
use test_log::test; // For logging within tests

const BG: [u8; 4] = [0, 0, 0, 255];
const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

fn registry_with(id: &str) -> (SurfaceRegistry, HeadlessSurface) {
    let surface = HeadlessSurface::new();
    let capture = surface.clone();
    let mut surfaces = SurfaceRegistry::new();
    surfaces.register(id, Box::new(surface));
    (surfaces, capture)
}

fn options(pixel_size: usize, led_spacing: usize) -> RendererOptions {
    RendererOptions {
        pixel_size,
        led_spacing,
        ..RendererOptions::default()
    }
}

/// A 3x1 strip with 2px blocks and 1px gaps, the concrete layout used
/// throughout: output is 3*3-1 = 8 pixels wide and 2 pixels tall, with
/// blocks at x offsets 0, 3 and 6.
fn small_strip() -> (StripRenderer, HeadlessSurface) {
    let (mut surfaces, capture) = registry_with("strip");
    let renderer =
        StripRenderer::new(&mut surfaces, "strip", 3, 1, options(2, 1)).expect("construction");
    (renderer, capture)
}

fn assert_block(buffer: &PixelBuffer, x0: usize, y0: usize, size: usize, rgba: [u8; 4]) {
    for dy in 0..size {
        for dx in 0..size {
            assert_eq!(
                buffer.get(x0 + dx, y0 + dy),
                Some(rgba),
                "sample at ({}, {})",
                x0 + dx,
                y0 + dy
            );
        }
    }
}

fn assert_column(buffer: &PixelBuffer, x: usize, rgba: [u8; 4]) {
    for y in 0..buffer.height() {
        assert_eq!(buffer.get(x, y), Some(rgba), "sample at ({}, {})", x, y);
    }
}

// --- Construction and buffer sizing ---

#[test]
fn output_dimensions_follow_configuration() {
    let (renderer, _) = small_strip();
    assert_eq!(renderer.buffer().width(), 8);
    assert_eq!(renderer.buffer().height(), 2);
}

#[test]
fn construction_presents_an_initial_clear() {
    let (_, capture) = small_strip();
    assert_eq!(capture.present_count(), 1);
    let frame = capture.last_frame().expect("initial frame");
    assert_column(&frame, 0, BG);
    assert_column(&frame, 7, BG);
}

#[test]
fn construction_fails_when_surface_is_missing() {
    let mut surfaces = SurfaceRegistry::new();
    let err = StripRenderer::new(&mut surfaces, "nope", 3, 1, options(2, 1))
        .expect_err("no surface registered");
    assert_eq!(
        err.downcast_ref::<RendererError>(),
        Some(&RendererError::SurfaceNotFound("nope".to_string()))
    );
}

#[test]
fn construction_takes_surface_ownership() {
    let (mut surfaces, _) = registry_with("strip");
    let _renderer =
        StripRenderer::new(&mut surfaces, "strip", 3, 1, options(2, 1)).expect("construction");
    assert!(surfaces.take("strip").is_none());
}

#[test]
fn debug_formatting_summarizes_the_configuration() {
    let (renderer, _) = small_strip();
    let formatted = format!("{:?}", renderer);
    assert!(formatted.contains("StripRenderer"), "got: {}", formatted);
    assert!(formatted.contains("pixel_size: 2"), "got: {}", formatted);
    assert!(formatted.contains("output_width: 8"), "got: {}", formatted);
}

#[test]
fn resize_reallocates_and_clears() {
    let (mut renderer, capture) = small_strip();
    renderer.render_frame("FFFF0000").unwrap();

    renderer.resize(4, 2).unwrap();
    assert_eq!(renderer.buffer().width(), 11);
    assert_eq!(renderer.buffer().height(), 5);
    assert_eq!(renderer.led_count(), 8);

    let frame = capture.last_frame().unwrap();
    for x in 0..frame.width() {
        assert_column(&frame, x, BG);
    }
}

#[test]
fn resize_with_identical_arguments_still_presents_a_clear() {
    let (mut renderer, capture) = small_strip();
    renderer.resize(3, 1).unwrap();
    renderer.resize(3, 1).unwrap();
    assert_eq!(renderer.buffer().width(), 8);
    // Initial clear plus one per resize.
    assert_eq!(capture.present_count(), 3);
}

// --- clear ---

#[test]
fn clear_fills_background_at_full_opacity() {
    let (mut surfaces, _) = registry_with("strip");
    let mut renderer = StripRenderer::new(
        &mut surfaces,
        "strip",
        3,
        1,
        RendererOptions {
            background_color: "#336699".to_string(),
            ..options(2, 1)
        },
    )
    .unwrap();

    renderer.clear().unwrap();
    let buffer = renderer.buffer();
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            assert_eq!(buffer.get(x, y), Some([0x33, 0x66, 0x99, 255]));
        }
    }
}

// --- render_frame ---

#[test]
fn renders_red_green_blue_blocks_at_expected_offsets() {
    let (mut renderer, capture) = small_strip();
    renderer.render_frame("FFFF0000FF00FF00FF0000FF").unwrap();

    let frame = capture.last_frame().unwrap();
    assert_block(&frame, 0, 0, 2, RED);
    assert_block(&frame, 3, 0, 2, GREEN);
    assert_block(&frame, 6, 0, 2, BLUE);
    // Gap columns stay at the background.
    assert_column(&frame, 2, BG);
    assert_column(&frame, 5, BG);
}

#[test]
fn presents_exactly_once_per_frame() {
    let (mut renderer, capture) = small_strip();
    renderer.render_frame("FFFF0000FF00FF00FF0000FF").unwrap();
    // One present from construction, one for the whole frame.
    assert_eq!(capture.present_count(), 2);
}

#[test]
fn partial_frame_leaves_remaining_leds_at_background() {
    let (mut renderer, _) = small_strip();
    renderer.render_frame("FFFF0000").unwrap();

    let buffer = renderer.buffer();
    assert_block(buffer, 0, 0, 2, RED);
    for x in 3..8 {
        assert_column(buffer, x, BG);
    }
}

#[test]
fn trailing_partial_group_renders_fewer_leds() {
    let (mut renderer, _) = small_strip();
    // 8*2 + 3 characters: exactly two LEDs painted.
    renderer.render_frame("FFFF0000FF00FF00FF0").unwrap();

    let buffer = renderer.buffer();
    assert_block(buffer, 0, 0, 2, RED);
    assert_block(buffer, 3, 0, 2, GREEN);
    assert_column(buffer, 6, BG);
    assert_column(buffer, 7, BG);
}

#[test]
fn malformed_group_does_not_shift_later_leds() {
    let (mut renderer, _) = small_strip();
    renderer.render_frame("FFFF0000ZZZZZZZZFF0000FF").unwrap();

    let buffer = renderer.buffer();
    assert_block(buffer, 0, 0, 2, RED);
    assert_column(buffer, 3, BG);
    assert_column(buffer, 4, BG);
    assert_block(buffer, 6, 0, 2, BLUE);
}

#[test]
fn alpha_channel_is_carried_into_samples() {
    let (mut renderer, _) = small_strip();
    renderer.render_frame("80FF0000").unwrap();
    assert_block(renderer.buffer(), 0, 0, 2, [255, 0, 0, 0x80]);
}

#[test]
fn rows_past_configured_height_clip_silently() {
    let (mut surfaces, capture) = registry_with("strip");
    let mut renderer = StripRenderer::new(&mut surfaces, "strip", 2, 1, options(2, 1)).unwrap();

    // Four LEDs on a 2x1 grid: the second row lands below the buffer.
    renderer
        .render_frame("FFFF0000FF00FF00FF0000FFFFFFFFFF")
        .unwrap();

    let frame = capture.last_frame().unwrap();
    assert_eq!((frame.width(), frame.height()), (5, 2));
    assert_block(&frame, 0, 0, 2, RED);
    assert_block(&frame, 3, 0, 2, GREEN);
}

#[test]
fn second_row_is_placed_below_the_first() {
    let (mut surfaces, _) = registry_with("panel");
    let mut renderer = StripRenderer::new(&mut surfaces, "panel", 2, 2, options(2, 1)).unwrap();
    assert_eq!(renderer.buffer().height(), 5);

    renderer
        .render_frame("FFFF0000FF00FF00FF0000FFFFFFFFFF")
        .unwrap();

    let buffer = renderer.buffer();
    assert_block(buffer, 0, 0, 2, RED);
    assert_block(buffer, 3, 0, 2, GREEN);
    assert_block(buffer, 0, 3, 2, BLUE);
    assert_block(buffer, 3, 3, 2, [255, 255, 255, 255]);
}

// --- set_single_pixel ---

#[test]
fn set_single_pixel_paints_without_clearing() {
    let (mut renderer, capture) = small_strip();
    renderer.render_frame("FFFF0000FFFF0000FFFF0000").unwrap();

    renderer.set_single_pixel(1, Argb(0xFF00FF00)).unwrap();

    let buffer = renderer.buffer();
    assert_block(buffer, 0, 0, 2, RED);
    assert_block(buffer, 3, 0, 2, GREEN);
    assert_block(buffer, 6, 0, 2, RED);
    assert_eq!(capture.present_count(), 3);
}

// --- set_reversed ---

#[test]
fn reversed_places_led_zero_at_the_rightmost_column() {
    let (mut renderer, _) = small_strip();
    renderer.set_reversed(true).unwrap();
    renderer.render_frame("FFFF0000").unwrap();

    let buffer = renderer.buffer();
    assert_block(buffer, 6, 0, 2, RED);
    assert_column(buffer, 0, BG);
    assert_column(buffer, 1, BG);
}

#[test]
fn set_reversed_clears_the_previous_frame() {
    let (mut renderer, _) = small_strip();
    renderer.render_frame("FFFF0000FF00FF00FF0000FF").unwrap();
    renderer.set_reversed(true).unwrap();

    let buffer = renderer.buffer();
    for x in 0..buffer.width() {
        assert_column(buffer, x, BG);
    }
}

// --- set_pixel_size ---

#[test]
fn set_pixel_size_rebuilds_the_buffer() {
    let (mut renderer, _) = small_strip();
    renderer.set_pixel_size(3).unwrap();
    assert_eq!(renderer.pixel_size(), 3);
    assert_eq!(renderer.buffer().width(), 11);
    assert_eq!(renderer.buffer().height(), 3);
}

#[test]
fn set_pixel_size_zero_is_rejected_without_mutation() {
    let (mut renderer, capture) = small_strip();
    let presents_before = capture.present_count();

    let err = renderer.set_pixel_size(0).expect_err("zero pixel size");
    assert_eq!(
        err.downcast_ref::<RendererError>(),
        Some(&RendererError::InvalidDimension {
            name: "pixel size",
            value: 0,
        })
    );

    assert_eq!(renderer.pixel_size(), 2);
    assert_eq!(renderer.buffer().width(), 8);
    assert_eq!(capture.present_count(), presents_before);
}

// --- queries ---

#[test]
fn led_count_is_width_times_height() {
    let (mut renderer, _) = small_strip();
    assert_eq!(renderer.led_count(), 3);
    renderer.resize(4, 2).unwrap();
    assert_eq!(renderer.led_count(), 8);
}

#[test]
fn rendering_is_deterministic_for_identical_input() {
    let (mut renderer, _) = small_strip();
    renderer.render_frame("FFFF0000FF00FF00").unwrap();
    let first = renderer.buffer().clone();
    renderer.render_frame("FFFF0000FF00FF00").unwrap();
    assert_eq!(renderer.buffer(), &first);
}

#[test]
fn background_falls_back_to_dark_grey_on_bad_color() {
    let (mut surfaces, _) = registry_with("strip");
    let renderer = StripRenderer::new(
        &mut surfaces,
        "strip",
        1,
        1,
        RendererOptions {
            background_color: "not-a-color".to_string(),
            ..options(2, 1)
        },
    )
    .unwrap();
    assert_eq!(renderer.background(), Rgb { r: 26, g: 26, b: 26 });
    assert_eq!(renderer.buffer().get(0, 0), Some([26, 26, 26, 255]));
}
