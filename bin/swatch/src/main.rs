//! Render a picker for a hex color to `swatch.png`: the saturation/brightness
//! pad, the hue bar with both thumbs, and the preview swatch.
//!
//! Usage: `hsvpick-swatch [HEX] [OUTPUT]`

use hsvpick::{
    hsv_to_rgb, ColorPicker, Component, Components, InputCoordinator, Layout, PagePoint,
    PickerConfig, Render, Rgb, Snapshot, TextColor, MAX_HUE,
};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_circle_mut};
use imageproc::rect::Rect;

const MARGIN: u32 = 10;
const HUE_BAR_WIDTH: u32 = 20;
const PREVIEW_SIZE: u32 = 60;

const THUMB: Rgba<u8> = Rgba([255, 255, 255, 255]);
const THUMB_SHADOW: Rgba<u8> = Rgba([0, 0, 0, 255]);

fn pixel(Components(r, g, b): Components) -> Rgba<u8> {
    let byte = |c: Component| c.round().clamp(0.0, 255.0) as u8;
    Rgba([byte(r), byte(g), byte(b), 255])
}

fn fill(rgb: &Rgb) -> Rgba<u8> {
    let [r, g, b] = rgb.to_bytes();
    Rgba([r, g, b, 255])
}

/// Keeps the last snapshot and draws it on request.
#[derive(Default)]
struct Canvas {
    snapshot: Option<Snapshot>,
}

impl Render for Canvas {
    fn render(&mut self, snapshot: &Snapshot) {
        log::debug!("render {}", snapshot.hex);
        self.snapshot = Some(snapshot.clone());
    }
}

impl Canvas {
    fn draw(&self, config: &PickerConfig) -> Option<RgbaImage> {
        let snapshot = self.snapshot.as_ref()?;

        let size = config.size.round() as u32;
        let hue_x = MARGIN * 2 + size;
        let preview_x = hue_x + HUE_BAR_WIDTH + MARGIN;
        let width = preview_x + PREVIEW_SIZE + MARGIN;
        let height = size + MARGIN * 2;

        let mut img = RgbaImage::new(width, height);
        img.fill(255);

        // Saturation/brightness pad for the current hue.
        let hue = snapshot.color.hue() / MAX_HUE;
        for y in 0..size {
            for x in 0..size {
                let saturation = x as Component / size as Component;
                let value = 1.0 - y as Component / size as Component;
                img.put_pixel(
                    MARGIN + x,
                    MARGIN + y,
                    pixel(hsv_to_rgb(hue, saturation, value)),
                );
            }
        }

        // Hue bar, red at both ends.
        for y in 0..size {
            let hue = 1.0 - y as Component / size as Component;
            let color = pixel(hsv_to_rgb(hue, 1.0, 1.0));
            for x in 0..HUE_BAR_WIDTH {
                img.put_pixel(hue_x + x, MARGIN + y, color);
            }
        }

        // Pad thumb, positioned by its top left corner.
        let radius = config.pad_thumb_radius;
        let center = (
            (MARGIN as Component + snapshot.pad_thumb.x + radius).round() as i32,
            (MARGIN as Component + snapshot.pad_thumb.y + radius).round() as i32,
        );
        draw_hollow_circle_mut(&mut img, center, radius.round() as i32 + 1, THUMB_SHADOW);
        draw_hollow_circle_mut(&mut img, center, radius.round() as i32, THUMB);

        // Hue thumb.
        let top = (MARGIN as Component + snapshot.hue_thumb.get()).round() as i32;
        draw_filled_rect_mut(
            &mut img,
            Rect::at(hue_x as i32 - 2, top - 2).of_size(HUE_BAR_WIDTH + 4, 3),
            THUMB_SHADOW,
        );

        // Preview swatch with a bar in the contrasting text color.
        draw_filled_rect_mut(
            &mut img,
            Rect::at(preview_x as i32, MARGIN as i32).of_size(PREVIEW_SIZE, PREVIEW_SIZE),
            fill(&snapshot.preview),
        );
        let text = match snapshot.text_color {
            TextColor::Black => Rgba([0, 0, 0, 255]),
            TextColor::White => Rgba([255, 255, 255, 255]),
        };
        draw_filled_rect_mut(
            &mut img,
            Rect::at(preview_x as i32 + 10, (MARGIN + PREVIEW_SIZE / 2) as i32 - 2)
                .of_size(PREVIEW_SIZE - 20, 4),
            text,
        );

        Some(img)
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let hex = args.next().unwrap_or_else(|| "#1E90FF".to_owned());
    let output = args.next().unwrap_or_else(|| "swatch.png".to_owned());

    let config = PickerConfig::default();
    let margin = MARGIN as Component;
    let layout = Layout {
        pad: PagePoint::new(margin, margin),
        hue_bar: PagePoint::new(margin * 2.0 + config.size, margin),
    };

    let mut picker = ColorPicker::with_config(
        Canvas::default(),
        InputCoordinator::new(),
        config,
        layout,
    );
    picker.commit_hex(&hex);

    let snapshot = picker.snapshot();
    log::info!(
        "{} -> h={} s={} b={} rgb={:?}",
        hex,
        snapshot.hue,
        snapshot.saturation,
        snapshot.brightness,
        snapshot.rgb
    );

    let img = picker
        .renderer()
        .draw(picker.config())
        .expect("picker renders on creation");
    img.save(&output)
        .unwrap_or_else(|err| panic!("could not write image to {}: {}", output, err));
}
