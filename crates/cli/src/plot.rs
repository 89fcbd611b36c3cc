//! PNG line charts of sweep errors.
//!
//! Charts carry a title, axis labels, labelled ticks and point markers.
//! Text uses the 8x8 bitmap glyphs of `font8x8`.

use std::fs;
use std::path::{Path, PathBuf};

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};
use window_facade::SweepPoint;

use crate::CliResult;

/// Default chart directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output_image";
/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 1000;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;

/// Blank border around the plotting area, in pixels.
const MARGIN: u32 = 50;
/// Length of each dash and gap of a dashed line, in pixels.
const DASH: u32 = 8;
const TICK: u32 = 5;
const MARKER: i64 = 2;
/// Glyph cell size of the bitmap font.
const GLYPH: u32 = 8;
const TITLE_SCALE: u32 = 2;
/// Number of labelled steps on the y axis.
const Y_TICKS: u32 = 4;

mod colors {
    use image::Rgb;

    pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
    pub const AXIS: Rgb<u8> = Rgb([0, 0, 0]);
    pub const LINE: Rgb<u8> = Rgb([31, 119, 180]);
}

/// Chart output configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl PlotConfig {
    /// The canvas must leave room for a plotting area inside the margins.
    pub fn validate(&self) -> CliResult<()> {
        let min = 2 * MARGIN + 1;
        if self.width < min || self.height < min {
            return Err(format!(
                "Chart size {}x{} is too small (minimum {}x{})",
                self.width, self.height, min, min
            ));
        }
        Ok(())
    }
}

/// Stroke of the data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

impl LineStyle {
    fn draws(&self, step: u32) -> bool {
        match self {
            LineStyle::Solid => true,
            LineStyle::Dashed => (step / DASH) % 2 == 0,
        }
    }
}

/// Single-series line chart renderer.
pub struct LineChart {
    width: u32,
    height: u32,
    style: LineStyle,
    title: String,
    x_label: String,
    y_label: String,
}

impl LineChart {
    /// Create a new renderer
    pub fn new(width: u32, height: u32, style: LineStyle) -> Self {
        Self {
            width,
            height,
            style,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
        }
    }

    /// Set the title drawn above the plotting area
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Set the axis captions
    pub fn axis_labels(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = x_label.to_string();
        self.y_label = y_label.to_string();
        self
    }

    /// Render `(x, y)` points joined in order.
    ///
    /// The y axis starts at zero unless the data goes negative.
    pub fn render(&self, points: &[(f64, f64)]) -> RgbImage {
        let mut img = RgbImage::from_pixel(self.width, self.height, colors::BACKGROUND);

        let left = MARGIN;
        let right = self.width.saturating_sub(MARGIN);
        let top = MARGIN;
        let bottom = self.height.saturating_sub(MARGIN);

        draw_line(&mut img, (left, bottom), (right, bottom), colors::AXIS, LineStyle::Solid);
        draw_line(&mut img, (left, top), (left, bottom), colors::AXIS, LineStyle::Solid);

        let title_y = (MARGIN - GLYPH * TITLE_SCALE) as i64 / 2 - 4;
        draw_text_centered(&mut img, self.width as i64 / 2, title_y, &self.title, TITLE_SCALE);
        draw_text(&mut img, 4, (top - GLYPH - 6) as i64, &self.y_label, 1);
        draw_text_centered(
            &mut img,
            (left + right) as i64 / 2,
            (bottom + TICK + GLYPH + 8) as i64,
            &self.x_label,
            1,
        );

        if points.is_empty() {
            return img;
        }

        let (x_min, x_max) = bounds(points.iter().map(|p| p.0));
        let (y_min, y_max) = bounds(points.iter().map(|p| p.1));
        let y_min = y_min.min(0.0);
        let y_max = if y_max > y_min { y_min + (y_max - y_min) * 1.1 } else { y_min + 1.0 };
        let x_span = if x_max > x_min { x_max - x_min } else { 1.0 };

        let to_pixel = |(x, y): (f64, f64)| -> (u32, u32) {
            let fx = (x - x_min) / x_span;
            let fy = (y - y_min) / (y_max - y_min);
            let px = left as f64 + fx * (right as f64 - left as f64);
            let py = bottom as f64 - fy * (bottom as f64 - top as f64);
            (px.round() as u32, py.round() as u32)
        };

        let pixels: Vec<(u32, u32)> = points.iter().map(|&p| to_pixel(p)).collect();

        for (&(px, _), &(x, _)) in pixels.iter().zip(points.iter()) {
            draw_line(
                &mut img,
                (px, bottom),
                (px, bottom + TICK),
                colors::AXIS,
                LineStyle::Solid,
            );
            draw_text_centered(&mut img, px as i64, (bottom + TICK + 3) as i64, &tick_label(x), 1);
        }

        for k in 0..=Y_TICKS {
            let fraction = k as f64 / Y_TICKS as f64;
            let value = y_min + fraction * (y_max - y_min);
            let py = (bottom as f64 - fraction * (bottom as f64 - top as f64)).round() as u32;
            draw_line(
                &mut img,
                (left.saturating_sub(TICK), py),
                (left, py),
                colors::AXIS,
                LineStyle::Solid,
            );
            let label = format!("{:.2}", value);
            let x = left as i64 - TICK as i64 - 2 - text_width(&label, 1) as i64;
            draw_text(&mut img, x, py as i64 - (GLYPH / 2) as i64, &label, 1);
        }

        for pair in pixels.windows(2) {
            draw_line(&mut img, pair[0], pair[1], colors::LINE, self.style);
        }

        for &(px, py) in &pixels {
            draw_marker(&mut img, px, py, colors::LINE);
        }

        img
    }
}

/// Chart file names for a cutoff key.
pub fn chart_paths(output_dir: &Path, cutoff: i64) -> (PathBuf, PathBuf) {
    (
        output_dir.join(format!("AverageError{}.png", cutoff)),
        output_dir.join(format!("MaxError{}.png", cutoff)),
    )
}

/// Write the average error (solid) and max error (dashed) charts.
///
/// Returns the written paths in that order.
pub fn write_error_charts(
    points: &[SweepPoint],
    cutoff: i64,
    config: &PlotConfig,
) -> CliResult<Vec<PathBuf>> {
    config.validate()?;
    if points.is_empty() {
        return Err("No sweep points to plot".to_string());
    }

    fs::create_dir_all(&config.output_dir).map_err(|e| {
        format!(
            "Failed to create output directory {:?}: {}",
            config.output_dir, e
        )
    })?;

    let (average_path, max_path) = chart_paths(&config.output_dir, cutoff);

    let average: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (p.interval as f64, p.report.average))
        .collect();
    let max: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (p.interval as f64, p.report.max))
        .collect();

    let charts = [
        (average_path, average, LineStyle::Solid, "Average Error Transition"),
        (max_path, max, LineStyle::Dashed, "Max Error Transition"),
    ];

    let mut written = Vec::with_capacity(charts.len());
    for (path, series, style, title) in charts {
        LineChart::new(config.width, config.height, style)
            .title(title)
            .axis_labels("Interval", "Error")
            .render(&series)
            .save(&path)
            .map_err(|e| format!("Failed to write chart {:?}: {}", path, e))?;
        tracing::info!(path = %path.display(), "chart written");
        written.push(path);
    }

    Ok(written)
}

/// Pixel width of `text` at `scale`.
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH * scale
}

/// Draw `text` with its top-left corner at `(x, y)`; unknown glyphs are blank.
pub fn draw_text(img: &mut RgbImage, x: i64, y: i64, text: &str, scale: u32) {
    let scale = scale.max(1) as i64;
    let cell = GLYPH as i64 * scale;

    for (i, ch) in text.chars().enumerate() {
        let glyph = BASIC_FONTS.get(ch).unwrap_or([0; 8]);
        let origin_x = x + i as i64 * cell;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH as i64 {
                if bits & (1 << col) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        put_pixel_checked(
                            img,
                            origin_x + col * scale + dx,
                            y + row as i64 * scale + dy,
                            colors::AXIS,
                        );
                    }
                }
            }
        }
    }
}

fn draw_text_centered(img: &mut RgbImage, center_x: i64, y: i64, text: &str, scale: u32) {
    let x = center_x - text_width(text, scale) as i64 / 2;
    draw_text(img, x, y, text, scale);
}

fn tick_label(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn draw_marker(img: &mut RgbImage, x: u32, y: u32, color: Rgb<u8>) {
    for dy in -MARKER..=MARKER {
        for dx in -MARKER..=MARKER {
            put_pixel_checked(img, x as i64 + dx, y as i64 + dy, color);
        }
    }
}

fn put_pixel_checked(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Bresenham line, skipping pixels in the gaps of a dashed style.
fn draw_line(img: &mut RgbImage, from: (u32, u32), to: (u32, u32), color: Rgb<u8>, style: LineStyle) {
    let (x1, y1) = (from.0 as i64, from.1 as i64);
    let (x2, y2) = (to.0 as i64, to.1 as i64);
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = x1;
    let mut y = y1;
    let mut step = 0u32;

    loop {
        if style.draws(step) {
            put_pixel_checked(img, x, y, color);
        }

        if x == x2 && y == y2 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
        step += 1;
    }
}
