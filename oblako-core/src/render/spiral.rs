//! Archimedean spiral layout.
//!
//! Words are placed from the most frequent down. Each word starts at the
//! canvas centre and walks outwards along `r = step * theta` until its box
//! overlaps nothing already placed. A word that finds no room shrinks one
//! scale at a time and is dropped once it cannot fit at the minimum scale.

use image::RgbImage;
use tracing::debug;

use super::font;
use super::{Color, RenderConfig, Renderer};
use crate::config::RenderOptions;
use crate::error::{CloudError, Result};
use crate::ranker::FrequencyTable;

/// Smallest accepted distance between spiral turns, in pixels.
pub const MIN_SPIRAL_STEP: f32 = 0.1;

/// Upper bound on positions tried for one box.
const MAX_SPIRAL_PROBES: usize = 500_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rect {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl Rect {
    fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Boxes placed so far, plus what is known about the space left.
#[derive(Debug)]
struct Layout {
    canvas: (u32, u32),
    placed: Vec<Rect>,
    free_area: u64,
    /// Smallest box sizes that found no room. Placed boxes never move, so a
    /// box at least this large in both dimensions is not tried again.
    exhausted: Vec<(u32, u32)>,
    last_hit: usize,
}

impl Layout {
    fn new(canvas: (u32, u32), capacity: usize) -> Self {
        Self {
            canvas,
            placed: Vec::with_capacity(capacity),
            free_area: u64::from(canvas.0) * u64::from(canvas.1),
            exhausted: Vec::new(),
            last_hit: 0,
        }
    }

    fn worth_trying(&self, width: u32, height: u32) -> bool {
        u64::from(width) * u64::from(height) <= self.free_area
            && !self
                .exhausted
                .iter()
                .any(|&(w, h)| width >= w && height >= h)
    }

    fn exhaust(&mut self, width: u32, height: u32) {
        self.exhausted.retain(|&(w, h)| !(w >= width && h >= height));
        self.exhausted.push((width, height));
    }

    fn place(&mut self, rect: Rect) {
        self.free_area = self.free_area.saturating_sub(rect.area());
        self.placed.push(rect);
    }

    fn collides(&mut self, candidate: &Rect) -> bool {
        // neighbouring probes tend to hit the same box
        if let Some(rect) = self.placed.get(self.last_hit) {
            if rect.intersects(candidate) {
                return true;
            }
        }
        match self.placed.iter().position(|rect| rect.intersects(candidate)) {
            Some(index) => {
                self.last_hit = index;
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpiralRenderer {
    min_scale: u32,
    max_scale: u32,
    spiral_step: f32,
    palette: Vec<Color>,
}

impl Default for SpiralRenderer {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            min_scale: options.min_scale,
            max_scale: options.max_scale,
            spiral_step: options.spiral_step,
            palette: options
                .palette
                .iter()
                .filter_map(|color| color.parse().ok())
                .collect(),
        }
    }
}

impl SpiralRenderer {
    pub fn new(options: &RenderOptions) -> Result<Self> {
        if options.min_scale == 0 || options.max_scale < options.min_scale {
            return Err(CloudError::Render(format!(
                "scale range {}..={} is invalid",
                options.min_scale, options.max_scale
            )));
        }
        if !(options.spiral_step.is_finite() && options.spiral_step >= MIN_SPIRAL_STEP) {
            return Err(CloudError::Render(format!(
                "spiral step must be at least {MIN_SPIRAL_STEP}, got {}",
                options.spiral_step
            )));
        }
        let palette = options
            .palette
            .iter()
            .map(|color| {
                color
                    .parse::<Color>()
                    .map_err(|err| CloudError::Render(err.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        if palette.is_empty() {
            return Err(CloudError::Render("palette is empty".into()));
        }

        Ok(Self {
            min_scale: options.min_scale,
            max_scale: options.max_scale,
            spiral_step: options.spiral_step,
            palette,
        })
    }

    /// Scale for a count, linear between the table's extremes.
    fn scale_for(&self, count: usize, min_count: usize, max_count: usize) -> u32 {
        if max_count <= min_count {
            return self.max_scale;
        }
        let ratio = (count - min_count) as f32 / (max_count - min_count) as f32;
        let span = (self.max_scale - self.min_scale) as f32;
        self.min_scale + (ratio * span).round() as u32
    }

    /// First free position along the spiral for a box of the given size.
    fn find_spot(&self, width: u32, height: u32, layout: &mut Layout) -> Option<Rect> {
        let (canvas_width, canvas_height) = layout.canvas;
        if width > canvas_width || height > canvas_height || !layout.worth_trying(width, height) {
            return None;
        }

        let centre_x = f64::from(canvas_width - width) / 2.0;
        let centre_y = f64::from(canvas_height - height) / 2.0;
        let max_radius = f64::from(canvas_width).hypot(f64::from(canvas_height)) / 2.0;
        let step = f64::from(self.spiral_step);
        // keep successive probes roughly one glyph dot apart
        let stride = (f64::from(height) / f64::from(font::GLYPH_HEIGHT)).max(1.0);

        let mut theta = 0.0f64;
        for _ in 0..MAX_SPIRAL_PROBES {
            let radius = step * theta;
            if radius > max_radius {
                break;
            }

            let x = (centre_x + radius * theta.cos()).round();
            let y = (centre_y + radius * theta.sin()).round();
            if x >= 0.0
                && y >= 0.0
                && x as u32 + width <= canvas_width
                && y as u32 + height <= canvas_height
            {
                let candidate = Rect {
                    x: x as u32,
                    y: y as u32,
                    width,
                    height,
                };
                if !layout.collides(&candidate) {
                    return Some(candidate);
                }
            }

            theta += (stride / radius.max(1.0)).min(0.5);
        }

        layout.exhaust(width, height);
        None
    }
}

impl Renderer for SpiralRenderer {
    fn render(&self, table: &FrequencyTable, config: &RenderConfig) -> Result<RgbImage> {
        let background = config.validate()?;
        let (Some(max_count), Some(min_count)) = (table.max_count(), table.min_count()) else {
            return Err(CloudError::Render("frequency table is empty".into()));
        };

        let mut image = RgbImage::from_pixel(config.width, config.height, background.to_rgb());
        let mut layout = Layout::new((config.width, config.height), table.len());

        for (rank, entry) in table.iter().enumerate() {
            let (dots_wide, dots_high) = font::measure(&entry.word);
            if dots_wide == 0 {
                continue;
            }

            let fits = (config.width / dots_wide).min(config.height / dots_high);
            let mut scale = self.scale_for(entry.count, min_count, max_count).min(fits);
            let spot = loop {
                if scale < self.min_scale {
                    break None;
                }
                // one dot of padding keeps neighbouring words apart
                let padding = scale;
                let spot = self.find_spot(
                    (dots_wide * scale + padding).min(config.width),
                    (dots_high * scale + padding).min(config.height),
                    &mut layout,
                );
                if let Some(rect) = spot {
                    break Some((rect, scale));
                }
                scale -= 1;
            };

            let Some((rect, scale)) = spot else {
                debug!(word = %entry.word, count = entry.count, "no room for word");
                continue;
            };

            let color = self.palette[rank % self.palette.len()].to_rgb();
            for (dot_x, dot_y) in font::dots(&entry.word) {
                let left = rect.x + dot_x * scale;
                let top = rect.y + dot_y * scale;
                for y in top..(top + scale).min(config.height) {
                    for x in left..(left + scale).min(config.width) {
                        image.put_pixel(x, y, color);
                    }
                }
            }
            layout.place(rect);
        }

        debug!(
            renderer = self.name(),
            words = table.len(),
            placed = layout.placed.len(),
            width = config.width,
            height = config.height,
            "cloud rendered"
        );

        Ok(image)
    }

    fn name(&self) -> &'static str {
        "spiral"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(words: &[(&str, usize)]) -> FrequencyTable {
        let mut sequence = Vec::new();
        for (word, count) in words {
            sequence.extend(std::iter::repeat(*word).take(*count));
        }
        FrequencyTable::rank(sequence, words.len()).unwrap()
    }

    fn lit_pixels(image: &RgbImage, background: Color) -> usize {
        image.pixels().filter(|p| **p != background.to_rgb()).count()
    }

    #[test]
    fn output_has_exact_dimensions() {
        let renderer = SpiralRenderer::default();
        let table = table(&[("кот", 3), ("мышь", 2), ("дом", 1)]);
        for (width, height) in [(1, 1), (17, 7), (320, 200), (201, 999)] {
            let image = renderer
                .render(&table, &RenderConfig::new(width, height, "black"))
                .unwrap();
            assert_eq!(image.dimensions(), (width, height));
        }
    }

    #[test]
    fn draws_words_on_the_background() {
        let renderer = SpiralRenderer::default();
        let table = table(&[("кот", 2)]);
        let image = renderer
            .render(&table, &RenderConfig::new(200, 100, "white"))
            .unwrap();
        assert_eq!(*image.get_pixel(0, 0), Color::WHITE.to_rgb());
        assert!(lit_pixels(&image, Color::WHITE) > 0);
    }

    #[test]
    fn tiny_canvas_skips_words_without_failing() {
        let renderer = SpiralRenderer::default();
        let image = renderer
            .render(&table(&[("длинноеслово", 1)]), &RenderConfig::new(10, 5, "black"))
            .unwrap();
        assert_eq!(lit_pixels(&image, Color::BLACK), 0);
    }

    #[test]
    fn places_many_words_without_overlap() {
        let renderer = SpiralRenderer::default();
        let words: Vec<(String, usize)> = ["кот", "пёс", "мышь", "дом", "лес", "река", "гора", "небо"]
            .iter()
            .enumerate()
            .map(|(i, w)| (w.to_string(), 10 - i))
            .collect();
        let borrowed: Vec<(&str, usize)> = words.iter().map(|(w, c)| (w.as_str(), *c)).collect();
        let image = renderer
            .render(&table(&borrowed), &RenderConfig::new(400, 300, "#000"))
            .unwrap();
        assert!(lit_pixels(&image, Color::BLACK) > 0);
    }

    #[test]
    fn frequent_words_get_larger_scales() {
        let renderer = SpiralRenderer::default();
        assert_eq!(renderer.scale_for(10, 1, 10), 16);
        assert_eq!(renderer.scale_for(1, 1, 10), 1);
        assert!(renderer.scale_for(5, 1, 10) < 16);
        assert_eq!(renderer.scale_for(4, 4, 4), 16);
    }

    #[test]
    fn rejects_bad_background_and_empty_table() {
        let renderer = SpiralRenderer::default();
        let err = renderer
            .render(&table(&[("кот", 1)]), &RenderConfig::new(10, 10, "plaid"))
            .unwrap_err();
        assert!(matches!(err, CloudError::Render(_)));

        let err = renderer
            .render(&FrequencyTable::default(), &RenderConfig::new(10, 10, "black"))
            .unwrap_err();
        assert!(matches!(err, CloudError::Render(_)));
    }

    #[test]
    fn validates_options() {
        let bad_palette = RenderOptions {
            palette: vec!["#zzzzzz".into()],
            ..RenderOptions::default()
        };
        assert!(SpiralRenderer::new(&bad_palette).is_err());

        let bad_scales = RenderOptions {
            min_scale: 4,
            max_scale: 2,
            ..RenderOptions::default()
        };
        assert!(SpiralRenderer::new(&bad_scales).is_err());

        assert!(SpiralRenderer::new(&RenderOptions::default()).is_ok());
    }

    #[test]
    fn rejects_steps_below_the_minimum() {
        for spiral_step in [1e-6, 0.0, -1.0, f32::NAN] {
            let options = RenderOptions {
                spiral_step,
                ..RenderOptions::default()
            };
            let err = SpiralRenderer::new(&options).unwrap_err();
            assert!(matches!(err, CloudError::Render(_)), "{spiral_step}");
        }
    }

    #[test]
    fn smallest_step_still_finishes() {
        let renderer = SpiralRenderer::new(&RenderOptions {
            spiral_step: MIN_SPIRAL_STEP,
            ..RenderOptions::default()
        })
        .unwrap();
        let image = renderer
            .render(&table(&[("кот", 2), ("дом", 1)]), &RenderConfig::new(200, 100, "black"))
            .unwrap();
        assert!(lit_pixels(&image, Color::BLACK) > 0);
    }

    #[test]
    fn exhausted_sizes_are_not_retried() {
        let mut layout = Layout::new((100, 50), 2);
        assert!(layout.worth_trying(100, 50));

        layout.exhaust(40, 20);
        assert!(!layout.worth_trying(40, 20));
        assert!(!layout.worth_trying(41, 25));
        assert!(layout.worth_trying(39, 30));

        layout.exhaust(30, 10);
        assert_eq!(layout.exhausted, vec![(30, 10)]);
        assert!(!layout.worth_trying(39, 30));
    }

    #[test]
    fn full_canvas_leaves_nothing_worth_trying() {
        let mut layout = Layout::new((100, 50), 1);
        layout.place(Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 40,
        });
        assert_eq!(layout.free_area, 1000);
        assert!(layout.worth_trying(50, 20));
        assert!(!layout.worth_trying(50, 21));

        let renderer = SpiralRenderer::default();
        assert!(renderer.find_spot(50, 20, &mut layout).is_none());
        assert!(!layout.worth_trying(50, 20));
    }

    #[test]
    fn saturated_canvas_finishes() {
        let letters: Vec<char> = "абвгдежзик".chars().collect();
        let words: Vec<String> = (0..100)
            .map(|i| format!("{}{}ок", letters[i / 10], letters[i % 10]))
            .collect();
        let counted: Vec<(&str, usize)> = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.as_str(), 100 - i))
            .collect();
        let image = SpiralRenderer::default()
            .render(&table(&counted), &RenderConfig::new(160, 90, "black"))
            .unwrap();
        assert_eq!(image.dimensions(), (160, 90));
        assert!(lit_pixels(&image, Color::BLACK) > 0);
    }
}
