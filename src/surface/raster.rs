use std::borrow::Cow;
use std::ops::Range;

use ab_glyph::{Font, FontArc, FontRef, FontVec, ScaleFont, point};
use egui::{FontFamily, Pos2, Rect};
use image::{Pixel, Rgba, RgbaImage};

use super::{Surface, SurfaceStyle};

/// Fonts used to rasterize text, in fallback order.
///
/// Built from egui's bundled proportional family so that stickers render with
/// the same emoji font on export as on screen.
#[derive(Clone)]
pub struct GlyphFonts {
    fonts: Vec<(FontArc, f32)>,
}

impl std::fmt::Debug for GlyphFonts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphFonts")
            .field("fonts", &self.fonts.len())
            .finish()
    }
}

impl GlyphFonts {
    pub fn from_egui_defaults() -> Self {
        let definitions = egui::FontDefinitions::default();
        let mut fonts = Vec::new();
        let Some(family) = definitions.families.get(&FontFamily::Proportional) else {
            return Self { fonts };
        };
        for name in family {
            let Some(data) = definitions.font_data.get(name) else {
                continue;
            };
            let font = match &data.font {
                Cow::Borrowed(bytes) => FontRef::try_from_slice_and_index(*bytes, data.index)
                    .map(FontArc::from)
                    .ok(),
                Cow::Owned(bytes) => FontVec::try_from_vec_and_index(bytes.clone(), data.index)
                    .map(FontArc::from)
                    .ok(),
            };
            match font {
                Some(font) => fonts.push((font, data.tweak.scale)),
                None => log::warn!("Skipping unreadable font '{}'", name),
            }
        }
        Self { fonts }
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// First font that has an outline for `ch`
    fn font_for(&self, ch: char) -> Option<&(FontArc, f32)> {
        self.fonts
            .iter()
            .find(|(font, _)| font.glyph_id(ch).0 != 0)
            .or_else(|| self.fonts.first())
    }
}

/// CPU raster surface backed by an [`RgbaImage`], used for export
pub struct RasterSurface {
    image: RgbaImage,
    style: SurfaceStyle,
    fonts: GlyphFonts,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, style: SurfaceStyle, fonts: GlyphFonts) -> Self {
        let mut surface = Self {
            image: RgbaImage::new(width, height),
            style,
            fonts,
        };
        surface.clear();
        surface
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Paint every pixel whose center lies within `radius` of the segment `from`..`to` in ink.
    /// A zero-length segment is a disc.
    fn fill_capsule(&mut self, from: Pos2, to: Pos2, radius: f32) {
        let ink = Rgba(self.style.ink.to_srgba_unmultiplied());
        if radius <= 0.0 || ink.0[3] == 0 {
            return;
        }
        let bounds = Rect::from_two_pos(from, to).expand(radius);
        let (width, height) = self.image.dimensions();
        let columns = pixel_span(bounds.min.x, bounds.max.x, width);
        for y in pixel_span(bounds.min.y, bounds.max.y, height) {
            for x in columns.clone() {
                let pixel_center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                if distance_to_segment(pixel_center, from, to) <= radius {
                    self.image.get_pixel_mut(x, y).blend(&ink);
                }
            }
        }
    }
}

/// Pixel indices covering `min..max`, clamped to `0..limit`
fn pixel_span(min: f32, max: f32, limit: u32) -> Range<u32> {
    let start = min.floor().max(0.0) as u32;
    let end = (max.ceil().max(0.0) as u32).min(limit);
    start..end
}

fn distance_to_segment(point: Pos2, from: Pos2, to: Pos2) -> f32 {
    let along = to - from;
    let length_sq = along.length_sq();
    if length_sq == 0.0 {
        return point.distance(from);
    }
    let t = ((point - from).dot(along) / length_sq).clamp(0.0, 1.0);
    point.distance(from + along * t)
}

impl Surface for RasterSurface {
    fn style(&self) -> &SurfaceStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut SurfaceStyle {
        &mut self.style
    }

    fn clear(&mut self) {
        let [r, g, b, a] = self.style.background.to_srgba_unmultiplied();
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([r, g, b, a]);
        }
    }

    fn stroke_path(&mut self, points: &[Pos2]) {
        // thin strokes still cover at least one pixel
        let radius = (self.style.line_width * self.style.scale / 2.0).max(0.5);
        let device: Vec<Pos2> = points.iter().map(|p| self.to_device(*p)).collect();
        for segment in device.windows(2) {
            self.fill_capsule(segment[0], segment[1], radius);
        }
    }

    fn fill_text(&mut self, text: &str, center: Pos2) {
        if text.is_empty() || self.fonts.is_empty() {
            return;
        }
        let size = self.style.font_size * self.style.scale;
        let center = self.to_device(center);

        let width: f32 = text
            .chars()
            .filter_map(|ch| {
                let (font, tweak) = self.fonts.font_for(ch)?;
                let scaled = font.as_scaled(size * tweak);
                Some(scaled.h_advance(scaled.glyph_id(ch)))
            })
            .sum();

        let [r, g, b, a] = self.style.ink.to_srgba_unmultiplied();
        let mut caret_x = center.x - width / 2.0;
        for ch in text.chars() {
            let Some((font, tweak)) = self.fonts.font_for(ch) else {
                continue;
            };
            let scaled = font.as_scaled(size * tweak);
            // descent is negative, so this puts the middle of the line box on center.y
            let baseline = center.y + (scaled.ascent() + scaled.descent()) / 2.0;
            let mut glyph = scaled.scaled_glyph(ch);
            glyph.position = point(caret_x, baseline);
            caret_x += scaled.h_advance(glyph.id);

            let Some(outlined) = scaled.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            let image = &mut self.image;
            outlined.draw(|x, y, coverage| {
                let px = x as i32 + bounds.min.x as i32;
                let py = y as i32 + bounds.min.y as i32;
                if px >= 0 && py >= 0 && px < image.width() as i32 && py < image.height() as i32 {
                    let alpha = (a as f32 * coverage).round().clamp(0.0, 255.0) as u8;
                    image
                        .get_pixel_mut(px as u32, py as u32)
                        .blend(&Rgba([r, g, b, alpha]));
                }
            });
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32) {
        let center = self.to_device(center);
        self.fill_capsule(center, center, radius * self.style.scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(width: u32, height: u32) -> RasterSurface {
        RasterSurface::new(width, height, SurfaceStyle::default(), GlyphFonts::from_egui_defaults())
    }

    fn is_ink(surface: &RasterSurface, x: u32, y: u32) -> bool {
        surface.image().get_pixel(x, y).0 == [0, 0, 0, 255]
    }

    fn is_background(surface: &RasterSurface, x: u32, y: u32) -> bool {
        surface.image().get_pixel(x, y).0 == [255, 255, 255, 255]
    }

    #[test]
    fn test_clear_fills_background() {
        let surface = surface(8, 8);
        assert!(surface.image().pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_stroke_path_paints_along_segment() {
        let mut surface = surface(32, 32);
        surface.set_line_width(3.0);
        surface.stroke_path(&[Pos2::new(4.0, 16.0), Pos2::new(28.0, 16.0)]);

        assert!(is_ink(&surface, 16, 16));
        assert!(is_ink(&surface, 5, 16));
        assert!(!is_ink(&surface, 16, 4));
    }

    #[test]
    fn test_scale_moves_geometry() {
        let mut surface = surface(64, 64);
        surface.set_scale(4.0);
        surface.fill_circle(Pos2::new(8.0, 8.0), 2.0);

        assert!(is_ink(&surface, 32, 32));
        assert!(!is_ink(&surface, 8, 8));
    }

    #[test]
    fn test_fill_text_marks_near_center() {
        let mut surface = surface(64, 64);
        surface.set_font_size(40.0);
        surface.fill_text("W", Pos2::new(32.0, 32.0));

        let inked = surface
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[0] < 128)
            .count();
        assert!(inked > 0);
    }

    #[test]
    fn test_translucent_ink_blends_over_background() {
        let mut surface = surface(16, 16);
        surface.style_mut().ink = egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128);
        surface.fill_circle(Pos2::new(8.0, 8.0), 4.0);

        let [r, _, _, a] = surface.image().get_pixel(8, 8).0;
        assert!((100..160).contains(&r), "expected mid grey, got {r}");
        assert_eq!(a, 255);
        assert!(is_background(&surface, 1, 1));
    }

    #[test]
    fn test_stroke_has_round_caps() {
        let mut surface = surface(32, 32);
        surface.set_line_width(8.0);
        surface.stroke_path(&[Pos2::new(10.0, 16.0), Pos2::new(20.0, 16.0)]);

        // within half the width past the end point
        assert!(is_ink(&surface, 22, 16));
        assert!(!is_ink(&surface, 22, 12));
        assert!(is_background(&surface, 26, 16));
    }
}
