use egui::Pos2;

use crate::surface::Surface;
use crate::tools::ToolKind;

/// Something the user put on the canvas: a freehand stroke or a sticker stamp
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    /// Polyline drawn with a marker. Always holds at least one point.
    Stroke { thickness: u32, points: Vec<Pos2> },
    /// A glyph stamped at a single position
    Stamp { glyph: String, point: Pos2 },
}

impl Drawable {
    /// Start a drawable for `tool` at `initial`
    pub fn create(initial: Pos2, tool: &ToolKind) -> Self {
        match tool {
            ToolKind::Marker { thickness } => Self::Stroke {
                thickness: *thickness,
                points: vec![initial],
            },
            ToolKind::Sticker { glyph } => Self::Stamp {
                glyph: glyph.clone(),
                point: initial,
            },
        }
    }

    pub fn new_stroke(thickness: u32, points: Vec<Pos2>) -> Self {
        Self::Stroke { thickness, points }
    }

    pub fn new_stamp(glyph: &str, point: Pos2) -> Self {
        Self::Stamp {
            glyph: glyph.to_owned(),
            point,
        }
    }

    /// Strokes grow by one vertex; stamps move to the new point
    pub fn extend(&mut self, next: Pos2) {
        match self {
            Self::Stroke { points, .. } => points.push(next),
            Self::Stamp { point, .. } => *point = next,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        match self {
            Self::Stroke { points, .. } => points.as_slice(),
            Self::Stamp { point, .. } => std::slice::from_ref(point),
        }
    }

    /// Point at `index`, or `None` when out of range
    pub fn point(&self, index: usize) -> Option<Pos2> {
        self.points().get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.points().len()
    }

    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    pub fn thickness(&self) -> Option<u32> {
        match self {
            Self::Stroke { thickness, .. } => Some(*thickness),
            Self::Stamp { .. } => None,
        }
    }

    pub fn glyph(&self) -> Option<&str> {
        match self {
            Self::Stroke { .. } => None,
            Self::Stamp { glyph, .. } => Some(glyph.as_str()),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Stroke { .. } => "stroke",
            Self::Stamp { .. } => "stamp",
        }
    }

    /// Draw onto `surface` without disturbing its ambient style
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            Self::Stroke { thickness, points } => {
                // a tap leaves no mark
                if points.len() < 2 {
                    return;
                }
                let ambient = surface.line_width();
                surface.set_line_width(*thickness as f32);
                surface.stroke_path(points);
                surface.set_line_width(ambient);
            }
            Self::Stamp { glyph, point } => surface.fill_text(glyph, *point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceOp};

    #[test]
    fn test_create_from_tool() {
        let stroke = Drawable::create(Pos2::new(1.0, 2.0), &ToolKind::Marker { thickness: 4 });
        assert_eq!(stroke.thickness(), Some(4));
        assert_eq!(stroke.glyph(), None);
        assert_eq!(stroke.points(), &[Pos2::new(1.0, 2.0)]);

        let stamp = Drawable::create(Pos2::new(3.0, 4.0), &ToolKind::sticker("🌟"));
        assert_eq!(stamp.glyph(), Some("🌟"));
        assert_eq!(stamp.thickness(), None);
    }

    #[test]
    fn test_point_out_of_range_is_none() {
        let stroke = Drawable::new_stroke(1, vec![Pos2::new(5.0, 5.0)]);
        assert_eq!(stroke.point(0), Some(Pos2::new(5.0, 5.0)));
        assert_eq!(stroke.point(1), None);
    }

    #[test]
    fn test_stroke_restores_ambient_line_width() {
        let mut surface = RecordingSurface::new();
        surface.set_line_width(1.5);
        let stroke = Drawable::new_stroke(7, vec![Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0)]);
        stroke.render(&mut surface);

        assert_eq!(surface.line_width(), 1.5);
        match &surface.ops()[0] {
            SurfaceOp::StrokePath { width, .. } => assert_eq!(*width, 7.0),
            other => panic!("unexpected op {:?}", other),
        }
    }

    #[test]
    fn test_stamp_renders_glyph_at_point() {
        let mut surface = RecordingSurface::new();
        Drawable::new_stamp("🌸", Pos2::new(12.0, 20.0)).render(&mut surface);
        assert_eq!(
            surface.ops(),
            &[SurfaceOp::FillText {
                text: "🌸".to_owned(),
                center: Pos2::new(12.0, 20.0),
                size: 24.0,
            }]
        );
    }
}
