//! # Virtual makeup geometry
//!
//! Turns face-landmark detections into canvas fill shapes. The detector
//! reports the 68-point iBUG layout in the coordinate space of the image it
//! analysed; [`Scale`] maps those points onto the canvas the photo is drawn
//! on, and [`plan`] emits one set of [`Shape`]s per face:
//!
//! | Region | Landmarks | Shape |
//! |--------|-----------|-------|
//! | Lips | outer 48..=59, inner 60..=67 | polygon with the open mouth cut out |
//! | Eye shadow | upper lid 36..=39 / 42..=45 lifted toward brows 17..=26 | polygon per eye |
//! | Blush | outer brow points 17 and 26, nose tip 30, jaw 0 and 16 | circle per cheek |
//!
//! The transform is one-shot per image. There is no layering or undo: the
//! canvas is redrawn from the source photo before every apply.

use serde::{Deserialize, Serialize};

pub const LANDMARK_COUNT: usize = 68;

const OUTER_LIPS: std::ops::RangeInclusive<usize> = 48..=59;
const INNER_LIPS: std::ops::RangeInclusive<usize> = 60..=67;
const RIGHT_LID: [usize; 4] = [36, 37, 38, 39];
const RIGHT_BROW: [usize; 4] = [17, 19, 20, 21];
const LEFT_LID: [usize; 4] = [42, 43, 44, 45];
const LEFT_BROW: [usize; 4] = [22, 23, 24, 26];
const RIGHT_BROW_OUTER: usize = 17;
const LEFT_BROW_OUTER: usize = 26;
const NOSE_BRIDGE: usize = 27;
const NOSE_TIP: usize = 30;
const JAW_RIGHT: usize = 0;
const JAW_LEFT: usize = 16;

/// How far from lid to brow the shadow reaches.
const SHADOW_LIFT: f64 = 0.45;
/// How far the blush centre moves from the brow end toward the nose bridge.
const BLUSH_INSET: f64 = 0.25;
/// Blush radius as a fraction of jaw width.
const BLUSH_RADIUS: f64 = 0.08;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn lerp(self, to: Point, t: f64) -> Point {
        Point::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
    }

    fn distance(self, other: Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// Landmark positions for one detected face.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceLandmarks {
    pub points: Vec<Point>,
}

impl FaceLandmarks {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    fn is_complete(&self) -> bool {
        self.points.len() >= LANDMARK_COUNT
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// Parse `#rrggbb` (the value of an `<input type="color">`).
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: 1.0,
        })
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS colour for `fillStyle`.
    pub fn css(self) -> String {
        format!("rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MakeupPalette {
    pub lips: Rgba,
    pub eyeshadow: Rgba,
    pub blush: Rgba,
    /// Overall strength, 0.0..=1.0.
    pub opacity: f32,
}

impl Default for MakeupPalette {
    fn default() -> Self {
        Self {
            lips: Rgba { r: 0xb0, g: 0x30, b: 0x6a, a: 1.0 },
            eyeshadow: Rgba { r: 0x8e, g: 0x5a, b: 0x9b, a: 1.0 },
            blush: Rgba { r: 0xe8, g: 0x82, b: 0x8c, a: 1.0 },
            opacity: 0.4,
        }
    }
}

/// Maps detector coordinates onto canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub sx: f64,
    pub sy: f64,
}

impl Scale {
    pub const IDENTITY: Scale = Scale { sx: 1.0, sy: 1.0 };

    /// Zero-sized sources map to identity rather than dividing by zero.
    pub fn between(source: (f64, f64), canvas: (f64, f64)) -> Self {
        if source.0 <= 0.0 || source.1 <= 0.0 {
            return Self::IDENTITY;
        }
        Self {
            sx: canvas.0 / source.0,
            sy: canvas.1 / source.1,
        }
    }

    pub fn apply(self, p: Point) -> Point {
        Point::new(p.x * self.sx, p.y * self.sy)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled with the even-odd rule so `hole` stays transparent.
    Polygon {
        outer: Vec<Point>,
        hole: Option<Vec<Point>>,
        fill: Rgba,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Rgba,
    },
}

/// Build the fill plan for every complete face.
pub fn plan(faces: &[FaceLandmarks], palette: &MakeupPalette, scale: Scale) -> Vec<Shape> {
    let mut shapes = Vec::new();
    for face in faces.iter().filter(|f| f.is_complete()) {
        let pts: Vec<Point> = face.points.iter().map(|p| scale.apply(*p)).collect();
        shapes.push(lips(&pts, palette));
        shapes.push(eyeshadow(&pts, &RIGHT_LID, &RIGHT_BROW, palette));
        shapes.push(eyeshadow(&pts, &LEFT_LID, &LEFT_BROW, palette));
        shapes.push(blush(&pts, RIGHT_BROW_OUTER, palette));
        shapes.push(blush(&pts, LEFT_BROW_OUTER, palette));
    }
    shapes
}

fn lips(pts: &[Point], palette: &MakeupPalette) -> Shape {
    Shape::Polygon {
        outer: pts[OUTER_LIPS].to_vec(),
        hole: Some(pts[INNER_LIPS].to_vec()),
        fill: palette.lips.with_alpha(palette.opacity),
    }
}

fn eyeshadow(pts: &[Point], lid: &[usize; 4], brow: &[usize; 4], palette: &MakeupPalette) -> Shape {
    let mut outer: Vec<Point> = lid.iter().map(|&i| pts[i]).collect();
    outer.extend(
        lid.iter()
            .zip(brow)
            .rev()
            .map(|(&l, &b)| pts[l].lerp(pts[b], SHADOW_LIFT)),
    );
    Shape::Polygon {
        outer,
        hole: None,
        fill: palette.eyeshadow.with_alpha(palette.opacity * 0.8),
    }
}

fn blush(pts: &[Point], brow_outer: usize, palette: &MakeupPalette) -> Shape {
    let anchor = pts[brow_outer];
    let inset = anchor.lerp(pts[NOSE_BRIDGE], BLUSH_INSET);
    let center = Point::new(inset.x, pts[NOSE_TIP].y);
    let radius = pts[JAW_RIGHT].distance(pts[JAW_LEFT]) * BLUSH_RADIUS;
    Shape::Circle {
        center,
        radius,
        fill: palette.blush.with_alpha(palette.opacity * 0.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A synthetic face: every landmark sits on a grid so expected
    /// coordinates are easy to compute by hand.
    fn face() -> FaceLandmarks {
        let mut points = vec![Point::default(); LANDMARK_COUNT];
        points[JAW_RIGHT] = Point::new(0.0, 100.0);
        points[JAW_LEFT] = Point::new(200.0, 100.0);
        points[17] = Point::new(20.0, 40.0);
        points[26] = Point::new(180.0, 40.0);
        points[NOSE_BRIDGE] = Point::new(100.0, 40.0);
        points[NOSE_TIP] = Point::new(100.0, 110.0);
        for (n, i) in (36..=47).enumerate() {
            points[i] = Point::new(40.0 + n as f64 * 10.0, 60.0);
        }
        for i in 18..=25 {
            points[i] = Point::new(i as f64 * 5.0, 40.0);
        }
        for (n, i) in (48..=67).enumerate() {
            points[i] = Point::new(60.0 + n as f64, 150.0);
        }
        FaceLandmarks::new(points)
    }

    #[test]
    fn no_faces_no_shapes() {
        assert!(plan(&[], &MakeupPalette::default(), Scale::IDENTITY).is_empty());
    }

    #[test]
    fn incomplete_face_is_skipped() {
        let partial = FaceLandmarks::new(vec![Point::default(); 20]);
        let shapes = plan(&[partial, face()], &MakeupPalette::default(), Scale::IDENTITY);
        assert_eq!(shapes.len(), 5);
    }

    #[test]
    fn lips_polygon_has_mouth_hole() {
        let shapes = plan(&[face()], &MakeupPalette::default(), Scale::IDENTITY);
        match &shapes[0] {
            Shape::Polygon { outer, hole, fill } => {
                assert_eq!(outer.len(), 12);
                assert_eq!(hole.as_ref().map(Vec::len), Some(8));
                assert_eq!(outer[0], Point::new(60.0, 150.0));
                assert!((fill.a - 0.4).abs() < 1e-6);
            }
            other => panic!("expected lips polygon, got {other:?}"),
        }
    }

    #[test]
    fn eyeshadow_lifts_toward_brow() {
        let shapes = plan(&[face()], &MakeupPalette::default(), Scale::IDENTITY);
        let Shape::Polygon { outer, hole, .. } = &shapes[1] else {
            panic!("expected eyeshadow polygon");
        };
        assert!(hole.is_none());
        assert_eq!(outer.len(), 8);
        // lid at y=60, brow at y=40, lifted 45% of the way
        assert!((outer[4].y - 51.0).abs() < 1e-9);
        // lifted edge walks back from the inner corner
        assert!((outer[4].x - outer[3].x).abs() < 20.0);
    }

    #[test]
    fn blush_anchored_below_outer_brow() {
        let shapes = plan(&[face()], &MakeupPalette::default(), Scale::IDENTITY);
        let Shape::Circle { center, radius, .. } = shapes[3] else {
            panic!("expected blush circle");
        };
        assert!((center.x - 40.0).abs() < 1e-9);
        assert!((center.y - 110.0).abs() < 1e-9);
        assert!((radius - 16.0).abs() < 1e-9);
    }

    #[test]
    fn scale_maps_detection_to_canvas() {
        let scale = Scale::between((400.0, 300.0), (200.0, 150.0));
        let shapes = plan(&[face()], &MakeupPalette::default(), scale);
        let Shape::Circle { center, radius, .. } = shapes[4] else {
            panic!("expected blush circle");
        };
        assert!((center.x - 80.0).abs() < 1e-9);
        assert!((center.y - 55.0).abs() < 1e-9);
        assert!((radius - 8.0).abs() < 1e-9);
        assert_eq!(Scale::between((0.0, 10.0), (5.0, 5.0)), Scale::IDENTITY);
    }

    #[test]
    fn hex_colours() {
        let c = Rgba::parse_hex("#B0306a").unwrap();
        assert_eq!((c.r, c.g, c.b), (0xb0, 0x30, 0x6a));
        assert_eq!(c.to_hex(), "#b0306a");
        assert_eq!(c.with_alpha(0.5).css(), "rgba(176, 48, 106, 0.50)");
        assert!(Rgba::parse_hex("b0306a").is_none());
        assert!(Rgba::parse_hex("#b0306").is_none());
        assert!(Rgba::parse_hex("#zz306a").is_none());
    }
}
