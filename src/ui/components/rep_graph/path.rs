//! Bump curve and area paths through the rep series
//!
//! Consecutive points are joined by a cubic Bézier whose control points sit
//! halfway between the two points horizontally, at each endpoint's height.
//! The resulting S-curve is flat at every data point, so it never
//! overshoots a neighbouring value.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use super::bezier::CubicBezier;

/// A point in chart-local pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f32,
    pub y: f32,
}

impl PlotPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One bump segment between two neighbouring points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BumpSegment {
    pub start: PlotPoint,
    pub end: PlotPoint,
}

impl BumpSegment {
    /// Bézier control points of this segment
    pub fn control_points(&self) -> (PlotPoint, PlotPoint) {
        let mid_x = (self.start.x + self.end.x) / 2.0;
        (
            PlotPoint::new(mid_x, self.start.y),
            PlotPoint::new(mid_x, self.end.y),
        )
    }

    /// Point at curve parameter `t` in [0, 1]
    pub fn point_at(&self, t: f32) -> PlotPoint {
        let shape = CubicBezier::BUMP;
        PlotPoint::new(
            self.start.x + (self.end.x - self.start.x) * shape.sample_x(t),
            self.start.y + (self.end.y - self.start.y) * shape.sample_y(t),
        )
    }

    /// Whether `x` falls inside this segment's horizontal extent
    pub fn spans(&self, x: f32) -> bool {
        let (low, high) = if self.start.x <= self.end.x {
            (self.start.x, self.end.x)
        } else {
            (self.end.x, self.start.x)
        };
        low <= x && x <= high
    }

    /// Curve height at screen `x`
    ///
    /// `x` is clamped to the segment's extent.
    pub fn y_for_x(&self, x: f32) -> f32 {
        let dx = self.end.x - self.start.x;
        if dx == 0.0 {
            return self.end.y;
        }
        let u = (x - self.start.x) / dx;
        self.start.y + (self.end.y - self.start.y) * CubicBezier::BUMP.y_for_x(u)
    }
}

/// Smooth curve through the plotted points
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurvePath {
    vertices: Vec<PlotPoint>,
}

impl CurvePath {
    /// Build a bump curve through `points`, which must be ordered by x
    pub fn bump_x(points: &[PlotPoint]) -> Self {
        Self {
            vertices: points.to_vec(),
        }
    }

    /// The points the curve passes through
    pub fn vertices(&self) -> &[PlotPoint] {
        &self.vertices
    }

    /// Iterate the bump segments between consecutive vertices
    pub fn segments(&self) -> impl Iterator<Item = BumpSegment> + '_ {
        self.vertices.windows(2).map(|pair| BumpSegment {
            start: pair[0],
            end: pair[1],
        })
    }

    /// Horizontal extent covered by the curve
    pub fn x_extent(&self) -> Option<(f32, f32)> {
        let first = self.vertices.first()?;
        let last = self.vertices.last()?;
        Some((first.x, last.x))
    }

    /// Curve height at screen `x`
    ///
    /// Returns `None` for an empty curve or when `x` lies outside the curve.
    /// A shared vertex belongs to the earlier segment; both give the same y.
    pub fn y_for_x(&self, x: f32) -> Option<f32> {
        if let [only] = self.vertices.as_slice() {
            return (only.x == x).then_some(only.y);
        }

        self.segments()
            .find(|segment| segment.spans(x))
            .map(|segment| segment.y_for_x(x))
    }

    /// Flatten the curve into a polyline with `subdivisions` steps per
    /// segment, suitable for drawing with straight line primitives
    pub fn sample(&self, subdivisions: usize) -> Vec<PlotPoint> {
        let subdivisions = subdivisions.max(1);
        if self.vertices.len() < 2 {
            return self.vertices.clone();
        }

        let mut points = Vec::with_capacity((self.vertices.len() - 1) * subdivisions + 1);
        points.push(self.vertices[0]);

        let step = 1.0 / subdivisions as f32;
        for segment in self.segments() {
            for j in 1..=subdivisions {
                points.push(segment.point_at(j as f32 * step));
            }
        }

        points
    }

    /// SVG path data for the curve (`M x,y C ...`)
    ///
    /// An empty curve yields an empty string and a single point yields a
    /// closed zero-length path.
    pub fn to_svg(&self) -> String {
        let mut data = String::new();
        // Writing into a String cannot fail
        let _ = self.write_svg(&mut data);
        data
    }

    fn write_svg<W: Write>(&self, out: &mut W) -> core::fmt::Result {
        let Some(first) = self.vertices.first() else {
            return Ok(());
        };

        write!(out, "M{},{}", first.x, first.y)?;
        if self.vertices.len() == 1 {
            return out.write_char('Z');
        }
        self.write_segments(out)
    }

    fn write_segments<W: Write>(&self, out: &mut W) -> core::fmt::Result {
        for segment in self.segments() {
            let (c1, c2) = segment.control_points();
            write!(
                out,
                "C{},{},{},{},{},{}",
                c1.x, c1.y, c2.x, c2.y, segment.end.x, segment.end.y
            )?;
        }
        Ok(())
    }
}

/// The curve closed down to the baseline, forming a fillable area
#[derive(Debug, Clone, PartialEq)]
pub struct AreaPath {
    curve: CurvePath,
    baseline: f32,
}

impl AreaPath {
    pub fn new(curve: CurvePath, baseline: f32) -> Self {
        Self { curve, baseline }
    }

    pub fn curve(&self) -> &CurvePath {
        &self.curve
    }

    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    /// Vertical span `(top, bottom)` of the area at screen `x`
    pub fn column_span(&self, x: f32) -> Option<(f32, f32)> {
        let y = self.curve.y_for_x(x)?;
        Some((y.min(self.baseline), y.max(self.baseline)))
    }

    /// Highest point of the area (smallest screen y)
    pub fn top(&self) -> f32 {
        self.curve
            .vertices()
            .iter()
            .fold(self.baseline, |top, point| top.min(point.y))
    }

    /// SVG path data: the curve, down to the baseline, back along it, closed
    pub fn to_svg(&self) -> String {
        let mut data = String::new();
        let _ = self.write_svg(&mut data);
        data
    }

    fn write_svg<W: Write>(&self, out: &mut W) -> core::fmt::Result {
        let (Some(first), Some(last)) = (self.curve.vertices.first(), self.curve.vertices.last())
        else {
            return Ok(());
        };

        write!(out, "M{},{}", first.x, first.y)?;
        self.curve.write_segments(out)?;
        write!(out, "L{},{}", last.x, self.baseline)?;
        write!(out, "L{},{}", first.x, self.baseline)?;
        out.write_char('Z')
    }
}
