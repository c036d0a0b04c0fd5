//! Unit cubic Bézier curves
//!
//! A unit curve runs from (0, 0) to (1, 1) with two free control points.
//! It is used twice by the rep graph: as the easing function of the
//! selection animation, and (with control points (0.5, 0) and (0.5, 1)) as
//! the normalised shape of every bump segment of the rep curve.

/// Newton iterations before falling back to bisection
const NEWTON_ITERATIONS: usize = 8;

/// Bisection iterations, enough for f32 precision on [0, 1]
const BISECTION_ITERATIONS: usize = 32;

/// Convergence tolerance when solving for the curve parameter
const SOLVE_EPSILON: f32 = 1e-6;

/// Cubic Bézier from (0, 0) to (1, 1) with control points (x1, y1), (x2, y2)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    /// CSS `ease` timing curve
    pub const EASE: Self = Self::new(0.25, 0.1, 0.25, 1.0);

    /// Shape of a bump segment between two neighbouring points
    pub const BUMP: Self = Self::new(0.5, 0.0, 0.5, 1.0);

    /// Create a unit curve. `x1` and `x2` should lie in [0, 1] so that x is
    /// monotonic in the curve parameter.
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Evaluate the x coordinate at curve parameter `t`
    pub fn sample_x(&self, t: f32) -> f32 {
        sample(self.x1, self.x2, t)
    }

    /// Evaluate the y coordinate at curve parameter `t`
    pub fn sample_y(&self, t: f32) -> f32 {
        sample(self.y1, self.y2, t)
    }

    fn sample_dx(&self, t: f32) -> f32 {
        let (a, b, c) = coefficients(self.x1, self.x2);
        (3.0 * a * t + 2.0 * b) * t + c
    }

    /// Find the curve parameter whose x coordinate is `x` (clamped to [0, 1])
    pub fn solve_t(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);

        // Newton-Raphson converges in a few steps for well-behaved curves
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = self.sample_x(t) - x;
            if abs(error) < SOLVE_EPSILON {
                return t;
            }
            let slope = self.sample_dx(t);
            if abs(slope) < SOLVE_EPSILON {
                break;
            }
            t -= error / slope;
        }

        // Bisection always converges because x is monotonic in t
        let mut low = 0.0;
        let mut high = 1.0;
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let current = self.sample_x(t);
            if abs(current - x) < SOLVE_EPSILON {
                break;
            }
            if x > current {
                low = t;
            } else {
                high = t;
            }
            t = low + (high - low) * 0.5;
        }

        t
    }

    /// Map `x` in [0, 1] to the curve's y value
    pub fn y_for_x(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        self.sample_y(self.solve_t(x))
    }
}

/// Time-to-progress mapping for animations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    Cubic(CubicBezier),
}

impl Easing {
    /// Map elapsed fraction `t` in [0, 1] to progress in [0, 1]
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Cubic(curve) => curve.y_for_x(t),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Cubic(CubicBezier::EASE)
    }
}

/// Polynomial coefficients of a unit Bézier component with inner control
/// values `p1` and `p2`
fn coefficients(p1: f32, p2: f32) -> (f32, f32, f32) {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (a, b, c)
}

fn sample(p1: f32, p2: f32, t: f32) -> f32 {
    let (a, b, c) = coefficients(p1, p2);
    ((a * t + b) * t + c) * t
}

pub(super) fn abs(value: f32) -> f32 {
    if value < 0.0 { -value } else { value }
}
