use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kind::{FractalKind, JULIA_CONSTANT, LAMBDA_CONSTANT};
use std::ops::ControlFlow;

/// Iteration cap used by the reference renderer.
pub const REFERENCE_MAX_ITERATIONS: u32 = 155;

/// Outcome of iterating one plane point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeTime {
    /// `|z|` reached the escape radius after this many steps.
    Escaped(u32),
    /// The cap ran out with `|z|` still inside the radius.
    Bounded(u32),
}

impl EscapeTime {
    #[must_use]
    pub fn iterations(self) -> u32 {
        match self {
            Self::Escaped(iterations) | Self::Bounded(iterations) => iterations,
        }
    }

    #[must_use]
    pub fn is_bounded(self) -> bool {
        matches!(self, Self::Bounded(_))
    }
}

/// One step of the recurrence for `kind`. `origin` is the pixel's starting point.
#[must_use]
pub fn step(kind: FractalKind, z: Complex, origin: Complex) -> Complex {
    match kind {
        FractalKind::Mandelbrot => z * z + origin,
        FractalKind::Julia => z * z + JULIA_CONSTANT,
        FractalKind::Lambda => {
            let Complex { real: c_re, imag: c_im } = LAMBDA_CONSTANT;
            let Complex { real: re, imag: im } = z;

            Complex {
                real: (c_re * re) - (c_re * re * re) + (c_re * im * im) - (c_im * im)
                    + (2.0 * c_im * re * im),
                imag: (c_re * im) + (c_im * re) - (c_im * re * re) + (c_im * im * im)
                    - (2.0 * c_re * re * im),
            }
        }
    }
}

/// Iterates `point` until `|z| >= escape_radius` or the step counter passes
/// `max_iterations`.
///
/// A point that starts outside the radius escapes after zero steps. A point
/// that never escapes reports `max_iterations + 1` steps. A NaN modulus counts
/// as escaped.
#[must_use]
pub fn evaluate(
    kind: FractalKind,
    point: Complex,
    max_iterations: u32,
    escape_radius: f64,
) -> EscapeTime {
    let inside = |z: Complex| z.modulus() < escape_radius;
    let limit = max_iterations.saturating_add(1);

    let outcome = (0..limit).try_fold(point, |z, iteration| {
        if inside(z) {
            ControlFlow::Continue(step(kind, z, point))
        } else {
            ControlFlow::Break(iteration)
        }
    });

    match outcome {
        ControlFlow::Break(iterations) => EscapeTime::Escaped(iterations),
        ControlFlow::Continue(z) if inside(z) => EscapeTime::Bounded(limit),
        ControlFlow::Continue(_) => EscapeTime::Escaped(limit),
    }
}
