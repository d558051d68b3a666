//! The two curves of the demo, sampled over two turns around zero.

use std::f64::consts::PI;
use ndarray::Array1;

/// Number of samples of the x axis.
pub const SAMPLES: usize = 600;
pub const X_MIN: f64 = -2. * PI;
pub const X_MAX: f64 = 2. * PI;

/// [`SAMPLES`] evenly spaced angles from [`X_MIN`] to [`X_MAX`]
/// (both included).
pub fn angles() -> Array1<f64> {
    Array1::linspace(X_MIN, X_MAX, SAMPLES)
}

/// cos(1.2 x) exp(-0.1 x²)
pub fn decaying_cosine(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(|x| (1.2 * x).cos() * (-0.1 * x * x).exp())
}

/// 0.4 sin(0.8 x + 1) + 0.2 cos(2.2 x)
pub fn mixed_harmonics(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(|x| 0.4 * (0.8 * x + 1.).sin() + 0.2 * (2.2 * x).cos())
}
