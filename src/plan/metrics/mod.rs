mod compactness;
mod efficiency;

/// Round a score to the three decimal places reported to callers.
#[inline]
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
