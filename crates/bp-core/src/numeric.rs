use crate::{CoreError, CoreResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Checks every entry of a slice with [`ensure_finite`].
pub fn ensure_all_finite(values: &[Real], what: &'static str) -> CoreResult<()> {
    for &v in values {
        ensure_finite(v, what)?;
    }
    Ok(())
}

/// Rejects a pair of parallel slices whose lengths differ.
pub fn ensure_same_len(
    expected: &[Real],
    actual: &[Real],
    what: &'static str,
) -> CoreResult<()> {
    if expected.len() == actual.len() {
        Ok(())
    } else {
        Err(CoreError::LengthMismatch {
            what,
            expected: expected.len(),
            actual: actual.len(),
        })
    }
}
