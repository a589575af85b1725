//! Smoke point correlation.
//!
//! Unlike the other properties, smoke point is not blended through an index:
//! it is evaluated from the blend's aniline point and specific gravity.

use bp_core::numeric::{Real, ensure_finite};
use tracing::debug;

use crate::blend::blend_index;
use crate::composition::ComponentSet;
use crate::error::{BlendError, BlendResult};
use crate::index::IndexTransform;

const INTERCEPT: Real = -255.26;
const ANILINE_COEFFICIENT: Real = 2.04;
const LN_SG_COEFFICIENT: Real = -240.8;
const SG_OVER_AP_COEFFICIENT: Real = 7727.0;

/// Fraction-weighted mean specific gravity.
pub fn specific_gravity_blend(
    specific_gravities: &[Real],
    flow_rates: &[Real],
) -> BlendResult<Real> {
    let set = ComponentSet::new(specific_gravities, flow_rates)?;
    Ok(weighted_mean(&set))
}

/// Fraction-weighted mean of an already validated component set.
pub(crate) fn weighted_mean(set: &ComponentSet<'_>) -> Real {
    set.fractions()
        .into_iter()
        .zip(set.values())
        .map(|(w, v)| w * v)
        .sum()
}

/// Smoke point [mm] from blended aniline point [°C] and specific gravity.
///
/// `SP = -255.26 + 2.04·AP - 240.8·ln(SG) + 7727·(SG/AP)`
pub fn smoke_point(aniline_point: Real, specific_gravity: Real) -> BlendResult<Real> {
    ensure_finite(aniline_point, "aniline point")?;
    ensure_finite(specific_gravity, "specific gravity")?;

    if aniline_point == 0.0 {
        return Err(BlendError::DivisionByZero {
            what: "smoke point (SG / aniline point)",
        });
    }
    if specific_gravity <= 0.0 {
        return Err(BlendError::DomainError {
            what: "specific gravity (ln SG)",
            value: specific_gravity,
        });
    }

    Ok(INTERCEPT
        + ANILINE_COEFFICIENT * aniline_point
        + LN_SG_COEFFICIENT * specific_gravity.ln()
        + SG_OVER_AP_COEFFICIENT * (specific_gravity / aniline_point))
}

/// Blend aniline points and specific gravities with the same flows, then
/// evaluate the smoke point.
///
/// Returns `(smoke_point, aniline_point, specific_gravity)`.
pub fn smoke_point_from_components(
    aniline_points: &[Real],
    specific_gravities: &[Real],
    flow_rates: &[Real],
) -> BlendResult<(Real, Real, Real)> {
    let transform = IndexTransform::AnilinePoint;
    let set = ComponentSet::new(aniline_points, flow_rates)?;
    let aniline_point = transform.invert(blend_index(transform, &set)?)?;
    let specific_gravity = specific_gravity_blend(specific_gravities, flow_rates)?;
    debug!(
        aniline_point,
        specific_gravity, "smoke point inputs blended from components"
    );

    let sp = smoke_point(aniline_point, specific_gravity)?;
    Ok((sp, aniline_point, specific_gravity))
}
