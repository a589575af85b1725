//! Blend aggregation.
//!
//! [`blend`] is the single entry point front-ends call: it validates the
//! component set, reduces per-component indices to one blended index and
//! inverts it back into the property's units.

use bp_core::numeric::Real;
use tracing::{debug, trace};

use crate::composition::ComponentSet;
use crate::error::{BlendError, BlendResult};
use crate::index::{IndexTransform, Weighting};
use crate::property::PropertyKind;
use crate::smoke_point::{smoke_point, weighted_mean};

/// Outcome of one blend calculation, in the units of the inputs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlendedProperty {
    pub kind: PropertyKind,
    pub value: Real,
    /// Blended specific gravity (smoke point only).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub specific_gravity: Option<Real>,
    /// Blended viscosity blending index (viscosity only).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub viscosity_index: Option<Real>,
}

impl BlendedProperty {
    fn plain(kind: PropertyKind, value: Real) -> Self {
        Self {
            kind,
            value,
            specific_gravity: None,
            viscosity_index: None,
        }
    }

    pub fn unit(&self) -> &'static str {
        self.kind.unit()
    }
}

/// Reduce a component set to a single blended index.
///
/// RVP sums `flow · index` and divides by the total flow; every other
/// property sums `fraction · index`.
pub fn blend_index(transform: IndexTransform, set: &ComponentSet<'_>) -> BlendResult<Real> {
    let mut indices = Vec::with_capacity(set.len());
    for (value, flow) in set.iter() {
        let index = transform.index(value)?;
        trace!(kind = %transform.kind(), value, flow, index, "component index");
        indices.push(index);
    }

    let blended: Real = match transform.weighting() {
        Weighting::FlowRate => {
            let weighted: Real = set
                .flow_rates()
                .iter()
                .zip(&indices)
                .map(|(flow, index)| flow * index)
                .sum();
            weighted / set.total_flow()
        }
        Weighting::FlowFraction => set
            .fractions()
            .into_iter()
            .zip(&indices)
            .map(|(w, index)| w * index)
            .sum(),
    };

    if !blended.is_finite() {
        return Err(BlendError::DomainError {
            what: "blended index",
            value: blended,
        });
    }
    Ok(blended)
}

/// Blended viscosity blending index, before inversion to cSt.
pub fn viscosity_blend_index(viscosities: &[Real], flow_rates: &[Real]) -> BlendResult<Real> {
    let set = ComponentSet::new(viscosities, flow_rates)?;
    blend_index(IndexTransform::Viscosity, &set)
}

/// Blend one property over a component set.
///
/// `extra` is the blended aniline point [°C] and is required for
/// [`PropertyKind::SmokePoint`], whose `values` are specific gravities.
/// Passing it for any other kind is rejected.
pub fn blend(
    kind: PropertyKind,
    values: &[Real],
    flow_rates: &[Real],
    extra: Option<Real>,
) -> BlendResult<BlendedProperty> {
    let set = ComponentSet::new(values, flow_rates)?;

    let Some(transform) = kind.transform() else {
        let aniline_point = extra.ok_or_else(|| {
            BlendError::invalid("smoke point requires a blended aniline point")
        })?;
        let sg = weighted_mean(&set);
        let sp = smoke_point(aniline_point, sg)?;
        debug!(kind = %kind, components = set.len(), aniline_point, sg, sp, "blend complete");
        return Ok(BlendedProperty {
            specific_gravity: Some(sg),
            ..BlendedProperty::plain(kind, sp)
        });
    };

    if extra.is_some() {
        return Err(BlendError::invalid(format!(
            "{kind} takes no extra operand"
        )));
    }

    let index = blend_index(transform, &set)?;
    let value = transform.invert(index)?;
    debug!(kind = %kind, components = set.len(), index, value, "blend complete");

    let mut result = BlendedProperty::plain(kind, value);
    if kind == PropertyKind::Viscosity {
        result.viscosity_index = Some(index);
    }
    Ok(result)
}
