//! Component sets and flow fractions.

use crate::error::{BlendError, BlendResult};
use bp_core::numeric::{Real, ensure_all_finite, ensure_finite, ensure_same_len};

/// Parallel property values and flow rates for one blend calculation.
///
/// Borrowed from the caller; validated once on construction so the index
/// transforms never see mismatched, empty, non-finite, or non-positive flows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentSet<'a> {
    values: &'a [Real],
    flow_rates: &'a [Real],
    total_flow: Real,
}

impl<'a> ComponentSet<'a> {
    /// Validates a component set.
    ///
    /// Fails with `InvalidInput` on empty or mismatched slices and non-finite
    /// entries, and with the errors of [`total_flow`] on bad flow rates.
    pub fn new(values: &'a [Real], flow_rates: &'a [Real]) -> BlendResult<Self> {
        if values.is_empty() {
            return Err(BlendError::invalid("empty component set"));
        }
        ensure_same_len(values, flow_rates, "flow rates vs property values")?;
        ensure_all_finite(values, "property value")?;
        let total_flow = total_flow(flow_rates)?;

        Ok(Self {
            values,
            flow_rates,
            total_flow,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &'a [Real] {
        self.values
    }

    pub fn flow_rates(&self) -> &'a [Real] {
        self.flow_rates
    }

    /// Σ flow rate, always > 0.
    pub fn total_flow(&self) -> Real {
        self.total_flow
    }

    /// Flow fractions, one per component, summing to 1.
    pub fn fractions(&self) -> Vec<Real> {
        self.flow_rates
            .iter()
            .map(|flow| flow / self.total_flow)
            .collect()
    }

    /// Iterate over `(value, flow_rate)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Real, Real)> + 'a {
        self.values.iter().copied().zip(self.flow_rates.iter().copied())
    }
}

/// Total flow of a mixture.
///
/// Checks run in order: empty or non-finite input is `InvalidInput`, a zero
/// sum is `DivisionByZero`, and only then is any non-positive entry rejected
/// as `InvalidInput`.
pub fn total_flow(flow_rates: &[Real]) -> BlendResult<Real> {
    if flow_rates.is_empty() {
        return Err(BlendError::invalid("no flow rates"));
    }
    ensure_all_finite(flow_rates, "flow rate")?;

    let total: Real = flow_rates.iter().sum();
    if total == 0.0 {
        return Err(BlendError::DivisionByZero {
            what: "total flow rate",
        });
    }
    ensure_finite(total, "total flow rate")?;

    if let Some(bad) = flow_rates.iter().find(|flow| **flow <= 0.0) {
        return Err(BlendError::invalid(format!(
            "flow rate must be positive, got {bad}"
        )));
    }

    Ok(total)
}

/// Normalized flow fractions: `flow_i / Σflow`.
pub fn fractions(flow_rates: &[Real]) -> BlendResult<Vec<Real>> {
    let total = total_flow(flow_rates)?;
    Ok(flow_rates.iter().map(|flow| flow / total).collect())
}
