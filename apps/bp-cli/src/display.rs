//! Example inputs and result formatting.

use bp_blend::{BlendedProperty, PropertyKind};
use serde::Serialize;

pub const DEFAULT_FLOW_RATES: &str = "5000, 4000, 6000, 7000";

/// Blended aniline point [°C] used for smoke point when none is given.
pub const DEFAULT_ANILINE_POINT: f64 = 56.54;

/// Example component values for a property.
pub fn default_values(kind: PropertyKind) -> &'static str {
    match kind {
        PropertyKind::Rvp => "11.1, 1.0, 2.8, 13.9",
        PropertyKind::FlashPoint => "121.11, 26.67, 70.56",
        PropertyKind::PourPoint => "-15, -3, 42, 45",
        PropertyKind::CloudPoint => "-5, 5, 10",
        PropertyKind::AnilinePoint => "71.0, 60.7, 36.8",
        PropertyKind::SmokePoint => "0.75, 0.8, 0.85",
        PropertyKind::Viscosity => "75, 100, 200",
    }
}

/// Default flows cut down to `n` components.
pub fn truncate_flows(flows: &[f64], n: usize) -> Vec<f64> {
    flows.iter().copied().take(n).collect()
}

/// Human-readable lines for a blend result.
pub fn format_result(result: &BlendedProperty) -> Vec<String> {
    let unit = result.unit();
    match result.kind {
        PropertyKind::SmokePoint => {
            let mut lines = Vec::with_capacity(2);
            if let Some(sg) = result.specific_gravity {
                lines.push(format!("Blended Specific Gravity: {sg:.3}"));
            }
            lines.push(format!("Smoke Point of the Blend: {:.2} {unit}", result.value));
            lines
        }
        PropertyKind::Viscosity => {
            let mut lines = Vec::with_capacity(2);
            if let Some(index) = result.viscosity_index {
                lines.push(format!("Blended Viscosity Index: {index:.4}"));
            }
            lines.push(format!("Blended Viscosity: {:.2} {unit}", result.value));
            lines
        }
        kind => vec![format!("Blended {}: {:.2} {unit}", kind.label(), result.value)],
    }
}

/// Machine-readable report: the inputs used plus the result.
#[derive(Debug, Serialize)]
pub struct BlendReport<'a> {
    pub values: &'a [f64],
    pub flow_rates: &'a [f64],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aniline_point: Option<f64>,
    pub unit: &'static str,
    #[serde(flatten)]
    pub result: &'a BlendedProperty,
}
