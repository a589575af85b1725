//! Supported blend properties.

use std::fmt;
use std::str::FromStr;

use crate::index::IndexTransform;

/// Physical property selected for a blend calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PropertyKind {
    /// Reid vapor pressure [psi]
    Rvp,
    /// Flash point [°C]
    FlashPoint,
    /// Pour point [°C]
    PourPoint,
    /// Cloud point [°C]
    CloudPoint,
    /// Aniline point [°C]
    AnilinePoint,
    /// Smoke point [mm], derived from blended aniline point and specific gravity
    SmokePoint,
    /// Kinematic viscosity [cSt]
    Viscosity,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 7] = [
        Self::Rvp,
        Self::FlashPoint,
        Self::PourPoint,
        Self::CloudPoint,
        Self::AnilinePoint,
        Self::SmokePoint,
        Self::Viscosity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Rvp => "RVP",
            Self::FlashPoint => "Flash Point",
            Self::PourPoint => "Pour Point",
            Self::CloudPoint => "Cloud Point",
            Self::AnilinePoint => "Aniline Point",
            Self::SmokePoint => "Smoke Point",
            Self::Viscosity => "Viscosity",
        }
    }

    /// Command-line style identifier, e.g. `flash-point`.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Rvp => "rvp",
            Self::FlashPoint => "flash-point",
            Self::PourPoint => "pour-point",
            Self::CloudPoint => "cloud-point",
            Self::AnilinePoint => "aniline-point",
            Self::SmokePoint => "smoke-point",
            Self::Viscosity => "viscosity",
        }
    }

    /// Unit of the blended result.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Rvp => "psi",
            Self::FlashPoint | Self::PourPoint | Self::CloudPoint | Self::AnilinePoint => "°C",
            Self::SmokePoint => "mm",
            Self::Viscosity => "cSt",
        }
    }

    /// What the per-component values mean for this kind.
    ///
    /// Smoke point is the odd one out: its components carry specific gravities.
    pub fn component_label(self) -> &'static str {
        match self {
            Self::Rvp => "RVP [psi]",
            Self::FlashPoint => "flash point [°C]",
            Self::PourPoint => "pour point [°C]",
            Self::CloudPoint => "cloud point [°C]",
            Self::AnilinePoint => "aniline point [°C]",
            Self::SmokePoint => "specific gravity [-]",
            Self::Viscosity => "viscosity [cSt]",
        }
    }

    /// Blending-index transform, `None` for derived properties.
    pub fn transform(self) -> Option<IndexTransform> {
        match self {
            Self::Rvp => Some(IndexTransform::Rvp),
            Self::FlashPoint => Some(IndexTransform::FlashPoint),
            Self::PourPoint => Some(IndexTransform::PourPoint),
            Self::CloudPoint => Some(IndexTransform::CloudPoint),
            Self::AnilinePoint => Some(IndexTransform::AnilinePoint),
            Self::Viscosity => Some(IndexTransform::Viscosity),
            Self::SmokePoint => None,
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown property '{0}' (expected one of: rvp, flash-point, pour-point, cloud-point, aniline-point, smoke-point, viscosity)")]
pub struct UnknownPropertyError(pub String);

impl FromStr for PropertyKind {
    type Err = UnknownPropertyError;

    /// Accepts the slug or the display label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == wanted)
            .ok_or_else(|| UnknownPropertyError(s.to_string()))
    }
}
