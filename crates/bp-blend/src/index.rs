//! Blending-index transforms.
//!
//! Each property is linearized by a monotonic transform so that indices mix
//! additively. `index` takes a component value in the caller's units and
//! `invert` maps a blended index back into those units; any scale change the
//! correlation needs (°F, °R, K) happens inside the pair.

use bp_core::numeric::{Real, Tolerances, nearly_equal};
use bp_core::units::temperature::{
    celsius_to_fahrenheit, celsius_to_kelvin, celsius_to_rankine, fahrenheit_to_celsius,
    kelvin_to_celsius, rankine_to_celsius,
};

use crate::error::{BlendError, BlendResult};
use crate::property::PropertyKind;

pub const RVP_EXPONENT: Real = 1.25;

pub const FLASH_POINT_EXPONENT: Real = -0.06;

pub const POUR_POINT_SCALE: Real = 3_262_000.0;
pub const POUR_POINT_REFERENCE_RANKINE: Real = 1000.0;
pub const POUR_POINT_EXPONENT: Real = 12.5;

/// Used as `1/x` going in and `x` coming out.
pub const CLOUD_POINT_EXPONENT: Real = 0.05;

pub const ANILINE_POINT_COEFFICIENT: Real = 0.00657;

pub const VISCOSITY_OFFSET: Real = 3.0;

/// How per-component indices are weighted before summation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// Σ(flow_i · index_i) / Σflow. RVP only.
    FlowRate,
    /// Σ(fraction_i · index_i).
    FlowFraction,
}

/// Index/inverse pair for one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexTransform {
    Rvp,
    FlashPoint,
    PourPoint,
    CloudPoint,
    AnilinePoint,
    Viscosity,
}

impl IndexTransform {
    pub fn kind(self) -> PropertyKind {
        match self {
            Self::Rvp => PropertyKind::Rvp,
            Self::FlashPoint => PropertyKind::FlashPoint,
            Self::PourPoint => PropertyKind::PourPoint,
            Self::CloudPoint => PropertyKind::CloudPoint,
            Self::AnilinePoint => PropertyKind::AnilinePoint,
            Self::Viscosity => PropertyKind::Viscosity,
        }
    }

    pub fn weighting(self) -> Weighting {
        match self {
            Self::Rvp => Weighting::FlowRate,
            _ => Weighting::FlowFraction,
        }
    }

    /// Blending index of a single component value.
    pub fn index(self, value: Real) -> BlendResult<Real> {
        match self {
            Self::Rvp => rvp_index(value),
            Self::FlashPoint => flash_point_index(value),
            Self::PourPoint => pour_point_index(value),
            Self::CloudPoint => cloud_point_index(value),
            Self::AnilinePoint => aniline_point_index(value),
            Self::Viscosity => viscosity_index(value),
        }
    }

    /// Property value for a (blended) index.
    pub fn invert(self, index: Real) -> BlendResult<Real> {
        match self {
            Self::Rvp => rvp_invert(index),
            Self::FlashPoint => flash_point_invert(index),
            Self::PourPoint => pour_point_invert(index),
            Self::CloudPoint => cloud_point_invert(index),
            Self::AnilinePoint => aniline_point_invert(index),
            Self::Viscosity => viscosity_invert(index),
        }
    }
}

fn finite(value: Real, what: &'static str) -> BlendResult<Real> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BlendError::DomainError { what, value })
    }
}

fn positive(value: Real, what: &'static str) -> BlendResult<Real> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(BlendError::DomainError { what, value })
    }
}

fn rvp_index(psi: Real) -> BlendResult<Real> {
    if psi < 0.0 {
        return Err(BlendError::DomainError {
            what: "RVP (psi)",
            value: psi,
        });
    }
    finite(psi.powf(RVP_EXPONENT), "RVP index")
}

fn rvp_invert(index: Real) -> BlendResult<Real> {
    if index < 0.0 {
        return Err(BlendError::DomainError {
            what: "RVP index",
            value: index,
        });
    }
    finite(index.powf(1.0 / RVP_EXPONENT), "RVP (psi)")
}

fn flash_point_index(celsius: Real) -> BlendResult<Real> {
    let fahrenheit = positive(celsius_to_fahrenheit(celsius), "flash point (°F)")?;
    finite(fahrenheit.powf(1.0 / FLASH_POINT_EXPONENT), "flash point index")
}

fn flash_point_invert(index: Real) -> BlendResult<Real> {
    let index = positive(index, "flash point index")?;
    let fahrenheit = finite(index.powf(FLASH_POINT_EXPONENT), "flash point (°F)")?;
    Ok(fahrenheit_to_celsius(fahrenheit))
}

fn pour_point_index(celsius: Real) -> BlendResult<Real> {
    let rankine = positive(celsius_to_rankine(celsius), "pour point (°R)")?;
    finite(
        POUR_POINT_SCALE * (rankine / POUR_POINT_REFERENCE_RANKINE).powf(POUR_POINT_EXPONENT),
        "pour point index",
    )
}

fn pour_point_invert(index: Real) -> BlendResult<Real> {
    let index = positive(index, "pour point index")?;
    let rankine = (index / POUR_POINT_SCALE).powf(1.0 / POUR_POINT_EXPONENT)
        * POUR_POINT_REFERENCE_RANKINE;
    Ok(rankine_to_celsius(finite(rankine, "pour point (°R)")?))
}

fn cloud_point_index(celsius: Real) -> BlendResult<Real> {
    let kelvin = positive(celsius_to_kelvin(celsius), "cloud point (K)")?;
    finite(kelvin.powf(1.0 / CLOUD_POINT_EXPONENT), "cloud point index")
}

fn cloud_point_invert(index: Real) -> BlendResult<Real> {
    let index = positive(index, "cloud point index")?;
    let kelvin = finite(index.powf(CLOUD_POINT_EXPONENT), "cloud point (K)")?;
    Ok(kelvin_to_celsius(kelvin))
}

fn aniline_point_index(celsius: Real) -> BlendResult<Real> {
    let kelvin = positive(celsius_to_kelvin(celsius), "aniline point (K)")?;
    Ok(kelvin.ln() / ANILINE_POINT_COEFFICIENT)
}

fn aniline_point_invert(index: Real) -> BlendResult<Real> {
    let kelvin = finite((index * ANILINE_POINT_COEFFICIENT).exp(), "aniline point (K)")?;
    Ok(kelvin_to_celsius(kelvin))
}

fn viscosity_index(cst: Real) -> BlendResult<Real> {
    let cst = positive(cst, "viscosity (cSt)")?;
    let log_v = cst.log10();
    if nearly_equal(log_v, -VISCOSITY_OFFSET, Tolerances::default()) {
        return Err(BlendError::DivisionByZero {
            what: "viscosity blending index (3 + log10 v)",
        });
    }
    Ok(log_v / (VISCOSITY_OFFSET + log_v))
}

fn viscosity_invert(index: Real) -> BlendResult<Real> {
    // 1 - I in the denominator
    if nearly_equal(index, 1.0, Tolerances::default()) {
        return Err(BlendError::DomainError {
            what: "viscosity blending index",
            value: index,
        });
    }
    let exponent = VISCOSITY_OFFSET * index / (1.0 - index);
    // Overflow from below 1, underflow to 0 from above
    let cst = 10_f64.powf(exponent);
    if !cst.is_finite() || cst <= 0.0 {
        return Err(BlendError::DomainError {
            what: "viscosity blending index",
            value: index,
        });
    }
    Ok(cst)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [IndexTransform; 6] = [
        IndexTransform::Rvp,
        IndexTransform::FlashPoint,
        IndexTransform::PourPoint,
        IndexTransform::CloudPoint,
        IndexTransform::AnilinePoint,
        IndexTransform::Viscosity,
    ];

    fn close(a: Real, b: Real) -> bool {
        nearly_equal(
            a,
            b,
            Tolerances {
                abs: 1e-9,
                rel: 1e-9,
            },
        )
    }

    #[test]
    fn kind_matches_property_transform() {
        for t in ALL {
            assert_eq!(t.kind().transform(), Some(t));
        }
    }

    #[test]
    fn only_rvp_weights_by_raw_flow() {
        for t in ALL {
            let expected = if t == IndexTransform::Rvp {
                Weighting::FlowRate
            } else {
                Weighting::FlowFraction
            };
            assert_eq!(t.weighting(), expected);
        }
    }

    #[test]
    fn rvp_index_values() {
        assert!(close(IndexTransform::Rvp.index(1.0).unwrap(), 1.0));
        assert!(close(
            IndexTransform::Rvp.index(11.1).unwrap(),
            11.1_f64.powf(1.25)
        ));
        assert!(close(IndexTransform::Rvp.index(0.0).unwrap(), 0.0));
    }

    #[test]
    fn flash_point_goes_through_fahrenheit() {
        let c: f64 = 121.11;
        let f = c * 9.0 / 5.0 + 32.0;
        let expected = f.powf(1.0 / -0.06);
        let got = IndexTransform::FlashPoint.index(c).unwrap();
        assert!(
            nearly_equal(
                got,
                expected,
                Tolerances {
                    abs: 0.0,
                    rel: 1e-9
                }
            ),
            "{got} vs {expected}"
        );
    }

    #[test]
    fn pour_point_goes_through_rankine() {
        let c: f64 = -15.0;
        let r = (c + 273.15) * 1.8;
        let expected = 3_262_000.0 * (r / 1000.0).powf(12.5);
        assert!(close(IndexTransform::PourPoint.index(c).unwrap(), expected));
    }

    #[test]
    fn aniline_point_uses_natural_log_of_kelvin() {
        let c = 71.0;
        let expected = (c + 273.15_f64).ln() / 0.00657;
        assert!(close(IndexTransform::AnilinePoint.index(c).unwrap(), expected));
    }

    #[test]
    fn viscosity_index_is_in_unit_interval_above_one_cst() {
        for v in [1.5, 75.0, 100.0, 200.0, 1.0e5] {
            let i = IndexTransform::Viscosity.index(v).unwrap();
            assert!(i > 0.0 && i < 1.0, "index {i} for {v} cSt");
        }
        assert_eq!(IndexTransform::Viscosity.index(1.0).unwrap(), 0.0);
    }

    #[test]
    fn round_trips_at_default_inputs() {
        let cases: [(IndexTransform, &[Real]); 6] = [
            (IndexTransform::Rvp, &[11.1, 1.0, 2.8, 13.9]),
            (IndexTransform::FlashPoint, &[121.11, 26.67, 70.56]),
            (IndexTransform::PourPoint, &[-15.0, -3.0, 42.0, 45.0]),
            (IndexTransform::CloudPoint, &[-5.0, 5.0, 10.0]),
            (IndexTransform::AnilinePoint, &[71.0, 60.7, 36.8]),
            (IndexTransform::Viscosity, &[75.0, 100.0, 200.0]),
        ];
        for (t, values) in cases {
            for &x in values {
                let back = t.invert(t.index(x).unwrap()).unwrap();
                assert!(
                    nearly_equal(
                        back,
                        x,
                        Tolerances {
                            abs: 1e-9,
                            rel: 1e-6
                        }
                    ),
                    "{t:?}: {x} -> {back}"
                );
            }
        }
    }

    #[test]
    fn negative_rvp_is_domain_error() {
        let err = IndexTransform::Rvp.index(-1.0).unwrap_err();
        assert!(matches!(err, BlendError::DomainError { .. }));
    }

    #[test]
    fn sub_zero_absolute_bases_are_domain_errors() {
        // -17.78 °C is 0 °F; below -273.15 °C both K and °R go negative
        assert!(matches!(
            IndexTransform::FlashPoint.index(-20.0),
            Err(BlendError::DomainError { .. })
        ));
        assert!(matches!(
            IndexTransform::PourPoint.index(-300.0),
            Err(BlendError::DomainError { .. })
        ));
        assert!(matches!(
            IndexTransform::CloudPoint.index(-274.0),
            Err(BlendError::DomainError { .. })
        ));
        assert!(matches!(
            IndexTransform::AnilinePoint.index(-280.0),
            Err(BlendError::DomainError { .. })
        ));
    }

    #[test]
    fn non_positive_viscosity_is_domain_error() {
        for v in [0.0, -5.0] {
            assert!(matches!(
                IndexTransform::Viscosity.index(v),
                Err(BlendError::DomainError { .. })
            ));
        }
    }

    #[test]
    fn viscosity_index_denominator_zero() {
        let err = IndexTransform::Viscosity.index(0.001).unwrap_err();
        assert!(matches!(err, BlendError::DivisionByZero { .. }));
    }

    #[test]
    fn viscosity_invert_at_one_is_domain_error() {
        let err = IndexTransform::Viscosity.invert(1.0).unwrap_err();
        assert!(matches!(err, BlendError::DomainError { .. }));

        // Close enough to 1 that 10^(3I/(1-I)) overflows
        let err = IndexTransform::Viscosity.invert(1.0 - 1e-6).unwrap_err();
        assert!(matches!(err, BlendError::DomainError { .. }));
    }

    #[test]
    fn viscosity_invert_just_above_one_is_domain_error() {
        // 3I/(1-I) runs to -inf and 10^x underflows to zero
        let err = IndexTransform::Viscosity.invert(1.0 + 1e-8).unwrap_err();
        assert!(
            matches!(
                err,
                BlendError::DomainError {
                    what: "viscosity blending index",
                    ..
                }
            ),
            "{err:?}"
        );

        // Well above 1 is still a small positive viscosity
        let v = IndexTransform::Viscosity.invert(2.0).unwrap();
        assert!(close(v, 1e-6), "{v}");
    }

    #[test]
    fn non_positive_indices_cannot_be_inverted() {
        for t in [
            IndexTransform::FlashPoint,
            IndexTransform::PourPoint,
            IndexTransform::CloudPoint,
        ] {
            assert!(matches!(t.invert(0.0), Err(BlendError::DomainError { .. })));
        }
        assert!(matches!(
            IndexTransform::Rvp.invert(-1.0),
            Err(BlendError::DomainError { .. })
        ));
    }
}
