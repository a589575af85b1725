// bp-core/src/units.rs

use uom::si::f64::ThermodynamicTemperature as UomThermodynamicTemperature;
use uom::si::thermodynamic_temperature::{degree_celsius, degree_fahrenheit, degree_rankine, kelvin};

use crate::Real;

// Public canonical unit types (SI, f64)
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn degc(v: Real) -> Temperature {
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn degf(v: Real) -> Temperature {
    Temperature::new::<degree_fahrenheit>(v)
}

#[inline]
pub fn degr(v: Real) -> Temperature {
    Temperature::new::<degree_rankine>(v)
}

#[inline]
pub fn k(v: Real) -> Temperature {
    Temperature::new::<kelvin>(v)
}

/// Scale-to-scale conversions on raw numbers.
///
/// Blending indices are defined on bare numbers in a specific scale, so these
/// helpers go through [`Temperature`] and hand back the number again.
pub mod temperature {
    use super::*;

    pub fn celsius_to_fahrenheit(c: Real) -> Real {
        degc(c).get::<degree_fahrenheit>()
    }

    pub fn fahrenheit_to_celsius(f: Real) -> Real {
        degf(f).get::<degree_celsius>()
    }

    pub fn celsius_to_rankine(c: Real) -> Real {
        degc(c).get::<degree_rankine>()
    }

    pub fn rankine_to_celsius(r: Real) -> Real {
        degr(r).get::<degree_celsius>()
    }

    pub fn celsius_to_kelvin(c: Real) -> Real {
        degc(c).get::<kelvin>()
    }

    pub fn kelvin_to_celsius(t: Real) -> Real {
        k(t).get::<degree_celsius>()
    }
}
