//! bp-blend: blended physical properties for mixtures of liquid streams.
//!
//! Provides:
//! - Component sets and flow fractions
//! - Blending-index transforms (RVP, flash, pour, cloud and aniline point, viscosity)
//! - The blend aggregator and its single entry point [`blend`]
//! - The smoke point correlation
//!
//! # Architecture
//!
//! Every index property follows the same pattern: transform each component
//! value into a blending index, weight the indices by flow, then invert the
//! blended index back into the original units. The set of properties is a
//! closed enum ([`PropertyKind`]); each index property carries its own
//! [`IndexTransform`] with the unit conversion baked in.
//!
//! # Example
//!
//! ```
//! use bp_blend::{PropertyKind, blend};
//!
//! let rvps = [11.1, 1.0, 2.8, 13.9];
//! let flows = [5000.0, 4000.0, 6000.0, 7000.0];
//!
//! let result = blend(PropertyKind::Rvp, &rvps, &flows, None).unwrap();
//! println!("Blended RVP: {:.2} {}", result.value, result.unit());
//! ```

pub mod blend;
pub mod composition;
pub mod error;
pub mod index;
pub mod property;
pub mod smoke_point;

// Re-exports for ergonomics
pub use blend::{BlendedProperty, blend, blend_index, viscosity_blend_index};
pub use composition::{ComponentSet, fractions, total_flow};
pub use error::{BlendError, BlendResult};
pub use index::{IndexTransform, Weighting};
pub use property::{PropertyKind, UnknownPropertyError};
pub use smoke_point::{smoke_point, smoke_point_from_components, specific_gravity_blend};
