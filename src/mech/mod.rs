//! Mech domain types: quirks, components, pods and the two chassis kinds.

pub mod battlemech;
pub mod component;
pub mod hardpoints;
pub mod omnimech;
pub mod omnipod;
pub mod quirk;

pub use battlemech::Battlemech;
pub use component::Component;
pub use omnimech::Omnimech;
pub use omnipod::Omnipod;
pub use quirk::{Quirk, RawValue};

/// A finished per-chassis quirk table, ready for the renderer.
pub trait QuirkTable {
    /// Chassis name, uppercased.
    fn name(&self) -> &str;

    /// The string matrix, header row first, SHARED row last.
    fn matrix(&self) -> &[Vec<String>];
}
