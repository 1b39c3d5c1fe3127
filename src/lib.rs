//! quirktable - per-chassis quirk comparison tables for MWO mechs
//!
//! Fetches mech and omnipod data from the smurfy-net API, reduces each
//! chassis to quirks shared by every variant vs. quirks unique to one,
//! and writes the result as one HTML table per chassis.

pub mod api;
pub mod core;
pub mod matrix;
pub mod mech;
pub mod render;
