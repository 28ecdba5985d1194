//! Workspace umbrella crate: re-exports [`qthloc_core`] so the demos can
//! `use qthloc_rs::prelude::*`.

pub use qthloc_core::*;
