//! Skep: a swarm-thermal toolkit for grid worlds.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Skep sub-crates. For most users, adding `skep` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use skep::prelude::*;
//!
//! // A 3x4 hive: heater top-left, cooler top-right, one wall, one bee.
//! let map = HiveMap::from_codes(3, 4, &[
//!     6, 0, 0, 7,
//!     0, 0, 5, 0,
//!     0, 1, 0, 0,
//! ]).unwrap();
//!
//! let model = ThermalModel::builder().build().unwrap();
//! let field = model.field(&map);
//!
//! // Cells nearer the heater run warmer.
//! assert!(field.get(0, 1).unwrap() > field.get(0, 2).unwrap());
//!
//! // The lone bee forms a swarm of one.
//! assert_eq!(map.swarms(), vec![vec![(2, 1)]]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `skep-core` | `State` and its ordering, headings, cells, decode errors |
//! | [`map`] | `skep-map` | The `HiveMap` grid, neighbours, bees, swarms |
//! | [`thermal`] | `skep-thermal` | Thermal model and computed fields |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`skep-core`).
///
/// Contains the [`types::State`] search record with its position
/// ordering ([`types::ByPosition`]), bee headings, the cell alphabet,
/// and raw-code decode errors.
pub use skep_core as types;

/// The hive-map grid and spatial queries (`skep-map`).
///
/// Provides [`map::HiveMap`] with bounds-checked access, neighbour
/// enumeration, the bee scan, and swarm detection.
pub use skep_map as map;

/// Thermal-field computation (`skep-thermal`).
///
/// Build a [`thermal::ThermalModel`] and compute per-cell
/// [`thermal::ThermalField`]s over a hive map.
pub use skep_thermal as thermal;

/// Common imports for typical Skep usage.
///
/// ```rust
/// use skep::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use skep_core::{ByPosition, Cell, CodeError, Direction, State};

    // Map
    pub use skep_map::{HiveMap, MapError};

    // Thermal
    pub use skep_thermal::{FieldError, ThermalField, ThermalModel};
}
