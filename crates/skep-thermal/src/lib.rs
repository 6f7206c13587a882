//! Thermal-field computation over hive maps.
//!
//! A [`ThermalModel`] holds the climate parameters (heater, cooler, and
//! ambient temperatures plus a conduction factor) and computes a
//! [`ThermalField`]: one temperature per map cell. Heaters and coolers
//! pin their own cells; walls read as NaN; every other cell is warmed
//! and chilled in proportion to its breadth-first search distance to the
//! nearest heater and cooler.
//!
//! Constructed via the builder pattern: [`ThermalModel::builder`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod thermal;

pub use error::FieldError;
pub use thermal::{ThermalField, ThermalModel, ThermalModelBuilder};
