//! The hive map: a bounded 2D grid of [`Cell`](skep_core::Cell)s.
//!
//! [`HiveMap`] is the arena everything else operates on. It is immutable
//! after construction and exposes bounds-checked cell access, 8- and
//! 4-connected neighbour enumeration with absorbing edges, and the two
//! occupancy queries the original system ships: the row-major bee scan
//! ([`HiveMap::bees`]) and 4-connected swarm detection
//! ([`HiveMap::swarms`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod map;
mod swarm;

pub use error::MapError;
pub use map::HiveMap;
