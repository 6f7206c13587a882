//! Benchmark profiles for the Skep swarm-thermal toolkit.
//!
//! Provides the standard maps the benches run against:
//!
//! - [`reference_terrain`]: 24×24 scattered terrain for whole-field
//!   computation (breadth-first search per open cell is quadratic in
//!   cell count, so field benches stay small).
//! - [`stress_terrain`]: 100×100 scattered terrain for linear-time map
//!   queries (neighbours, bee scan, swarms).

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use skep_map::HiveMap;
use skep_test_utils::scatter_map;

/// 24x24 terrain with scattered heaters, coolers, walls, and bees.
pub fn reference_terrain() -> HiveMap {
    scatter_map(24, 24, 0x5eed)
}

/// 100x100 terrain with scattered heaters, coolers, walls, and bees.
pub fn stress_terrain() -> HiveMap {
    scatter_map(100, 100, 0x5eed)
}
