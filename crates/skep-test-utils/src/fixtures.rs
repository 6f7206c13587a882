//! Reusable hive-map fixtures.
//!
//! - [`open_map`] — all-empty terrain of any size.
//! - [`reference_map`] — the 3×4 layout with a wall detour whose
//!   temperatures are verified by hand in the thermal integration tests.
//! - [`sealed_room_map`] — a 3×3 wall ring around one unreachable cell.
//! - [`scatter_map`] — deterministic pseudo-random terrain for benchmarks.

use skep_core::{Cell, Direction};
use skep_map::HiveMap;

/// An all-empty map of the given dimensions.
pub fn open_map(rows: u32, cols: u32) -> HiveMap {
    let n = (rows as usize) * (cols as usize);
    HiveMap::from_cells(rows, cols, vec![Cell::Empty; n])
        .expect("open_map fixture dimensions must be valid")
}

/// The 3×4 reference layout used by the thermal integration tests.
///
/// ```text
/// heater  empty  empty  cooler
/// empty   empty  wall   empty
/// empty   bee↑   empty  empty
/// ```
///
/// The wall forces an 8-connected detour between the right column and
/// the heater, which makes hand-computed distances interesting.
pub fn reference_map() -> HiveMap {
    #[rustfmt::skip]
    let codes = [
        6, 0, 0, 7,
        0, 0, 5, 0,
        0, 1, 0, 0,
    ];
    HiveMap::from_codes(3, 4, &codes).expect("reference_map fixture must decode")
}

/// A 3×3 map whose centre cell is sealed off by the surrounding wall ring.
pub fn sealed_room_map() -> HiveMap {
    #[rustfmt::skip]
    let codes = [
        5, 5, 5,
        5, 0, 5,
        5, 5, 5,
    ];
    HiveMap::from_codes(3, 3, &codes).expect("sealed_room_map fixture must decode")
}

/// Deterministic pseudo-random terrain for benchmarks.
///
/// Roughly 1 cell in 64 is a heater, 1 in 64 a cooler, 1 in 16 a wall,
/// and 1 in 16 a bee; everything else is empty. The same `salt` always
/// yields the same map.
pub fn scatter_map(rows: u32, cols: u32, salt: u64) -> HiveMap {
    let n = (rows as usize) * (cols as usize);
    let mut cells = Vec::with_capacity(n);
    for i in 0..n as u64 {
        // Deterministic multiplicative hashing; no RNG dependency.
        let h = (i ^ salt).wrapping_mul(6364136223846793007) >> 32;
        let cell = match h % 64 {
            0 => Cell::Heater,
            1 => Cell::Cooler,
            2..=5 => Cell::Wall,
            6..=9 => Cell::Bee(Direction::ALL[(h % 4) as usize]),
            _ => Cell::Empty,
        };
        cells.push(cell);
    }
    HiveMap::from_cells(rows, cols, cells).expect("scatter_map fixture dimensions must be valid")
}
