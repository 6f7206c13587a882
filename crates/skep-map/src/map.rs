//! The [`HiveMap`] grid: bounded, row-major, immutable after construction.

use crate::error::MapError;
use skep_core::Cell;
use smallvec::SmallVec;

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
pub(crate) const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The 4 cardinal offsets: N, S, W, E.
pub(crate) const OFFSETS_4: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A two-dimensional hive map with `rows * cols` cells.
///
/// Cells are stored row-major: `[0,0], [0,1], ..., [rows-1, cols-1]`.
/// The map is immutable after construction; build a new one to change
/// terrain. Edges absorb: a neighbour past the boundary simply does not
/// exist, so corner cells have 3 of 8 neighbours and edge cells 5.
///
/// ```
/// use skep_core::Cell;
/// use skep_map::HiveMap;
///
/// let map = HiveMap::from_codes(2, 3, &[0, 6, 0, 0, 0, 1]).unwrap();
/// assert_eq!(map.cell(0, 1).unwrap(), Cell::Heater);
/// assert_eq!(map.bees(), vec![(1, 2)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiveMap {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl HiveMap {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Build a map from a row-major cell buffer.
    ///
    /// Returns `Err(MapError::EmptyMap)` if either dimension is 0,
    /// `Err(MapError::DimensionTooLarge)` if either exceeds `i32::MAX`,
    /// or `Err(MapError::CellCountMismatch)` if `cells.len() != rows * cols`.
    pub fn from_cells(rows: u32, cols: u32, cells: Vec<Cell>) -> Result<Self, MapError> {
        if rows == 0 || cols == 0 {
            return Err(MapError::EmptyMap);
        }
        if rows > Self::MAX_DIM {
            return Err(MapError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(MapError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        let expected = (rows as usize) * (cols as usize);
        if cells.len() != expected {
            return Err(MapError::CellCountMismatch {
                expected,
                got: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a map from a row-major buffer of raw cell codes.
    ///
    /// In addition to the [`from_cells`](Self::from_cells) checks, every
    /// code must decode; an unknown code reports its flat index via
    /// `Err(MapError::InvalidCell)`.
    pub fn from_codes(rows: u32, cols: u32, codes: &[i32]) -> Result<Self, MapError> {
        let cells = codes
            .iter()
            .enumerate()
            .map(|(index, &code)| {
                Cell::from_code(code).map_err(|source| MapError::InvalidCell { index, source })
            })
            .collect::<Result<Vec<Cell>, MapError>>()?;
        Self::from_cells(rows, cols, cells)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether `(r, c)` lies inside the map.
    pub fn in_bounds(&self, r: i32, c: i32) -> bool {
        r >= 0 && r < self.rows as i32 && c >= 0 && c < self.cols as i32
    }

    /// The cell at `(r, c)`, or `Err(MapError::CoordOutOfBounds)`.
    pub fn cell(&self, r: i32, c: i32) -> Result<Cell, MapError> {
        if !self.in_bounds(r, c) {
            return Err(MapError::CoordOutOfBounds {
                r,
                c,
                bounds: format!("[0, {}) x [0, {})", self.rows, self.cols),
            });
        }
        Ok(self.cells[self.flat(r, c)])
    }

    /// The row-major cell buffer.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The in-bounds 8-connected neighbours of `(r, c)` as `(row, col)`
    /// pairs. Out-of-bounds candidates are omitted.
    pub fn neighbours8(&self, r: i32, c: i32) -> SmallVec<[(i32, i32); 8]> {
        self.neighbours_from(r, c, &OFFSETS_8)
    }

    /// The in-bounds 4-connected (cardinal) neighbours of `(r, c)`.
    pub fn neighbours4(&self, r: i32, c: i32) -> SmallVec<[(i32, i32); 8]> {
        self.neighbours_from(r, c, &OFFSETS_4)
    }

    /// Positions of all bee cells (directed or amnesiac) in row-major
    /// scan order.
    pub fn bees(&self) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for r in 0..self.rows as i32 {
            for c in 0..self.cols as i32 {
                if self.cells[self.flat(r, c)].is_bee() {
                    out.push((r, c));
                }
            }
        }
        out
    }

    pub(crate) fn flat(&self, r: i32, c: i32) -> usize {
        (r as usize) * (self.cols as usize) + (c as usize)
    }

    fn neighbours_from(&self, r: i32, c: i32, offsets: &[(i32, i32)]) -> SmallVec<[(i32, i32); 8]> {
        let mut result = SmallVec::new();
        for &(dr, dc) in offsets {
            let (nr, nc) = (r + dr, c + dc);
            if self.in_bounds(nr, nc) {
                result.push((nr, nc));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use skep_core::{CodeError, Direction};

    fn empty_map(rows: u32, cols: u32) -> HiveMap {
        let n = (rows as usize) * (cols as usize);
        HiveMap::from_cells(rows, cols, vec![Cell::Empty; n]).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn from_cells_zero_dimension_is_rejected() {
        assert!(matches!(
            HiveMap::from_cells(0, 5, vec![]),
            Err(MapError::EmptyMap)
        ));
        assert!(matches!(
            HiveMap::from_cells(5, 0, vec![]),
            Err(MapError::EmptyMap)
        ));
    }

    #[test]
    fn from_cells_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            HiveMap::from_cells(big, 1, vec![]),
            Err(MapError::DimensionTooLarge { name: "rows", .. })
        ));
        assert!(matches!(
            HiveMap::from_cells(1, big, vec![]),
            Err(MapError::DimensionTooLarge { name: "cols", .. })
        ));
    }

    #[test]
    fn from_cells_rejects_count_mismatch() {
        assert!(matches!(
            HiveMap::from_cells(2, 2, vec![Cell::Empty; 3]),
            Err(MapError::CellCountMismatch {
                expected: 4,
                got: 3
            })
        ));
    }

    #[test]
    fn from_codes_decodes_row_major() {
        let map = HiveMap::from_codes(2, 2, &[0, 5, 6, 3]).unwrap();
        assert_eq!(map.cell(0, 0).unwrap(), Cell::Empty);
        assert_eq!(map.cell(0, 1).unwrap(), Cell::Wall);
        assert_eq!(map.cell(1, 0).unwrap(), Cell::Heater);
        assert_eq!(map.cell(1, 1).unwrap(), Cell::Bee(Direction::Down));
    }

    #[test]
    fn from_codes_reports_offending_index() {
        let err = HiveMap::from_codes(2, 2, &[0, 0, 9, 0]).unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidCell {
                index: 2,
                source: CodeError::UnknownCell { code: 9 }
            }
        );
    }

    // ── Access ──────────────────────────────────────────────────

    #[test]
    fn cell_out_of_bounds_is_an_error() {
        let map = empty_map(3, 3);
        for (r, c) in [(-1, 0), (0, -1), (3, 0), (0, 3)] {
            assert!(matches!(
                map.cell(r, c),
                Err(MapError::CoordOutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn in_bounds_matches_dimensions() {
        let map = empty_map(2, 4);
        assert!(map.in_bounds(0, 0));
        assert!(map.in_bounds(1, 3));
        assert!(!map.in_bounds(2, 0));
        assert!(!map.in_bounds(0, 4));
        assert!(!map.in_bounds(-1, -1));
    }

    // ── Neighbours ──────────────────────────────────────────────

    #[test]
    fn neighbours8_interior() {
        let map = empty_map(5, 5);
        assert_eq!(map.neighbours8(2, 2).len(), 8);
    }

    #[test]
    fn neighbours8_corner() {
        let map = empty_map(5, 5);
        let n = map.neighbours8(0, 0);
        assert_eq!(n.len(), 3);
        assert!(n.contains(&(1, 0)));
        assert!(n.contains(&(0, 1)));
        assert!(n.contains(&(1, 1)));
    }

    #[test]
    fn neighbours8_edge() {
        let map = empty_map(5, 5);
        assert_eq!(map.neighbours8(0, 2).len(), 5);
    }

    #[test]
    fn neighbours4_interior_and_corner() {
        let map = empty_map(5, 5);
        assert_eq!(map.neighbours4(2, 2).len(), 4);
        let n = map.neighbours4(0, 0);
        assert_eq!(n.len(), 2);
        assert!(n.contains(&(1, 0)));
        assert!(n.contains(&(0, 1)));
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        let map = empty_map(1, 1);
        assert!(map.neighbours8(0, 0).is_empty());
        assert!(map.neighbours4(0, 0).is_empty());
    }

    // ── Bee scan ────────────────────────────────────────────────

    #[test]
    fn bees_scan_is_row_major() {
        let map = HiveMap::from_codes(3, 3, &[0, 2, 0, -1, 0, 0, 0, 0, 4]).unwrap();
        assert_eq!(map.bees(), vec![(0, 1), (1, 0), (2, 2)]);
    }

    #[test]
    fn bees_ignores_terrain() {
        let map = HiveMap::from_codes(2, 2, &[5, 6, 7, 0]).unwrap();
        assert!(map.bees().is_empty());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbours8_symmetric(
            rows in 1u32..8, cols in 1u32..8,
            r in 0i32..8, c in 0i32..8,
        ) {
            let r = r % rows as i32;
            let c = c % cols as i32;
            let map = empty_map(rows, cols);
            for (nr, nc) in map.neighbours8(r, c) {
                prop_assert!(
                    map.neighbours8(nr, nc).contains(&(r, c)),
                    "neighbour symmetry violated between ({r},{c}) and ({nr},{nc})",
                );
            }
        }

        #[test]
        fn neighbours_are_in_bounds(
            rows in 1u32..8, cols in 1u32..8,
            r in 0i32..8, c in 0i32..8,
        ) {
            let r = r % rows as i32;
            let c = c % cols as i32;
            let map = empty_map(rows, cols);
            for (nr, nc) in map.neighbours8(r, c) {
                prop_assert!(map.in_bounds(nr, nc));
            }
        }
    }
}
