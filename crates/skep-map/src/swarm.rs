//! Swarm detection: maximal 4-connected components of bee cells.

use crate::map::{HiveMap, OFFSETS_4};
use std::collections::VecDeque;

impl HiveMap {
    /// Group the map's bees into swarms.
    ///
    /// A swarm is a maximal set of bee cells connected through the four
    /// cardinal directions; diagonal contact does not join swarms. The
    /// result is deterministic: each swarm is sorted row-major, and
    /// swarms are ordered by their row-major-first member.
    pub fn swarms(&self) -> Vec<Vec<(i32, i32)>> {
        let mut seen = vec![false; self.cell_count()];
        let mut out = Vec::new();

        for r in 0..self.rows() as i32 {
            for c in 0..self.cols() as i32 {
                let i = self.flat(r, c);
                if seen[i] || !self.cells()[i].is_bee() {
                    continue;
                }

                // Flood the component from its row-major-first member.
                let mut swarm = Vec::new();
                let mut queue = VecDeque::new();
                seen[i] = true;
                queue.push_back((r, c));
                while let Some((br, bc)) = queue.pop_front() {
                    swarm.push((br, bc));
                    for (dr, dc) in OFFSETS_4 {
                        let (nr, nc) = (br + dr, bc + dc);
                        if !self.in_bounds(nr, nc) {
                            continue;
                        }
                        let ni = self.flat(nr, nc);
                        if !seen[ni] && self.cells()[ni].is_bee() {
                            seen[ni] = true;
                            queue.push_back((nr, nc));
                        }
                    }
                }

                swarm.sort_unstable();
                out.push(swarm);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_bees_no_swarms() {
        let map = HiveMap::from_codes(3, 3, &[0; 9]).unwrap();
        assert!(map.swarms().is_empty());
    }

    #[test]
    fn lone_bee_is_a_swarm_of_one() {
        let map = HiveMap::from_codes(3, 3, &[0, 0, 0, 0, 1, 0, 0, 0, 0]).unwrap();
        assert_eq!(map.swarms(), vec![vec![(1, 1)]]);
    }

    #[test]
    fn cardinal_contact_merges() {
        #[rustfmt::skip]
        let map = HiveMap::from_codes(3, 3, &[
            1, 2, 0,
            0, 3, 0,
            0, 0, 0,
        ])
        .unwrap();
        assert_eq!(map.swarms(), vec![vec![(0, 0), (0, 1), (1, 1)]]);
    }

    #[test]
    fn diagonal_contact_does_not_merge() {
        #[rustfmt::skip]
        let map = HiveMap::from_codes(3, 3, &[
            1, 0, 0,
            0, 1, 0,
            0, 0, 1,
        ])
        .unwrap();
        assert_eq!(
            map.swarms(),
            vec![vec![(0, 0)], vec![(1, 1)], vec![(2, 2)]]
        );
    }

    #[test]
    fn amnesiac_bees_join_swarms() {
        #[rustfmt::skip]
        let map = HiveMap::from_codes(2, 3, &[
            1, -1, 0,
            0,  0, 4,
        ])
        .unwrap();
        assert_eq!(map.swarms(), vec![vec![(0, 0), (0, 1)], vec![(1, 2)]]);
    }

    #[test]
    fn swarms_split_by_terrain() {
        // A wall column separates two groups; heater/cooler are not bees.
        #[rustfmt::skip]
        let map = HiveMap::from_codes(3, 3, &[
            1, 5, 2,
            1, 6, 2,
            0, 7, 0,
        ])
        .unwrap();
        assert_eq!(
            map.swarms(),
            vec![vec![(0, 0), (1, 0)], vec![(0, 2), (1, 2)]]
        );
    }

    #[test]
    fn swarms_ordered_by_first_member() {
        #[rustfmt::skip]
        let map = HiveMap::from_codes(3, 4, &[
            0, 0, 0, 1,
            1, 0, 0, 1,
            1, 0, 0, 0,
        ])
        .unwrap();
        assert_eq!(
            map.swarms(),
            vec![vec![(0, 3), (1, 3)], vec![(1, 0), (2, 0)]]
        );
    }
}
