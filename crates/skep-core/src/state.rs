//! The [`State`] search record and its position ordering.

use std::cmp::Ordering;

/// A grid search state: position, heading, and step counter.
///
/// `State` is the work item of breadth-first expansions over a hive map.
/// `x` and `y` are the grid position (row and column), `d` is the heading
/// of the step that produced the state, and `t` is the step counter.
///
/// All four fields are stored verbatim at construction and never mutated.
/// `d` and `t` carry whatever encoding the producing search assigns them —
/// the type itself places no constraints on their ranges.
///
/// # Ordering
///
/// States order lexicographically by position: `x` first, then `y`.
/// `d` and `t` never participate. The relation is exposed as
/// [`position_cmp`](State::position_cmp) / [`precedes`](State::precedes)
/// and, for ordered containers, as the [`ByPosition`] adapter. It is a
/// strict weak ordering: states sharing a position are equivalent under
/// it regardless of heading or step counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct State {
    x: i32,
    y: i32,
    d: i32,
    t: i32,
}

impl State {
    /// Create a state from its four components, stored verbatim.
    pub fn new(x: i32, y: i32, d: i32, t: i32) -> Self {
        Self { x, y, d, t }
    }

    /// Horizontal coordinate (grid row).
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Vertical coordinate (grid column).
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Heading of the step that produced this state.
    pub fn d(&self) -> i32 {
        self.d
    }

    /// Step counter.
    pub fn t(&self) -> i32 {
        self.t
    }

    /// The `(x, y)` position, the part of the state that orders and
    /// deduplicates.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Lexicographic position comparison: `x` first, then `y`.
    ///
    /// Returns `Ordering::Equal` for any two states at the same position,
    /// whatever their `d` and `t`.
    pub fn position_cmp(&self, other: &State) -> Ordering {
        self.position().cmp(&other.position())
    }

    /// Strict less-than over positions: `true` iff `self.x < other.x`, or
    /// the `x`s are equal and `self.y < other.y`.
    pub fn precedes(&self, other: &State) -> bool {
        self.position_cmp(other) == Ordering::Less
    }
}

/// Ordering adapter that keys a [`State`] by position only.
///
/// Wraps a state so that `Eq` and `Ord` see just `(x, y)`; two states at
/// the same position compare equal even when `d` or `t` differ. This is
/// the form ordered containers need — a `BTreeSet<ByPosition>` holds at
/// most one state per grid cell, which is exactly the visited-set
/// behavior breadth-first searches rely on.
///
/// `State` itself deliberately does not implement `Ord`: its derived
/// `PartialEq` compares all four fields, and an `Ord` that ignores `d`
/// and `t` would be inconsistent with it.
#[derive(Clone, Copy, Debug)]
pub struct ByPosition(pub State);

impl PartialEq for ByPosition {
    fn eq(&self, other: &Self) -> bool {
        self.0.position_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for ByPosition {}

impl PartialOrd for ByPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByPosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.position_cmp(&other.0)
    }
}
