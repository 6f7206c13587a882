//! The [`ThermalModel`] parameters and the [`ThermalField`] they compute.

use crate::error::FieldError;
use skep_core::{ByPosition, Cell, State};
use skep_map::{HiveMap, MapError};
use std::collections::{BTreeSet, VecDeque};

/// All 8 expansion offsets: N, S, W, E, NW, NE, SW, SE.
///
/// A search state's `d` field is the index of the offset that produced
/// it; the search origin carries `d = -1`.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Climate parameters for thermal-field computation.
///
/// Each open cell's temperature combines the ambient temperature with
/// contributions that fall off as the reciprocal of the cell's
/// 8-connected search distance to the nearest heater and cooler:
///
/// ```text
/// heating = (1 / dist_heater) * (t_heater - t_env)
/// cooling = (1 / dist_cooler) * (t_env - t_cooler)
/// temp    = t_env + k_temp * (max(heating, 0) - max(cooling, 0))
/// ```
///
/// An unreachable heater or cooler contributes nothing. Heater and
/// cooler cells pin to `t_heater` / `t_cooler`; wall cells read as NaN.
///
/// # Construction
///
/// Use the builder pattern:
///
/// ```
/// use skep_thermal::ThermalModel;
///
/// let model = ThermalModel::builder()
///     .t_heater(40.0)
///     .t_cooler(5.0)
///     .build()
///     .unwrap();
/// assert_eq!(model.t_env(), 22.0);
/// ```
#[derive(Clone, Debug)]
pub struct ThermalModel {
    t_heater: f64,
    t_cooler: f64,
    t_env: f64,
    k_temp: f64,
}

/// Builder for [`ThermalModel`].
///
/// All parameters default to the reference climate: heater 40, cooler 5,
/// ambient 22, conduction factor 0.9.
pub struct ThermalModelBuilder {
    t_heater: f64,
    t_cooler: f64,
    t_env: f64,
    k_temp: f64,
}

impl ThermalModel {
    /// Create a new builder for configuring a `ThermalModel`.
    pub fn builder() -> ThermalModelBuilder {
        ThermalModelBuilder {
            t_heater: 40.0,
            t_cooler: 5.0,
            t_env: 22.0,
            k_temp: 0.9,
        }
    }

    /// Heater-cell temperature.
    pub fn t_heater(&self) -> f64 {
        self.t_heater
    }

    /// Cooler-cell temperature.
    pub fn t_cooler(&self) -> f64 {
        self.t_cooler
    }

    /// Ambient temperature.
    pub fn t_env(&self) -> f64 {
        self.t_env
    }

    /// Conduction factor scaling the heater/cooler contributions.
    pub fn k_temp(&self) -> f64 {
        self.k_temp
    }

    /// Compute the thermal field for `map`.
    pub fn field(&self, map: &HiveMap) -> ThermalField {
        let cols = map.cols() as usize;
        let mut temps = Vec::with_capacity(map.cell_count());
        for (i, &cell) in map.cells().iter().enumerate() {
            let temp = match cell {
                Cell::Heater => self.t_heater as f32,
                Cell::Cooler => self.t_cooler as f32,
                Cell::Wall => f32::NAN,
                _ => {
                    let r = (i / cols) as i32;
                    let c = (i % cols) as i32;
                    let (dist_heater, dist_cooler) = nearest_sources(map, r, c);
                    self.temperature(dist_heater, dist_cooler)
                }
            };
            temps.push(temp);
        }
        ThermalField {
            rows: map.rows(),
            cols: map.cols(),
            temps,
        }
    }

    /// Combine source distances into a cell temperature.
    fn temperature(&self, dist_heater: Option<i32>, dist_cooler: Option<i32>) -> f32 {
        let heating = dist_heater.map_or(0.0, |d| (self.t_heater - self.t_env) / d as f64);
        let cooling = dist_cooler.map_or(0.0, |d| (self.t_env - self.t_cooler) / d as f64);
        (self.t_env + self.k_temp * (heating.max(0.0) - cooling.max(0.0))) as f32
    }
}

impl ThermalModelBuilder {
    /// Set the heater-cell temperature.
    pub fn t_heater(mut self, t: f64) -> Self {
        self.t_heater = t;
        self
    }

    /// Set the cooler-cell temperature.
    pub fn t_cooler(mut self, t: f64) -> Self {
        self.t_cooler = t;
        self
    }

    /// Set the ambient temperature.
    pub fn t_env(mut self, t: f64) -> Self {
        self.t_env = t;
        self
    }

    /// Set the conduction factor. Must be >= 0.
    pub fn k_temp(mut self, k: f64) -> Self {
        self.k_temp = k;
        self
    }

    /// Build the model, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any temperature is non-finite, or if `k_temp`
    /// is negative or non-finite.
    pub fn build(self) -> Result<ThermalModel, String> {
        for (name, value) in [
            ("t_heater", self.t_heater),
            ("t_cooler", self.t_cooler),
            ("t_env", self.t_env),
        ] {
            if !value.is_finite() {
                return Err(format!("{name} must be finite, got {value}"));
            }
        }
        if !(self.k_temp >= 0.0) || !self.k_temp.is_finite() {
            return Err(format!(
                "k_temp must be finite and >= 0, got {}",
                self.k_temp
            ));
        }
        Ok(ThermalModel {
            t_heater: self.t_heater,
            t_cooler: self.t_cooler,
            t_env: self.t_env,
            k_temp: self.k_temp,
        })
    }
}

/// Breadth-first distances from `(r, c)` to the nearest heater and cooler.
///
/// Expansion is 8-connected within bounds. Heater and cooler cells record
/// their step count and terminate their branch; walls terminate without
/// recording. Every other cell (empty or bee-occupied) is passable. The
/// whole search aborts once a dequeued state's step count reaches the
/// cell count.
///
/// The visited set is keyed on position only via [`ByPosition`], so a
/// cell is expanded at most once however many headings reach it.
fn nearest_sources(map: &HiveMap, r: i32, c: i32) -> (Option<i32>, Option<i32>) {
    let area = map.cell_count() as i32;
    let mut dist_heater: Option<i32> = None;
    let mut dist_cooler: Option<i32> = None;

    let mut visited: BTreeSet<ByPosition> = BTreeSet::new();
    let mut queue: VecDeque<State> = VecDeque::new();
    queue.push_back(State::new(r, c, -1, 0));

    while let Some(state) = queue.pop_front() {
        if !visited.insert(ByPosition(state)) {
            continue;
        }
        let Ok(cell) = map.cell(state.x(), state.y()) else {
            continue;
        };
        match cell {
            Cell::Heater => {
                dist_heater = Some(dist_heater.map_or(state.t(), |d| d.min(state.t())));
                continue;
            }
            Cell::Cooler => {
                dist_cooler = Some(dist_cooler.map_or(state.t(), |d| d.min(state.t())));
                continue;
            }
            Cell::Wall => continue,
            _ => {}
        }
        if state.t() >= area {
            break;
        }
        for (d, &(dr, dc)) in OFFSETS_8.iter().enumerate() {
            let (nr, nc) = (state.x() + dr, state.y() + dc);
            if map.in_bounds(nr, nc) {
                queue.push_back(State::new(nr, nc, d as i32, state.t() + 1));
            }
        }
    }

    (dist_heater, dist_cooler)
}

/// A computed per-cell temperature grid.
///
/// Row-major like the map it was computed from. Wall cells hold NaN.
#[derive(Clone, Debug)]
pub struct ThermalField {
    rows: u32,
    cols: u32,
    temps: Vec<f32>,
}

impl ThermalField {
    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// The temperature at `(r, c)`, or `Err(MapError::CoordOutOfBounds)`.
    pub fn get(&self, r: i32, c: i32) -> Result<f32, MapError> {
        if r < 0 || r >= self.rows as i32 || c < 0 || c >= self.cols as i32 {
            return Err(MapError::CoordOutOfBounds {
                r,
                c,
                bounds: format!("[0, {}) x [0, {})", self.rows, self.cols),
            });
        }
        Ok(self.temps[(r as usize) * (self.cols as usize) + (c as usize)])
    }

    /// The row-major temperature buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.temps
    }

    /// Mean temperature over the map's bee positions.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DimensionMismatch`] if `map` has different
    /// dimensions than the map this field was computed from, and
    /// [`FieldError::NoBees`] if the map holds no bees.
    pub fn mean_bee_temperature(&self, map: &HiveMap) -> Result<f64, FieldError> {
        if map.rows() != self.rows || map.cols() != self.cols {
            return Err(FieldError::DimensionMismatch {
                field_rows: self.rows,
                field_cols: self.cols,
                map_rows: map.rows(),
                map_cols: map.cols(),
            });
        }
        let bees = map.bees();
        if bees.is_empty() {
            return Err(FieldError::NoBees);
        }
        let sum: f64 = bees
            .iter()
            .map(|&(r, c)| self.temps[(r as usize) * (self.cols as usize) + (c as usize)] as f64)
            .sum();
        Ok(sum / bees.len() as f64)
    }
}
