//src/map/src/lib.rs
//! The linear track the hero walks along.
//!
//! A map is a row of cells framed by a start and a finish banner. Some cells
//! hold a pending [`Encounter`]; the hero's own cell shows their name.

use std::collections::HashMap;
use std::fmt;

use combat::Encounter;
use error::{GameError, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info};

pub mod difficulty;

pub use crate::difficulty::{Difficulty, encounter_count};

/// Random tries an encounter gets before it is dropped
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 10;

/// Names for randomly generated maps
const STAGE_NAMES: &[&str] = &[
    "Harbor Docks",
    "Neon Alley",
    "Old Subway",
    "Rooftop Market",
    "Rail Yard",
    "Chinatown Gate",
    "Abandoned Mall",
    "Riverside Warehouse",
];

pub fn random_stage_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    STAGE_NAMES.choose(rng).copied().unwrap_or("Back Street")
}

/// 地图格子
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Start,
    Finish,
    Empty,
    Hero(String),
    Combat,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Start => f.write_str("[START]"),
            Cell::Finish => f.write_str("[END]"),
            Cell::Empty => f.write_str("_"),
            Cell::Hero(name) => write!(f, "[{}]", name),
            Cell::Combat => f.write_str("[!]"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Map {
    name: String,
    cells: Vec<Cell>,
    encounters: HashMap<usize, Encounter>,
}

impl Map {
    /// Position of the start banner
    pub const START: usize = 0;

    /// Build a map with `inner_length` walkable cells between the start and
    /// finish banners.
    pub fn new(name: impl Into<String>, inner_length: usize) -> Self {
        let name = name.into();
        let length = inner_length + 2;
        let mut cells = vec![Cell::Empty; length];
        cells[Self::START] = Cell::Start;
        cells[length - 1] = Cell::Finish;

        info!("Map {} created with {} cells", name, length);
        Self {
            name,
            cells,
            encounters: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total number of cells, banners included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Position of the finish banner
    pub fn finish(&self) -> usize {
        self.cells.len() - 1
    }

    /// Cell at `position`; anything off the map reads as empty ground
    pub fn cell(&self, position: usize) -> &Cell {
        self.cells.get(position).unwrap_or(&Cell::Empty)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn place_hero(&mut self, name: &str, position: usize) -> Result<()> {
        let length = self.len();
        let cell = self
            .cells
            .get_mut(position)
            .ok_or(GameError::OutOfBounds { position, length })?;
        *cell = Cell::Hero(name.to_string());
        info!("Hero {} placed at position {}", name, position);
        Ok(())
    }

    /// Move the hero marker; indices off the map are ignored
    pub fn update_position(&mut self, old: usize, new: usize, name: &str) {
        if let Some(cell) = self.cells.get_mut(old) {
            *cell = Cell::Empty;
        }
        if let Some(cell) = self.cells.get_mut(new) {
            *cell = Cell::Hero(name.to_string());
        }
    }

    pub fn has_encounter(&self, position: usize) -> bool {
        self.encounters.contains_key(&position)
    }

    pub fn encounter_at(&self, position: usize) -> Option<&Encounter> {
        self.encounters.get(&position)
    }

    pub fn encounter_at_mut(&mut self, position: usize) -> Option<&mut Encounter> {
        self.encounters.get_mut(&position)
    }

    pub fn encounter_count(&self) -> usize {
        self.encounters.len()
    }

    /// Put `encounter` on `position`, replacing whatever pending fight was
    /// there. Banner cells can not hold a fight.
    pub fn insert_encounter(&mut self, position: usize, encounter: Encounter) -> Result<()> {
        let length = self.len();
        if position == Self::START || position >= self.finish() {
            return Err(GameError::OutOfBounds { position, length });
        }
        self.cells[position] = Cell::Combat;
        self.encounters.insert(position, encounter);
        Ok(())
    }

    /// Drop the encounter on `position` and clear its cell
    pub fn remove_encounter(&mut self, position: usize) -> Option<Encounter> {
        let encounter = self.encounters.remove(&position)?;
        self.cells[position] = Cell::Empty;
        info!("Combat removed from position {}", position);
        Some(encounter)
    }

    /// Scatter `encounters` over empty cells in `[2, finish - 1)`, each with
    /// up to `attempts` random tries. Encounters that find no free cell are
    /// dropped. Returns how many were placed.
    pub fn place_encounters<R: Rng + ?Sized>(
        &mut self,
        encounters: Vec<Encounter>,
        rng: &mut R,
        attempts: usize,
    ) -> usize {
        let low = Self::START + 2;
        let high = self.finish().saturating_sub(1);
        if low >= high {
            debug!("Map {} has no room for encounters", self.name);
            return 0;
        }

        let mut placed = 0;
        for encounter in encounters {
            let slot = (0..attempts)
                .map(|_| rng.random_range(low..high))
                .find(|&pos| self.cells[pos] == Cell::Empty);

            match slot {
                Some(position) => {
                    self.cells[position] = Cell::Combat;
                    self.encounters.insert(position, encounter);
                    placed += 1;
                    info!("Enemy group placed at position {}", position);
                }
                None => debug!("No free cell found after {} attempts", attempts),
            }
        }
        placed
    }

    /// One-line picture of the track
    pub fn render(&self) -> String {
        self.cells.iter().map(Cell::to_string).collect()
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
