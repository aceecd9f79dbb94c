//! Referential-integrity identities between the geometric block features.

use super::{AREA, BLACKAND, BLACKPIX, ECCEN, HEIGHT, INTEGRITY_COLUMNS, LENGHT, P_AND, P_BLACK};
use crate::config::CheckerConfig;
use crate::error::Result;
use crate::input::Table;

/// One algebraic identity that a consistent record satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegrityRule {
    /// `AREA == HEIGHT * LENGHT`, exactly.
    Area,
    /// `ECCEN ≈ LENGHT / HEIGHT` when `HEIGHT > 0`.
    Eccentricity,
    /// `P_BLACK ≈ BLACKPIX / AREA` when `AREA > 0`.
    BlackRatio,
    /// `P_AND ≈ BLACKAND / AREA` when `AREA > 0`.
    AndRatio,
}

impl IntegrityRule {
    /// Every identity, in evaluation order.
    pub const ALL: [IntegrityRule; 4] = [
        IntegrityRule::Area,
        IntegrityRule::Eccentricity,
        IntegrityRule::BlackRatio,
        IntegrityRule::AndRatio,
    ];

    /// Columns implicated when this identity is violated.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            IntegrityRule::Area => &[AREA, HEIGHT, LENGHT],
            IntegrityRule::Eccentricity => &[ECCEN, LENGHT, HEIGHT],
            IntegrityRule::BlackRatio => &[P_BLACK, BLACKPIX, AREA],
            IntegrityRule::AndRatio => &[P_AND, BLACKAND, AREA],
        }
    }

    /// Get a human-readable label for the identity.
    pub fn label(&self) -> &'static str {
        match self {
            IntegrityRule::Area => "AREA = HEIGHT * LENGHT",
            IntegrityRule::Eccentricity => "ECCEN = LENGHT / HEIGHT",
            IntegrityRule::BlackRatio => "P_BLACK = BLACKPIX / AREA",
            IntegrityRule::AndRatio => "P_AND = BLACKAND / AREA",
        }
    }
}

/// The eight integrity values of one fully populated record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub height: f64,
    pub length: f64,
    pub area: f64,
    pub eccen: f64,
    pub p_black: f64,
    pub p_and: f64,
    pub blackpix: f64,
    pub blackand: f64,
}

impl Measurements {
    /// Whether the record breaks the given identity.
    ///
    /// The ratio identities are vacuously satisfied when their divisor is
    /// not positive.
    pub fn violates(&self, rule: IntegrityRule, config: &CheckerConfig) -> bool {
        match rule {
            IntegrityRule::Area => self.area != self.height * self.length,
            IntegrityRule::Eccentricity => {
                self.height > 0.0
                    && (self.eccen - self.length / self.height).abs() > config.eccentricity_tolerance
            }
            IntegrityRule::BlackRatio => {
                self.area > 0.0
                    && (self.p_black - self.blackpix / self.area).abs() > config.ratio_tolerance
            }
            IntegrityRule::AndRatio => {
                self.area > 0.0
                    && (self.p_and - self.blackand / self.area).abs() > config.ratio_tolerance
            }
        }
    }

    /// Every identity the record breaks.
    pub fn violations(&self, config: &CheckerConfig) -> Vec<IntegrityRule> {
        IntegrityRule::ALL
            .into_iter()
            .filter(|&rule| self.violates(rule, config))
            .collect()
    }
}

/// Header positions of the integrity columns within a table.
#[derive(Debug, Clone, Copy)]
pub struct IntegrityColumns {
    indices: [usize; 8],
}

impl IntegrityColumns {
    /// Locate the eight integrity columns, failing on the first absent one.
    pub fn resolve(table: &Table) -> Result<Self> {
        let mut indices = [0; 8];
        for (slot, name) in indices.iter_mut().zip(INTEGRITY_COLUMNS) {
            *slot = table.require_column(name)?;
        }
        Ok(Self { indices })
    }

    /// Read a record's measurements.
    ///
    /// Returns `Ok(None)` when any of the eight cells is missing; values are
    /// only parsed once all of them are present.
    pub fn measurements(&self, table: &Table, row: usize) -> Result<Option<Measurements>> {
        if self.indices.iter().any(|&col| table.cell(row, col).is_none()) {
            return Ok(None);
        }

        let mut values = [0.0; 8];
        for (slot, &col) in values.iter_mut().zip(&self.indices) {
            *slot = table.number(row, col)?.unwrap_or_default();
        }

        let [height, length, area, eccen, p_black, p_and, blackpix, blackand] = values;
        Ok(Some(Measurements {
            height,
            length,
            area,
            eccen,
            p_black,
            p_and,
            blackpix,
            blackand,
        }))
    }
}
