//! The standard opening lineup.
//!
//! Both sides field one unit of each kind. The player starts in the
//! top-left corner, the enemy in the bottom-right.

use crate::error::Result;
use crate::grid::GridPos;
use crate::roster::{Roster, Side};
use crate::unit::Unit;
use crate::unit_kind::UnitKind;

/// A unit placement in a lineup: name, kind and starting cell.
pub type Placement = (&'static str, UnitKind, (i32, i32));

/// Player units in roster order.
pub const PLAYER_LINEUP: [Placement; 4] = [
    ("Alpha", UnitKind::Infantry, (0, 0)),
    ("Bravo", UnitKind::Tank, (1, 1)),
    ("Charlie", UnitKind::Artillery, (2, 2)),
    ("Delta", UnitKind::AirSupport, (0, 0)),
];

/// Enemy units in roster order.
pub const ENEMY_LINEUP: [Placement; 4] = [
    ("Enemy 1", UnitKind::Infantry, (8, 8)),
    ("Enemy 2", UnitKind::Tank, (9, 9)),
    ("Enemy 3", UnitKind::Artillery, (7, 7)),
    ("Enemy 4", UnitKind::AirSupport, (9, 9)),
];

/// Build a roster from a lineup.
pub fn build_roster(side: Side, lineup: &[Placement]) -> Result<Roster> {
    let units = lineup
        .iter()
        .map(|&(name, kind, (x, y))| Ok(Unit::new(name, kind, GridPos::new(x, y)?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Roster::new(side, units))
}

/// The standard player and enemy rosters.
pub fn standard_rosters() -> Result<(Roster, Roster)> {
    Ok((
        build_roster(Side::Player, &PLAYER_LINEUP)?,
        build_roster(Side::Enemy, &ENEMY_LINEUP)?,
    ))
}
