//! Test fixtures and helpers.
//!
//! Pre-built units and rosters for consistent testing.

use skirmish_core::grid::GridPos;
use skirmish_core::roster::{Roster, Side};
use skirmish_core::unit::Unit;
use skirmish_core::unit_kind::UnitKind;

/// Build a grid position, panicking on off-map coordinates.
///
/// # Panics
///
/// Panics if `(x, y)` is outside the battlefield.
#[must_use]
pub fn pos(x: i32, y: i32) -> GridPos {
    match GridPos::new(x, y) {
        Ok(pos) => pos,
        Err(err) => panic!("fixture position: {err}"),
    }
}

/// A full-health unit of `kind` at `(x, y)`.
#[must_use]
pub fn unit_at(name: &str, kind: UnitKind, x: i32, y: i32) -> Unit {
    Unit::new(name, kind, pos(x, y))
}

/// A unit that starts the battle already destroyed.
#[must_use]
pub fn wreck(name: &str, kind: UnitKind) -> Unit {
    Unit::new(name, kind, GridPos::ORIGIN).with_health(0)
}

/// A roster of `count` destroyed units.
#[must_use]
pub fn wrecked_roster(side: Side, count: usize) -> Roster {
    let units = (0..count)
        .map(|i| wreck(&format!("{side} wreck {i}"), UnitKind::Infantry))
        .collect();
    Roster::new(side, units)
}

/// A roster with one full-health unit of `kind` at `(x, y)`.
#[must_use]
pub fn lone_unit(side: Side, name: &str, kind: UnitKind, x: i32, y: i32) -> Roster {
    Roster::new(side, vec![unit_at(name, kind, x, y)])
}

/// One unit per side, both starting on the same square.
#[must_use]
pub fn duel(player: UnitKind, enemy: UnitKind) -> (Roster, Roster) {
    (
        lone_unit(Side::Player, "Hero", player, 5, 5),
        lone_unit(Side::Enemy, "Villain", enemy, 5, 5),
    )
}
