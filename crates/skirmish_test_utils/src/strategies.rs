//! Proptest strategies for battlefield values.

use proptest::prelude::*;
use skirmish_core::grid::{GridPos, MAP_SIZE};
use skirmish_core::unit_kind::UnitKind;

/// Any coordinate on the map.
pub fn on_map_coord() -> impl Strategy<Value = i32> {
    0..MAP_SIZE
}

/// Any coordinate off the map, near the edges or far away.
pub fn off_map_coord() -> impl Strategy<Value = i32> {
    prop_oneof![
        -MAP_SIZE..0,
        MAP_SIZE..MAP_SIZE * 2,
        Just(i32::MIN),
        Just(i32::MAX),
    ]
}

/// A coordinate pair with at least one axis off the map.
pub fn off_map_pair() -> impl Strategy<Value = (i32, i32)> {
    prop_oneof![
        (off_map_coord(), any::<i32>()),
        (any::<i32>(), off_map_coord()),
    ]
}

/// Any grid position.
pub fn grid_pos() -> impl Strategy<Value = GridPos> {
    (on_map_coord(), on_map_coord())
        .prop_map(|(x, y)| GridPos::new(x, y).unwrap_or(GridPos::ORIGIN))
}

/// Any unit kind.
pub fn unit_kind() -> impl Strategy<Value = UnitKind> {
    prop::sample::select(UnitKind::ALL.to_vec())
}
