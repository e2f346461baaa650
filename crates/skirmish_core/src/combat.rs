//! Attack resolution and target scanning.
//!
//! Damage is flat: a hit removes the attacker's attack power from the
//! target's health, with no floor at zero. Targeting is first-fit: the
//! opposing roster is scanned in order and every living unit in range is
//! hit, until one hit destroys its target.

use serde::{Deserialize, Serialize};

use crate::events::{BattleEvent, Narrator};
use crate::grid::GridPos;
use crate::roster::Roster;
use crate::unit::{Unit, UnitState};

/// Result of a single attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// The target was already destroyed; nothing changed.
    Ignored,
    /// The target took damage and survived.
    Hit {
        /// Where the target stood when hit.
        at: GridPos,
        /// Health left after the hit.
        remaining: i32,
    },
    /// This attack took the target to zero health or below.
    Destroyed {
        /// Where the target stood when hit.
        at: GridPos,
        /// Health left after the hit (zero or negative).
        remaining: i32,
    },
}

impl AttackOutcome {
    /// Whether the attack changed the target's health.
    #[must_use]
    pub const fn landed(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// Whether this attack destroyed the target.
    #[must_use]
    pub const fn destroyed_target(self) -> bool {
        matches!(self, Self::Destroyed { .. })
    }
}

/// Apply `attack` damage to a target's state.
///
/// The caller must hold the target's lock.
pub fn apply_attack(attack: i32, target: &mut UnitState) -> AttackOutcome {
    if target.is_destroyed() {
        return AttackOutcome::Ignored;
    }

    target.health = target.health.saturating_sub(attack);
    let at = target.position;
    let remaining = target.health;

    if target.is_destroyed() {
        AttackOutcome::Destroyed { at, remaining }
    } else {
        AttackOutcome::Hit { at, remaining }
    }
}

/// What one scan of the opposing roster achieved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    /// Attacks that changed a target's health.
    pub attacks: u32,
    /// Targets destroyed by this scan (zero or one).
    pub kills: u32,
}

/// Scan `opponents` in order and attack every living unit within range.
///
/// Scanning stops as soon as one attack destroys its target. Attacks and
/// destructions are narrated as they happen.
pub fn engage(attacker: &Unit, opponents: &Roster, narrator: &dyn Narrator) -> Engagement {
    let mut engagement = Engagement::default();

    for target in opponents.units() {
        if target.is_destroyed() || !attacker.in_range_of(target) {
            continue;
        }

        let outcome = attacker.attack(target);
        for event in BattleEvent::from_attack(attacker.name(), target.name(), outcome) {
            narrator.narrate(&event);
        }

        if outcome.landed() {
            engagement.attacks += 1;
        }
        if outcome.destroyed_target() {
            engagement.kills += 1;
            tracing::debug!(
                attacker = attacker.name(),
                target = target.name(),
                "target destroyed, ending scan"
            );
            break;
        }
    }

    engagement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventLog;
    use crate::roster::Side;
    use crate::unit_kind::UnitKind;

    fn pos(x: i32, y: i32) -> GridPos {
        GridPos::new(x, y).unwrap()
    }

    #[test]
    fn test_apply_attack_hit() {
        let mut state = UnitState {
            health: 100,
            position: pos(4, 4),
        };
        assert_eq!(
            apply_attack(10, &mut state),
            AttackOutcome::Hit {
                at: pos(4, 4),
                remaining: 90
            }
        );
        assert_eq!(state.health, 90);
    }

    #[test]
    fn test_apply_attack_exactly_zero_destroys() {
        let mut state = UnitState {
            health: 40,
            position: GridPos::ORIGIN,
        };
        let outcome = apply_attack(40, &mut state);
        assert!(outcome.destroyed_target());
        assert_eq!(state.health, 0);
    }

    #[test]
    fn test_apply_attack_ignores_wreck() {
        let mut state = UnitState {
            health: -5,
            position: GridPos::ORIGIN,
        };
        assert_eq!(apply_attack(100, &mut state), AttackOutcome::Ignored);
        assert_eq!(state.health, -5);
        assert!(!AttackOutcome::Ignored.landed());
    }

    #[test]
    fn test_infantry_falls_on_tenth_hit() {
        let attacker = Unit::new("Alpha", UnitKind::Infantry, GridPos::ORIGIN);
        let target = Unit::new("Enemy 1", UnitKind::Infantry, pos(1, 0));

        for hit in 1..=9 {
            let outcome = attacker.attack(&target);
            assert!(
                matches!(outcome, AttackOutcome::Hit { .. }),
                "hit {hit} should not destroy"
            );
        }
        assert!(attacker.attack(&target).destroyed_target());
        assert!(target.health() <= 0);
        assert_eq!(attacker.attack(&target), AttackOutcome::Ignored);
    }

    #[test]
    fn test_engage_respects_range() {
        let air = Unit::new("Delta", UnitKind::AirSupport, GridPos::ORIGIN);
        let enemies = Roster::new(
            Side::Enemy,
            vec![
                Unit::new("Far", UnitKind::Tank, pos(7, 7)),
                Unit::new("Near", UnitKind::Tank, pos(6, 6)),
            ],
        );
        let log = EventLog::default();

        let engagement = engage(&air, &enemies, &log);

        assert_eq!(engagement, Engagement { attacks: 1, kills: 0 });
        assert_eq!(enemies.units()[0].health(), 200);
        assert_eq!(enemies.units()[1].health(), 100);
        assert_eq!(
            log.events(),
            vec![BattleEvent::Attacked {
                attacker: "Delta".to_string(),
                target: "Near".to_string(),
                at: pos(6, 6),
            }]
        );
    }

    #[test]
    fn test_engage_stops_after_first_kill() {
        let air = Unit::new("Delta", UnitKind::AirSupport, GridPos::ORIGIN);
        let enemies = Roster::new(
            Side::Enemy,
            vec![
                Unit::new("Tough", UnitKind::Tank, pos(1, 0)),
                Unit::new("Fragile", UnitKind::Infantry, pos(0, 1)),
                Unit::new("Spared", UnitKind::Infantry, pos(1, 1)),
            ],
        );
        let log = EventLog::default();

        let engagement = engage(&air, &enemies, &log);

        // The tank survives the first hit, the infantry dies, the scan ends.
        assert_eq!(engagement, Engagement { attacks: 2, kills: 1 });
        assert_eq!(enemies.units()[0].health(), 100);
        assert!(enemies.units()[1].is_destroyed());
        assert_eq!(enemies.units()[2].health(), 100);
        assert_eq!(
            log.events().last(),
            Some(&BattleEvent::Destroyed {
                unit: "Fragile".to_string()
            })
        );
    }

    #[test]
    fn test_engage_skips_destroyed_targets() {
        let tank = Unit::new("Bravo", UnitKind::Tank, GridPos::ORIGIN);
        let enemies = Roster::new(
            Side::Enemy,
            vec![Unit::new("Wreck", UnitKind::Infantry, pos(1, 1)).with_health(0)],
        );
        let log = EventLog::default();

        assert_eq!(engage(&tank, &enemies, &log), Engagement::default());
        assert!(log.events().is_empty());
    }
}
