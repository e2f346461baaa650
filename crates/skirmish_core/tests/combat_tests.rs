//! Combat scenarios across units and rosters.

use std::thread;

use skirmish_core::combat::{engage, AttackOutcome};
use skirmish_core::events::EventLog;
use skirmish_core::roster::{Roster, Side};
use skirmish_core::unit_kind::UnitKind;
use skirmish_test_utils::fixtures::{pos, unit_at, wreck, wrecked_roster};

#[test]
fn infantry_is_destroyed_on_tenth_attack() {
    let attacker = unit_at("Alpha", UnitKind::Infantry, 0, 0);
    let target = unit_at("Enemy 1", UnitKind::Infantry, 1, 1);

    let outcomes: Vec<AttackOutcome> = (0..10).map(|_| attacker.attack(&target)).collect();

    assert!(outcomes[..9]
        .iter()
        .all(|outcome| matches!(outcome, AttackOutcome::Hit { .. })));
    assert_eq!(
        outcomes[9],
        AttackOutcome::Destroyed {
            at: pos(1, 1),
            remaining: 0
        }
    );
    assert!(target.is_destroyed());
}

#[test]
fn air_support_reaches_exactly_six_cells() {
    let air = unit_at("Delta", UnitKind::AirSupport, 0, 0);
    let in_range = Roster::new(
        Side::Enemy,
        vec![unit_at("Enemy 1", UnitKind::Infantry, 6, 6)],
    );
    let out_of_range = Roster::new(
        Side::Enemy,
        vec![unit_at("Enemy 2", UnitKind::Infantry, 7, 7)],
    );
    let log = EventLog::default();

    assert_eq!(engage(&air, &in_range, &log).kills, 1);
    assert_eq!(engage(&air, &out_of_range, &log).attacks, 0);
    assert_eq!(
        log.lines(),
        vec![
            "Delta attacks Enemy 1 at (6, 6)",
            "Enemy 1 has been destroyed!"
        ]
    );
    assert_eq!(out_of_range.units()[0].health(), 100);
}

#[test]
fn wrecked_roster_absorbs_nothing() {
    let tank = unit_at("Bravo", UnitKind::Tank, 0, 0);
    let wrecks = wrecked_roster(Side::Enemy, 4);
    let log = EventLog::default();

    let engagement = engage(&tank, &wrecks, &log);

    assert_eq!(engagement.attacks, 0);
    assert!(log.events().is_empty());
    assert!(wrecks.units().iter().all(|unit| unit.health() == 0));
}

#[test]
fn concurrent_attacks_never_lose_damage() {
    // Many attackers hammering one target from different threads: every
    // landed hit must be accounted for, and exactly one attack may claim
    // the kill.
    let target = unit_at("Fortress", UnitKind::Tank, 5, 5).with_health(10 * 8 * 50);
    let attackers: Vec<_> = (0..8)
        .map(|i| unit_at(&format!("Attacker {i}"), UnitKind::Infantry, 5, 5))
        .collect();

    let kills: usize = thread::scope(|scope| {
        let handles: Vec<_> = attackers
            .iter()
            .map(|attacker| {
                let target = &target;
                scope.spawn(move || {
                    (0..60)
                        .filter(|_| attacker.attack(target).destroyed_target())
                        .count()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .sum()
    });

    // 8 * 50 hits of 10 bring it to exactly zero; the rest are ignored.
    assert_eq!(target.health(), 0);
    assert_eq!(kills, 1);
}

#[test]
fn destroyed_unit_stays_destroyed() {
    let air = unit_at("Delta", UnitKind::AirSupport, 0, 0);
    let target = wreck("Enemy 4", UnitKind::AirSupport);

    for _ in 0..5 {
        assert_eq!(air.attack(&target), AttackOutcome::Ignored);
    }
    assert_eq!(target.health(), 0);
}
