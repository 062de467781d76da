use std::f64::consts::PI;

use galaxian_core::config::{AttackPattern, BossProfile, BossRules};
use galaxian_core::enums::ProjectileKind;
use galaxian_core::error::SimError;
use galaxian_core::types::{Playfield, Vec2};

use crate::fsm::{Boss, BossState};
use crate::patterns::{emit, spread_headings, tracking_headings};
use crate::profiles::profile_for_level;

fn profile(pattern: AttackPattern) -> BossProfile {
    BossProfile {
        name: "test_boss".into(),
        health: 150,
        speed: 4.0,
        max_cooldown: 30,
        attack_pattern: pattern,
        width: 100.0,
        height: 100.0,
    }
}

fn spawn(pattern: AttackPattern) -> Boss {
    Boss::spawn(&profile(pattern), &BossRules::default(), &Playfield::default())
}

// ---- Patterns ----

#[test]
fn test_spread_headings_default_fan() {
    let headings = spread_headings(5, 60.0);
    let degrees: Vec<f64> = headings.iter().map(|h| h.to_degrees()).collect();
    let expected = [240.0, 255.0, 270.0, 285.0, 300.0];
    assert_eq!(degrees.len(), 5);
    for (got, want) in degrees.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "{got} vs {want}");
    }
}

#[test]
fn test_spread_headings_even_and_symmetric() {
    for count in 2..=9 {
        let headings = spread_headings(count, 80.0);
        assert_eq!(headings.len(), count as usize);
        let step = headings[1] - headings[0];
        for pair in headings.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 1e-9);
        }
        let down = 270f64.to_radians();
        for (a, b) in headings.iter().zip(headings.iter().rev()) {
            assert!(((a - down) + (b - down)).abs() < 1e-9);
        }
        let span = headings[headings.len() - 1] - headings[0];
        assert!((span - 80f64.to_radians()).abs() < 1e-9);
    }
}

#[test]
fn test_single_spread_shot_goes_straight_down() {
    let headings = spread_headings(1, 60.0);
    assert_eq!(headings.len(), 1);
    assert!((headings[0].to_degrees() - 270.0).abs() < 1e-9);
}

#[test]
fn test_tracking_headings_offset_from_direct_line() {
    let origin = Vec2::new(400.0, 500.0);
    let target = Vec2::new(400.0, 40.0);
    let [left, right] = tracking_headings(origin, target, 90.0);
    // Direct line points straight down (-90°), so the shots go sideways.
    assert!((left - (-PI)).abs() < 1e-9);
    assert!(right.abs() < 1e-9);
}

#[test]
fn test_emit_tags_projectiles() {
    let spread = emit(&AttackPattern::spread_shot(), Vec2::ZERO, Vec2::ZERO, Vec2::ZERO);
    assert_eq!(spread.len(), 5);
    assert!(spread.iter().all(|p| p.kind == ProjectileKind::Spread));
    assert!(spread.iter().all(|p| (p.speed() - 4.0).abs() < 1e-9));
    assert!(spread.iter().all(|p| p.velocity.y < 0.0));

    let tracking = emit(
        &AttackPattern::tracking_shot(),
        Vec2::new(400.0, 450.0),
        Vec2::new(400.0, 500.0),
        Vec2::new(100.0, 40.0),
    );
    assert_eq!(tracking.len(), 2);
    assert!(tracking.iter().all(|p| p.kind == ProjectileKind::Tracking));
    assert!(tracking.iter().all(|p| (p.speed() - 3.0).abs() < 1e-9));
    assert!(tracking
        .iter()
        .all(|p| p.position == Vec2::new(400.0, 450.0)));
}

// ---- State machine ----

#[test]
fn test_boss_spawns_top_center() {
    let boss = spawn(AttackPattern::spread_shot());
    assert_eq!(boss.position(), Vec2::new(400.0, 500.0));
    assert_eq!(boss.health(), 150);
    assert_eq!(boss.max_health(), 150);
    assert_eq!(boss.state(), BossState::Active);
}

#[test]
fn test_boss_bounces_and_steps_down() {
    let field = Playfield::default();
    let mut boss = spawn(AttackPattern::spread_shot());
    let start_y = boss.position().y;
    // From x=400 moving +4: crosses 750 after 88 ticks.
    let mut ticks = 0;
    while boss.direction() > 0.0 {
        boss.tick(Vec2::new(400.0, 40.0), &field);
        ticks += 1;
        assert!(ticks < 1000, "boss never bounced");
    }
    assert_eq!(ticks, 88);
    assert!((boss.position().y - (start_y - 10.0)).abs() < 1e-9);
    boss.tick(Vec2::new(400.0, 40.0), &field);
    assert!(boss.position().x < 752.0 + 1e-9);
}

#[test]
fn test_boss_fires_on_cooldown() {
    let field = Playfield::default();
    let mut boss = spawn(AttackPattern::spread_shot());
    let ship = Vec2::new(400.0, 40.0);
    let mut fired_at = Vec::new();
    for t in 1..=90 {
        if boss.tick(ship, &field) {
            fired_at.push(t);
        }
    }
    assert_eq!(fired_at, vec![30, 60, 90]);
    assert_eq!(boss.projectiles.len(), 15);
    assert_eq!(boss.cooldown(), 0);
}

#[test]
fn test_take_damage_floors_and_reports_once() {
    let mut boss = spawn(AttackPattern::tracking_shot());
    assert!(!boss.take_damage(100));
    assert_eq!(boss.health(), 50);
    assert!(boss.take_damage(70));
    assert_eq!(boss.health(), 0);
    assert!(boss.is_destroyed());
    assert!(!boss.take_damage(5));
    assert_eq!(boss.health(), 0);
}

#[test]
fn test_boss_150_health_takes_30_hits() {
    let mut boss = spawn(AttackPattern::tracking_shot());
    let mut lethal_hits = 0;
    let mut hits = 0;
    while !boss.is_destroyed() {
        hits += 1;
        if boss.take_damage(5) {
            lethal_hits += 1;
        }
    }
    assert_eq!(hits, 30);
    assert_eq!(lethal_hits, 1);
}

#[test]
fn test_destroyed_boss_is_inert() {
    let mut boss = spawn(AttackPattern::spread_shot());
    boss.take_damage(1000);
    let pos = boss.position();
    for _ in 0..60 {
        assert!(!boss.tick(Vec2::ZERO, &Playfield::default()));
    }
    assert_eq!(boss.position(), pos);
    assert!(boss.projectiles.is_empty());
}

// ---- Profiles ----

#[test]
fn test_profile_for_level_defaults() {
    let rules = BossRules::default();
    assert_eq!(profile_for_level(&rules, 3).unwrap().unwrap().name, "boss_1");
    assert_eq!(profile_for_level(&rules, 6).unwrap().unwrap().name, "boss_2");
    assert!(profile_for_level(&rules, 4).unwrap().is_none());
}

#[test]
fn test_missing_profile_fails_loudly() {
    let mut rules = BossRules::default();
    rules.profiles.retain(|p| p.name != "boss_2");
    assert_eq!(
        profile_for_level(&rules, 6),
        Err(SimError::MissingBossProfile {
            level: 6,
            profile: "boss_2".into()
        })
    );
}
