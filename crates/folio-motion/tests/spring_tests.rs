// Integration tests for spring smoothing.

use folio_motion::*;

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn critically_damped_spring_approaches_without_overshoot() {
    for &(stiffness, mass) in &[(100.0_f32, 1.0_f32), (150.0, 0.1), (400.0, 2.0), (30.0, 0.5)] {
        let cfg = SpringConfig::critical(stiffness, mass).unwrap();
        let mut s = Spring::new(cfg, 0.0);
        s.set_target(100.0);
        let mut prev_gap = (s.get() - s.target()).abs();
        let mut settled_at = None;
        for frame in 0..600 {
            s.tick(FRAME);
            let gap = (s.get() - s.target()).abs();
            assert!(gap <= prev_gap, "gap grew at frame {frame}: {prev_gap} -> {gap}");
            assert!(s.get() <= 100.0, "overshoot at frame {frame}: {}", s.get());
            if gap < 0.01 && settled_at.is_none() {
                settled_at = Some(frame);
            }
            prev_gap = gap;
        }
        assert!(settled_at.is_some(), "k={stiffness} m={mass} never settled");
        assert!(s.is_at_rest());
    }
}

#[test]
fn overdamped_spring_never_crosses_target_from_above() {
    let cfg = SpringConfig::new(80.0, 40.0, 1.0).unwrap();
    assert!(cfg.damping_ratio() > 1.0);
    let mut s = Spring::new(cfg, 50.0);
    s.set_target(-20.0);
    for _ in 0..600 {
        s.tick(1.0 / 30.0);
        assert!(s.get() >= -20.0);
    }
    assert!((s.get() + 20.0).abs() < 0.01);
}

#[test]
fn underdamped_spring_overshoots_but_stays_bounded() {
    let cfg = SpringConfig::new(300.0, 4.0, 1.0).unwrap();
    assert!(cfg.damping_ratio() < 1.0);
    let mut s = Spring::new(cfg, 0.0);
    s.set_target(1.0);
    let mut peak = 0.0_f32;
    for _ in 0..300 {
        s.tick(1.0 / 30.0);
        assert!(s.get().is_finite());
        assert!(s.get().abs() < 3.0);
        peak = peak.max(s.get());
    }
    assert!(peak > 1.0, "expected some overshoot, peak {peak}");
    assert!((s.get() - 1.0).abs() < 0.05);
}

#[test]
fn retargeting_keeps_velocity_and_position_continuous() {
    let mut s = Spring::new(SpringConfig::new(120.0, 6.0, 1.0).unwrap(), 0.0);
    s.set_target(10.0);
    for _ in 0..10 {
        s.tick(FRAME);
    }
    let (x, v) = (s.get(), s.velocity());
    assert!(v > 0.0);
    s.set_target(-10.0);
    assert_eq!(s.get(), x);
    assert_eq!(s.velocity(), v);
    s.tick(FRAME);
    assert!((s.get() - x).abs() < v.abs() * FRAME * 2.0);
}

#[test]
fn get_does_not_advance() {
    let mut s = Spring::new(SpringConfig::default(), 1.0);
    s.set_target(2.0);
    let a = s.get();
    let b = s.get();
    assert_eq!(a, b);
    assert_eq!(a, 1.0);
}

#[test]
fn jump_settles_immediately() {
    let mut s = Spring::new(SpringConfig::default(), 0.0);
    s.set_target(5.0);
    s.tick(FRAME);
    s.jump(3.0);
    assert_eq!(s.get(), 3.0);
    assert_eq!(s.target(), 3.0);
    assert!(s.is_at_rest());
}

#[test]
fn long_frames_are_truncated_not_exploded() {
    let mut s = Spring::new(SpringConfig::new(500.0, 1.0, 0.2).unwrap(), 0.0);
    s.set_target(1.0);
    s.tick(10.0);
    assert!(s.get().is_finite());
    assert!(s.get().abs() < 3.0);
}

#[test]
fn mapped_header_height_from_progress() {
    let mut s = Spring::new(SpringConfig::critical(200.0, 1.0).unwrap(), 0.0);
    assert_eq!(s.mapped((0.0, 1.0), (90.0, 70.0), true), 90.0);
    s.set_target(1.0);
    for _ in 0..240 {
        s.tick(FRAME);
    }
    assert!((s.mapped((0.0, 1.0), (90.0, 70.0), true) - 70.0).abs() < 0.01);
}

#[test]
fn very_stiff_spring_stays_finite_and_settles() {
    let cfg = SpringConfig::new(1.0e6, 0.0, 0.001).unwrap();
    let mut s = Spring::new(cfg, 0.0);
    s.set_target(1.0);
    for frame in 0..60 {
        s.tick(1.0 / 30.0);
        assert!(s.get().is_finite(), "non-finite at frame {frame}");
        assert!(s.get().abs() < 2.0, "blew up at frame {frame}: {}", s.get());
    }
    assert!((s.get() - 1.0).abs() < 1e-3);

    // still responsive afterwards
    s.set_target(-1.0);
    for _ in 0..60 {
        s.tick(1.0 / 30.0);
    }
    assert!((s.get() + 1.0).abs() < 1e-3);
}

#[test]
fn heavily_overdamped_spring_eases_instead_of_snapping() {
    // ζ ≈ 82: the slow mode has a time constant of c/k ≈ 1.33 s
    let cfg = SpringConfig::new(150.0, 200.0, 0.01).unwrap();
    assert!(cfg.damping_ratio() > 50.0);
    let mut s = Spring::new(cfg, 0.0);
    s.set_target(1.0);

    s.tick(1.0 / 30.0);
    let first = s.get();
    assert!(first > 0.0 && first < 0.1, "first frame jumped to {first}");

    let mut prev = first;
    for frame in 1..60 {
        s.tick(1.0 / 30.0);
        assert!(s.get() >= prev, "moved backwards at frame {frame}");
        assert!(s.get() <= 1.0, "overshoot at frame {frame}: {}", s.get());
        prev = s.get();
    }
    // about 1 - e^-1.5 after two seconds
    assert!(s.get() > 0.7 && s.get() < 0.85, "after 2 s: {}", s.get());
    assert!(!s.is_at_rest());
}
