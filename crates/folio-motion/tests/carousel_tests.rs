// Integration tests for the carousel state machine, driven on a virtual clock.

use folio_motion::*;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn started(n: usize) -> CarouselController<ManualScheduler> {
    let mut c = CarouselController::new(CarouselConfig::new(n), ManualScheduler::new());
    c.start();
    c
}

#[test]
fn initial_state() {
    let c = started(5);
    let s = c.state();
    assert_eq!(s.active_index, Some(0));
    assert_eq!(s.direction, Direction::None);
    assert!(s.is_auto_playing);
    assert!(!s.is_hovering);
    assert!(c.has_live_timer());
    assert_eq!(c.scheduler().pending(), 1);
}

#[test]
fn one_autoplay_fire_advances_forward() {
    let mut c = started(5);
    c.advance_clock(ms(4999));
    assert_eq!(c.active_index(), Some(0));
    c.advance_clock(ms(1));
    assert_eq!(c.active_index(), Some(1));
    assert_eq!(c.direction(), Direction::Forward);
    assert_eq!(c.scheduler().pending(), 1);
}

#[test]
fn autoplay_keeps_cadence_and_wraps() {
    let mut c = started(3);
    c.advance_clock(ms(15_000));
    assert_eq!(c.active_index(), Some(0));
    assert_eq!(c.scheduler().armed_total(), 4);
}

#[test]
fn wraparound_navigation() {
    let mut c = started(5);
    c.navigate_to_slide(-1, Direction::Backward);
    assert_eq!(c.active_index(), Some(4));
    c.navigate_to_slide(5, Direction::Forward);
    assert_eq!(c.active_index(), Some(0));
    c.navigate_to_slide(3, Direction::Forward);
    assert_eq!(c.active_index(), Some(3));
}

#[test]
fn manual_next_wraps_from_last() {
    let mut c = started(5);
    c.select_index(4);
    c.next();
    assert_eq!(c.active_index(), Some(0));
    assert_eq!(c.direction(), Direction::Forward);
}

#[test]
fn prev_from_first_wraps_backward() {
    let mut c = started(5);
    c.prev();
    assert_eq!(c.active_index(), Some(4));
    assert_eq!(c.direction(), Direction::Backward);
}

#[test]
fn double_hover_start_cancels_once_and_arms_nothing() {
    let mut c = started(5);
    c.hover_start();
    c.hover_start();
    assert!(!c.has_live_timer());
    assert_eq!(c.scheduler().pending(), 0);
    assert_eq!(c.scheduler().armed_total(), 1);
    assert_eq!(c.scheduler().cancelled_total(), 1);
    assert_eq!(c.phase(), CarouselPhase::Paused);
}

#[test]
fn hover_pauses_until_a_full_interval_after_hover_end() {
    let mut c = started(5);
    c.advance_clock(ms(2000));
    c.hover_start();
    c.advance_clock(ms(20_000));
    assert_eq!(c.active_index(), Some(0));
    c.hover_end();
    c.advance_clock(ms(4999));
    assert_eq!(c.active_index(), Some(0));
    c.advance_clock(ms(1));
    assert_eq!(c.active_index(), Some(1));
}

#[test]
fn manual_navigation_restarts_the_interval() {
    let mut c = started(5);
    c.advance_clock(ms(4000));
    c.next();
    assert_eq!(c.active_index(), Some(1));
    c.advance_clock(ms(4000));
    assert_eq!(c.active_index(), Some(1));
    c.advance_clock(ms(1000));
    assert_eq!(c.active_index(), Some(2));
    assert_eq!(c.scheduler().pending(), 1);
}

#[test]
fn stale_handle_does_not_double_advance() {
    let mut c = started(5);
    let stale = TimerHandle(0);
    c.next();
    c.on_timer_fire(stale);
    assert_eq!(c.active_index(), Some(1));
    assert_eq!(c.scheduler().pending(), 1);
}

#[test]
fn select_index_sets_direction_by_sign() {
    let mut c = started(5);
    c.select_index(3);
    assert_eq!(c.direction(), Direction::Forward);
    c.select_index(1);
    assert_eq!(c.direction(), Direction::Backward);
    c.select_index(1);
    assert_eq!(c.direction(), Direction::None);
    c.select_index(7);
    assert_eq!(c.active_index(), Some(1));
}

#[test]
fn empty_carousel_is_inert() {
    let mut c = started(0);
    assert_eq!(c.active_index(), None);
    assert!(!c.has_live_timer());
    c.next();
    c.prev();
    c.select_index(0);
    c.navigate_to_slide(2, Direction::Forward);
    c.advance_clock(ms(60_000));
    assert_eq!(c.state().active_index, None);
    assert_eq!(c.scheduler().armed_total(), 0);
}

#[test]
fn single_slide_never_autoplays_and_holds_index() {
    let mut c = started(1);
    assert!(!c.has_live_timer());
    c.select_index(0);
    c.next();
    assert_eq!(c.active_index(), Some(0));
    assert_eq!(c.direction(), Direction::None);
    c.prev();
    assert_eq!(c.direction(), Direction::None);
    c.advance_clock(ms(60_000));
    assert_eq!(c.scheduler().armed_total(), 0);
}

#[test]
fn disabled_autoplay_never_arms() {
    let mut c = CarouselController::new(
        CarouselConfig::new(4).with_autoplay(false),
        ManualScheduler::new(),
    );
    c.start();
    c.next();
    c.hover_start();
    c.hover_end();
    c.advance_clock(ms(30_000));
    assert_eq!(c.active_index(), Some(1));
    assert_eq!(c.scheduler().armed_total(), 0);
    assert!(!c.state().is_auto_playing);
}

#[test]
fn toggling_autoplay_arms_and_cancels() {
    let mut c = started(4);
    c.toggle_autoplay();
    assert!(!c.has_live_timer());
    c.advance_clock(ms(10_000));
    assert_eq!(c.active_index(), Some(0));
    c.set_autoplay(true);
    c.advance_clock(ms(5000));
    assert_eq!(c.active_index(), Some(1));
}

#[test]
fn stop_makes_controller_inert() {
    let mut c = started(5);
    c.stop();
    assert_eq!(c.phase(), CarouselPhase::Stopped);
    assert_eq!(c.scheduler().pending(), 0);
    c.next();
    c.hover_end();
    c.advance_clock(ms(10_000));
    assert_eq!(c.active_index(), Some(0));
    c.start();
    assert!(c.has_live_timer());
}

#[test]
fn shrinking_slides_keeps_index_valid() {
    let mut c = started(5);
    c.select_index(4);
    c.set_slide_count(3);
    assert_eq!(c.active_index(), Some(2));
    c.set_slide_count(1);
    assert_eq!(c.active_index(), Some(0));
    assert!(!c.has_live_timer());
    c.set_slide_count(0);
    assert_eq!(c.active_index(), None);
    c.set_slide_count(6);
    assert_eq!(c.active_index(), Some(0));
    assert!(c.has_live_timer());
}

#[test]
fn custom_interval_is_respected() {
    let cfg = CarouselConfig::new(3).with_interval_ms(1200).unwrap();
    let mut c = CarouselController::new(cfg, ManualScheduler::new());
    c.start();
    c.advance_clock(ms(1200));
    assert_eq!(c.active_index(), Some(1));
    assert_eq!(
        CarouselConfig::new(3).with_interval_ms(0),
        Err(ConfigError::ZeroInterval)
    );
}
