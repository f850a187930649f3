// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks across the config layer and the pure clock model.

use std::time::{Duration, Instant};

use iced::{Point, Size};
use miclock::clock::{geometry, FaceMetrics, HandAngles};
use miclock::config::{self, Config};
use miclock::ui::state::{TiltAngles, TiltState, SPRING_BACK_DURATION};
use tempfile::tempdir;

#[test]
fn test_background_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        background_color: Some("#237EAD".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(loaded.background(), config::parse_color("#237EAD").unwrap());

    let green_config = Config {
        background_color: Some("#1B5E20".to_string()),
        ..Config::default()
    };
    config::save_to_path(&green_config, &temp_config_file_path)
        .expect("Failed to write changed config file");

    let reloaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load changed config from path");
    assert_eq!(
        reloaded.background(),
        config::parse_color("#1B5E20").unwrap()
    );

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let missing = dir.path().join("does-not-exist.toml");

    assert!(config::load_from_path(&missing).is_err());
    let config = Config::default();
    assert_eq!(config.max_tilt_degrees(), config::DEFAULT_MAX_TILT_DEGREES);
}

#[test]
fn test_hand_angles_match_face_orientation() {
    // At 9:45:15 every hand points into a distinct quadrant.
    let angles = HandAngles::from_clock(9, 45, 15, 0);
    assert!(angles.hour > 270.0 && angles.hour < 315.0);
    assert!((angles.minute - 271.5).abs() < 1e-3);
    assert_eq!(angles.second, 90.0);
}

#[test]
fn test_face_layout_scales_with_the_window() {
    let config = Config::default();
    for edge in [320.0_f32, 800.0, 1600.0] {
        let metrics = FaceMetrics::new(Size::new(edge, edge), config.text_size());
        let ticks = geometry::tick_marks(&metrics);
        assert_eq!(ticks.count, 200);
        assert!(metrics.corner_arc_radius() > metrics.ring_radius());
        assert!(ticks.inner > metrics.cover_circle_radii().0);
    }
}

#[test]
fn test_touch_tilt_cycle_respects_the_configured_maximum() {
    let config = Config {
        max_tilt_degrees: Some(20.0),
        ..Config::default()
    };
    let metrics = FaceMetrics::new(Size::new(800.0, 800.0), config.text_size());

    // Press at the right edge: full tilt around the vertical axis.
    let tilt = TiltAngles::toward(
        Point::new(800.0, 400.0),
        &metrics,
        config.max_tilt_degrees(),
    );
    assert_eq!(tilt.y, 20.0);
    assert_eq!(tilt.x, 0.0);

    let mut state = TiltState::default();
    state.press(tilt);

    let released_at = Instant::now();
    state.release(released_at);
    assert!(state.is_animating());

    // Mid-animation the spring overshoots past flat.
    let mid = state.current(released_at + Duration::from_millis(200));
    assert!(mid.y < 0.0);

    state.tick(released_at + SPRING_BACK_DURATION);
    assert_eq!(state, TiltState::Idle);
    assert_eq!(
        state.current(released_at + SPRING_BACK_DURATION),
        TiltAngles::default()
    );
}
