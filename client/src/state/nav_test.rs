use super::*;

// =============================================================
// NavState defaults
// =============================================================

#[test]
fn nav_state_default_is_closed_and_unscrolled() {
    let state = NavState::default();
    assert!(!state.menu_open);
    assert!(!state.scrolled);
}

// =============================================================
// Menu toggle
// =============================================================

#[test]
fn open_then_close_leaves_menu_closed() {
    let mut state = NavState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn double_toggle_restores_original_state_from_open() {
    let mut state = NavState {
        menu_open: true,
        scrolled: false,
    };
    state.toggle_menu();
    state.toggle_menu();
    assert!(state.menu_open);
}

#[test]
fn menu_toggle_does_not_touch_scrolled() {
    let mut state = NavState::default();
    state.record_scroll(120.0);
    state.toggle_menu();
    assert!(state.scrolled);
}

// =============================================================
// Scroll threshold
// =============================================================

#[test]
fn threshold_is_strictly_greater_than_fifty() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(50.5));
    assert!(is_scrolled(51.0));
}

#[test]
fn non_finite_offsets_are_not_scrolled() {
    assert!(!is_scrolled(f64::NAN));
    assert!(!is_scrolled(f64::INFINITY));
}

#[test]
fn scrolled_tracks_only_the_latest_offset() {
    let offsets = [0.0, 10.0, 75.0, 300.0, 49.0, 51.0, 50.0, 1000.0, 0.0];
    let mut state = NavState::default();
    for offset in offsets {
        state.record_scroll(offset);
        assert_eq!(state.scrolled, offset > 50.0, "offset {offset}");
    }
}
