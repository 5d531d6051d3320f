use super::*;

#[test]
fn theme_state_defaults_to_light() {
    let theme = ThemeState::default();
    assert!(!theme.dark);
    assert_eq!(theme.root_class(), None);
}

#[test]
fn toggle_returns_new_value() {
    let mut theme = ThemeState::default();
    assert!(theme.toggle());
    assert!(theme.dark);
    assert!(!theme.toggle());
    assert!(!theme.dark);
}

#[test]
fn toggle_parity_decides_final_value() {
    for n in 0..10 {
        let mut theme = ThemeState::default();
        for _ in 0..n {
            theme.toggle();
        }
        assert_eq!(theme.dark, n % 2 == 1, "after {n} toggles");
    }
}

#[test]
fn dark_theme_exposes_root_class_and_light_removes_it() {
    let mut theme = ThemeState::default();
    theme.toggle();
    assert_eq!(theme.root_class(), Some("dark"));
    theme.toggle();
    assert_eq!(theme.root_class(), None);
}
