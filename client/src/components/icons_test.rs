use super::*;

#[test]
fn theme_button_offers_the_opposite_mode() {
    assert_eq!(theme_glyph(true), Glyph::Sun);
    assert_eq!(theme_glyph(false), Glyph::Moon);
}

#[test]
fn menu_button_shows_close_while_open() {
    assert_eq!(menu_glyph(true), Glyph::Close);
    assert_eq!(menu_glyph(false), Glyph::Menu);
}

#[test]
fn every_glyph_has_path_data() {
    for glyph in [
        Glyph::Sun,
        Glyph::Moon,
        Glyph::Menu,
        Glyph::Close,
        Glyph::ChevronDown,
    ] {
        let paths = glyph.paths();
        assert!(!paths.is_empty(), "{glyph:?}");
        assert!(paths.iter().all(|d| d.starts_with(['M', 'm'])), "{glyph:?}");
    }
}
