use super::*;

#[test]
fn nav_links_follow_page_order() {
    let anchors: Vec<_> = NAV_LINKS.iter().map(|l| l.anchor).collect();
    assert_eq!(anchors, ["home", "about", "experience", "skills", "contact"]);
}

#[test]
fn nav_anchors_are_unique() {
    for (i, a) in NAV_LINKS.iter().enumerate() {
        for b in &NAV_LINKS[i + 1..] {
            assert_ne!(a.anchor, b.anchor);
        }
    }
}

#[test]
fn nav_href_is_fragment() {
    assert_eq!(NAV_LINKS[3].href(), "#skills");
}

#[test]
fn experience_entries_have_three_highlights() {
    assert_eq!(EXPERIENCE.len(), 2);
    for entry in &EXPERIENCE {
        assert_eq!(entry.highlights.len(), 3, "{}", entry.title);
    }
}

#[test]
fn about_cards_cover_education_languages_interests() {
    let headings: Vec<_> = ABOUT_CARDS.iter().map(|c| c.heading).collect();
    assert_eq!(headings, ["Education", "Languages", "Interests"]);
}

#[test]
fn initials_match_owner_name() {
    let initials: String = OWNER_NAME
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();
    assert_eq!(initials, OWNER_INITIALS);
}
