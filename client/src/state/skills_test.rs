use super::*;

#[test]
fn dataset_has_five_records_in_fixed_order() {
    let labels: Vec<_> = SKILLS.iter().map(|s| s.label).collect();
    assert_eq!(
        labels,
        [
            "Technical Skills",
            "Problem Solving",
            "Communication",
            "Time Management",
            "Leadership",
        ]
    );
    let scores: Vec<_> = SKILLS.iter().map(|s| s.score).collect();
    assert_eq!(scores, [85, 90, 80, 88, 75]);
}

#[test]
fn scores_are_percentages() {
    assert!(SKILLS.iter().all(|s| s.score <= 100));
}

#[test]
fn labels_are_unique() {
    for (i, a) in SKILLS.iter().enumerate() {
        for b in &SKILLS[i + 1..] {
            assert_ne!(a.label, b.label);
        }
    }
}

#[test]
fn percent_label_appends_sign() {
    assert_eq!(SKILLS[0].percent_label(), "85%");
    assert_eq!(SkillRecord::new("x", 0).percent_label(), "0%");
}
