use super::*;
use crate::util::line_chart::{ChartFrame, plot};

#[test]
fn grid_cells_format_scores_as_percentages() {
    let cells = grid_cells(&SKILLS);
    assert_eq!(cells[0], ("Technical Skills", "85%".to_owned()));
    assert_eq!(cells[4], ("Leadership", "75%".to_owned()));
}

#[test]
fn grid_and_chart_show_the_same_pairs_in_order() {
    let grid: Vec<_> = grid_cells(&SKILLS)
        .into_iter()
        .map(|(label, percent)| (label, percent.trim_end_matches('%').parse::<u8>().unwrap()))
        .collect();
    let chart: Vec<_> = plot(&SKILLS, &ChartFrame::default())
        .into_iter()
        .map(|p| (p.label, p.score))
        .collect();
    let dataset: Vec<_> = SKILLS.iter().map(|s| (s.label, s.score)).collect();

    assert_eq!(grid.len(), 5);
    assert_eq!(grid, dataset);
    assert_eq!(chart, dataset);
}
