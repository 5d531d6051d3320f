//! Static skills dataset shared by the chart and the summary grid.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

/// One labelled percentage score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillRecord {
    pub label: &'static str,
    /// Percentage in `0..=100`.
    pub score: u8,
}

impl SkillRecord {
    pub const fn new(label: &'static str, score: u8) -> Self {
        Self { label, score }
    }

    /// Grid caption, e.g. `"85%"`.
    pub fn percent_label(&self) -> String {
        format!("{}%", self.score)
    }
}

pub const SKILLS: [SkillRecord; 5] = [
    SkillRecord::new("Technical Skills", 85),
    SkillRecord::new("Problem Solving", 90),
    SkillRecord::new("Communication", 80),
    SkillRecord::new("Time Management", 88),
    SkillRecord::new("Leadership", 75),
];
