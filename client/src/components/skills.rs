//! Skills section: line chart and percentage grid over the same dataset.

use leptos::prelude::*;

use crate::components::line_chart::LineChart;
use crate::content::anchor;
use crate::state::skills::{SKILLS, SkillRecord};

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

/// Caption pairs shown in the grid, in dataset order.
pub fn grid_cells(records: &[SkillRecord]) -> Vec<(&'static str, String)> {
    records.iter().map(|r| (r.label, r.percent_label())).collect()
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=anchor::SKILLS class="section section--alt">
            <div class="section__inner">
                <h2 class="section__title">"Skills"</h2>
                <div class="card">
                    <div class="skills__chart">
                        <LineChart records=&SKILLS label="Skill scores by area"/>
                    </div>
                    <div class="skills__grid">
                        {grid_cells(&SKILLS)
                            .into_iter()
                            .map(|(label, percent)| {
                                view! {
                                    <div class="skills__cell">
                                        <h3 class="skills__label">{label}</h3>
                                        <p class="skills__score">{percent}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
