//! SVG line chart for labelled percentage series.
//!
//! Geometry comes from `util::line_chart`; this component only draws it.
//! Hovering a point shows its `label: score` readout above the dot.

use leptos::prelude::*;

use crate::state::skills::SkillRecord;
use crate::util::line_chart::{ChartFrame, line_path, plot, y_ticks};

fn coord(value: f64) -> String {
    format!("{value:.1}")
}

#[component]
pub fn LineChart(
    records: &'static [SkillRecord],
    #[prop(optional)] frame: Option<ChartFrame>,
    #[prop(optional, into)] label: String,
) -> impl IntoView {
    let frame = frame.unwrap_or_default();
    let points = plot(records, &frame);
    let path = line_path(&points);
    let hovered = RwSignal::new(None::<usize>);

    let grid_rows = y_ticks()
        .into_iter()
        .map(|tick| {
            let y = coord(frame.y_for(f64::from(tick)));
            view! {
                <line
                    class="chart__grid"
                    x1=coord(frame.plot_left())
                    x2=coord(frame.plot_right())
                    y1=y.clone()
                    y2=y.clone()
                    stroke-dasharray="3 3"
                ></line>
                <text
                    class="chart__tick"
                    x=coord(frame.plot_left() - 8.0)
                    y=y
                    text-anchor="end"
                    dominant-baseline="middle"
                >
                    {tick.to_string()}
                </text>
            }
        })
        .collect_view();

    let columns = points
        .iter()
        .map(|point| {
            let x = coord(point.x);
            view! {
                <line
                    class="chart__grid"
                    x1=x.clone()
                    x2=x.clone()
                    y1=coord(frame.plot_top())
                    y2=coord(frame.plot_bottom())
                    stroke-dasharray="3 3"
                ></line>
                <text
                    class="chart__tick chart__tick--x"
                    x=x
                    y=coord(frame.plot_bottom() + 20.0)
                    text-anchor="middle"
                >
                    {point.label}
                </text>
            }
        })
        .collect_view();

    let dots = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            view! {
                <circle
                    class="chart__dot"
                    cx=coord(point.x)
                    cy=coord(point.y)
                    r="4"
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave=move |_| hovered.set(None)
                ></circle>
            }
        })
        .collect_view();

    let readout = move || {
        hovered.get().and_then(|i| points.get(i).cloned()).map(|point| {
            view! {
                <text
                    class="chart__readout"
                    x=coord(point.x)
                    y=coord(point.y - 12.0)
                    text-anchor="middle"
                >
                    {format!("{}: {}", point.label, point.score)}
                </text>
            }
        })
    };

    view! {
        <svg
            class="chart"
            viewBox=frame.view_box()
            role="img"
            aria-label=label
            preserveAspectRatio="xMidYMid meet"
        >
            <g class="chart__axes">{grid_rows}{columns}</g>
            <path class="chart__line" d=path fill="none"></path>
            <g class="chart__dots">{dots}</g>
            {readout}
        </svg>
    }
}
