//! Line chart geometry for labelled percentage series.
//!
//! Maps an ordered slice of `SkillRecord`s into SVG plot coordinates. The
//! y-axis is fixed to `0..=100`; categories share the width evenly with half
//! a slot of padding at each end.

use crate::state::skills::SkillRecord;

#[cfg(test)]
#[path = "line_chart_test.rs"]
mod line_chart_test;

pub const Y_MAX: f64 = 100.0;
pub const Y_TICK_STEP: u8 = 25;

/// Outer SVG size and the margins reserved for axis labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 256.0,
            margin_left: 40.0,
            margin_right: 16.0,
            margin_top: 12.0,
            margin_bottom: 32.0,
        }
    }
}

impl ChartFrame {
    pub fn plot_left(&self) -> f64 {
        self.margin_left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin_right
    }

    pub fn plot_top(&self) -> f64 {
        self.margin_top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }

    pub fn plot_width(&self) -> f64 {
        (self.plot_right() - self.plot_left()).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.plot_bottom() - self.plot_top()).max(0.0)
    }

    /// SVG `viewBox` attribute value.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Y coordinate for a value on the `0..=Y_MAX` axis.
    pub fn y_for(&self, value: f64) -> f64 {
        let clamped = value.clamp(0.0, Y_MAX);
        self.plot_top() + (1.0 - clamped / Y_MAX) * self.plot_height()
    }
}

/// One plotted record.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub label: &'static str,
    pub score: u8,
    pub x: f64,
    pub y: f64,
}

/// Plot `records` in order inside `frame`.
pub fn plot(records: &[SkillRecord], frame: &ChartFrame) -> Vec<ChartPoint> {
    if records.is_empty() {
        return Vec::new();
    }
    #[allow(clippy::cast_precision_loss)]
    let slot = frame.plot_width() / records.len() as f64;
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            #[allow(clippy::cast_precision_loss)]
            let x = frame.plot_left() + slot * (i as f64 + 0.5);
            ChartPoint {
                label: record.label,
                score: record.score,
                x,
                y: frame.y_for(f64::from(record.score)),
            }
        })
        .collect()
}

/// SVG path data (`M x y L x y ...`) through `points` in order.
pub fn line_path(points: &[ChartPoint]) -> String {
    let mut path = String::new();
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            path.push(' ');
        }
        let cmd = if i == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{cmd}{:.1} {:.1}", point.x, point.y));
    }
    path
}

/// Y-axis tick values from 0 to `Y_MAX`.
pub fn y_ticks() -> Vec<u8> {
    (0..=100).step_by(usize::from(Y_TICK_STEP)).collect()
}
