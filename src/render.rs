use crate::config::LayoutConfig;
use crate::ir::{BarChart, Diagram, Flowchart, SequenceDiagram};
use crate::layout::{
    TextLayout, compute_bar_chart_layout, compute_flowchart_layout, compute_layout,
    compute_sequence_layout,
};
use crate::theme::Theme;

/// Anything that can be drawn as terminal text. Rendering never fails and
/// never mutates the model.
pub trait Render {
    fn render_with(&self, theme: &Theme, config: &LayoutConfig) -> String;

    fn render(&self) -> String {
        self.render_with(&Theme::default(), &LayoutConfig::default())
    }
}

impl Render for Flowchart {
    fn render_with(&self, theme: &Theme, config: &LayoutConfig) -> String {
        render_text(&compute_flowchart_layout(self, theme, config))
    }
}

impl Render for SequenceDiagram {
    fn render_with(&self, theme: &Theme, config: &LayoutConfig) -> String {
        render_text(&compute_sequence_layout(self, theme, config))
    }
}

impl Render for BarChart {
    fn render_with(&self, theme: &Theme, config: &LayoutConfig) -> String {
        render_text(&compute_bar_chart_layout(self, theme, config))
    }
}

impl Render for Diagram {
    fn render_with(&self, theme: &Theme, config: &LayoutConfig) -> String {
        render_text(&compute_layout(self, theme, config))
    }
}

/// Joins layout rows with `\n`. No trailing newline is added.
pub fn render_text(layout: &TextLayout) -> String {
    layout.lines.join("\n")
}
