mod barchart;
mod flowchart;
mod sequence;
mod shapes;
pub use barchart::compute_bar_chart_layout;
pub use flowchart::compute_flowchart_layout;
pub use sequence::compute_sequence_layout;

use crate::config::LayoutConfig;
use crate::ir::Diagram;
use crate::text_metrics::measure_text_width;
use crate::theme::Theme;

/// A laid-out diagram: one entry per terminal row, without trailing newlines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLayout {
    pub lines: Vec<String>,
}

impl TextLayout {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Widest row in terminal cells.
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| measure_text_width(line))
            .max()
            .unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }
}

pub fn compute_layout(diagram: &Diagram, theme: &Theme, config: &LayoutConfig) -> TextLayout {
    match diagram {
        Diagram::Flowchart(flow) => compute_flowchart_layout(flow, theme, config),
        Diagram::Sequence(seq) => compute_sequence_layout(seq, theme, config),
        Diagram::BarChart(chart) => compute_bar_chart_layout(chart, theme, config),
    }
}

/// Appends cells to a row while tracking its display width, so columns can be
/// addressed by cell offset.
#[derive(Debug, Default)]
struct RowWriter {
    line: String,
    cells: usize,
}

impl RowWriter {
    fn push(&mut self, text: &str) {
        self.cells += measure_text_width(text);
        self.line.push_str(text);
    }

    fn push_repeated(&mut self, glyph: &str, count: usize) {
        for _ in 0..count {
            self.push(glyph);
        }
    }

    /// Pads with spaces up to `column`. A row that already overran the column
    /// gets a single separating space instead.
    fn pad_to(&mut self, column: usize) {
        if self.cells < column {
            let gap = column - self.cells;
            self.push(&" ".repeat(gap));
        } else if self.cells > column {
            self.push(" ");
        }
    }

    fn finish(self) -> String {
        self.line
    }
}
