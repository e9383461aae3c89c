use super::*;
use crate::config::SequenceConfig;
use crate::ir::{Message, SequenceDiagram};
use crate::text_metrics::pad_center;

/// Fixed-pitch actor columns. Column `i` starts at `i * (width + spacing)`.
struct ActorGrid<'a> {
    width: usize,
    spacing: usize,
    count: usize,
    theme: &'a Theme,
}

impl ActorGrid<'_> {
    fn column_start(&self, idx: usize) -> usize {
        idx * (self.width + self.spacing)
    }

    fn center(&self) -> usize {
        self.width / 2
    }

    fn idle_cell(&self, row: &mut RowWriter) {
        row.push(&" ".repeat(self.center()));
        row.push(&self.theme.vertical);
        row.push(&" ".repeat(self.width - self.center() - 1));
    }

    fn idle_columns(&self, row: &mut RowWriter, columns: std::ops::Range<usize>) {
        for idx in columns {
            row.pad_to(self.column_start(idx));
            self.idle_cell(row);
        }
    }

    fn lifeline_row(&self) -> String {
        let mut row = RowWriter::default();
        self.idle_columns(&mut row, 0..self.count);
        row.finish()
    }

    fn box_edge_row(&self, left: &str, right: &str) -> String {
        let mut row = RowWriter::default();
        for idx in 0..self.count {
            row.pad_to(self.column_start(idx));
            row.push(left);
            row.push_repeated(&self.theme.horizontal, self.width - 2);
            row.push(right);
        }
        row.finish()
    }

    fn cross_message_row(&self, from: usize, to: usize, message: &Message) -> String {
        let (lo, hi) = (from.min(to), from.max(to));
        let mut row = RowWriter::default();
        self.idle_columns(&mut row, 0..lo);

        row.pad_to(self.column_start(lo) + self.center());
        let span = (hi - lo) * (self.width + self.spacing) - self.spacing;
        let label_width = measure_text_width(&message.label);
        // Long labels clamp the rule to nothing instead of failing.
        let rule_len = span.saturating_sub(label_width + 2);
        let glyph = if message.kind.is_dashed() {
            &self.theme.dashed
        } else {
            &self.theme.horizontal
        };
        let rule = glyph.repeat(rule_len / 2);
        let pad = if rule_len > 0 { " " } else { "" };
        let body = format!("{rule}{pad}{}{pad}{rule}", message.label);

        if from < to {
            row.push(&body);
            row.push(&self.theme.arrow_right);
        } else {
            row.push(&self.theme.arrow_left);
            row.push(&body);
        }

        self.idle_columns(&mut row, hi + 1..self.count);
        row.finish()
    }

    fn self_message_row(&self, idx: usize, message: &Message) -> String {
        let mut row = RowWriter::default();
        self.idle_columns(&mut row, 0..idx);

        row.pad_to(self.column_start(idx));
        row.push(&" ".repeat(self.center()));
        row.push(&self.theme.vertical);
        row.push(&self.theme.arrow_right);
        row.push(&format!("[{}]", message.label));

        self.idle_columns(&mut row, idx + 1..self.count);
        row.finish()
    }
}

pub fn compute_sequence_layout(
    seq: &SequenceDiagram,
    theme: &Theme,
    config: &LayoutConfig,
) -> TextLayout {
    if seq.actors.is_empty() {
        return TextLayout::default();
    }
    let SequenceConfig {
        actor_width,
        actor_spacing,
    } = config.sequence;
    let grid = ActorGrid {
        width: actor_width.max(2),
        spacing: actor_spacing,
        count: seq.actors.len(),
        theme,
    };
    let mut layout = TextLayout::default();

    let mut header = RowWriter::default();
    for (idx, actor) in seq.actors.iter().enumerate() {
        header.pad_to(grid.column_start(idx));
        header.push(&pad_center(&actor.name, grid.width));
    }
    layout.push(header.finish());
    layout.push(grid.box_edge_row(&theme.top_left, &theme.top_right));

    for message in &seq.messages {
        let (Some(from), Some(to)) = (seq.actor_index(&message.from), seq.actor_index(&message.to))
        else {
            tracing::debug!(
                from = %message.from,
                to = %message.to,
                "skipping message with unknown actor"
            );
            continue;
        };
        layout.push(grid.lifeline_row());
        if message.is_self || from == to {
            layout.push(grid.self_message_row(from, message));
        } else {
            layout.push(grid.cross_message_row(from, to, message));
        }
    }

    layout.push(grid.lifeline_row());
    layout.push(grid.box_edge_row(&theme.bottom_left, &theme.bottom_right));
    layout
}
