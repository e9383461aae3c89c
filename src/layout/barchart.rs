use super::*;
use crate::config::BarChartConfig;
use crate::ir::{Bar, BarChart, BarOrientation};
use crate::text_metrics::{format_value, pad_center, pad_right};

pub fn compute_bar_chart_layout(
    chart: &BarChart,
    theme: &Theme,
    config: &LayoutConfig,
) -> TextLayout {
    if chart.bars.is_empty() {
        return TextLayout::default();
    }
    let mut layout = TextLayout::default();
    if let Some(title) = chart.title.as_deref() {
        layout.push(title);
        layout.push(theme.title_underline.repeat(measure_text_width(title)));
        layout.push("");
    }
    match chart.orientation {
        BarOrientation::Horizontal => horizontal_bars(chart, theme, &mut layout),
        BarOrientation::Vertical => vertical_bars(chart, theme, &config.bar_chart, &mut layout),
    }
    layout
}

/// Number of glyphs for `value` when `max` maps to `span` glyphs.
fn scaled_length(value: f64, max: f64, span: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * span as f64).floor() as usize
}

fn colored(bar: &Bar, glyphs: String, theme: &Theme) -> String {
    match bar.color.as_deref() {
        Some(color) => format!("{color}{glyphs}{}", theme.color_reset),
        None => glyphs,
    }
}

fn horizontal_bars(chart: &BarChart, theme: &Theme, layout: &mut TextLayout) {
    let max = chart.max_value();
    let label_width = chart
        .bars
        .iter()
        .map(|bar| measure_text_width(&bar.label))
        .max()
        .unwrap_or(0);

    for bar in &chart.bars {
        let length = scaled_length(bar.value, max, chart.width);
        let mut line = format!("{} {} ", pad_right(&bar.label, label_width), theme.vertical);
        line.push_str(&colored(bar, theme.bar_block.repeat(length), theme));
        if chart.show_values {
            line.push(' ');
            line.push_str(&format_value(bar.value));
        }
        layout.push(line);
    }
}

fn vertical_bars(
    chart: &BarChart,
    theme: &Theme,
    config: &BarChartConfig,
    layout: &mut TextLayout,
) {
    let max = chart.max_value();
    let column_width = chart.width.max(config.min_column_width);
    let gap = " ".repeat(config.column_gap);
    let columns = chart.bars.len();

    for row in (0..=chart.height).rev() {
        let threshold = if chart.height == 0 {
            0.0
        } else {
            (row as f64 / chart.height as f64) * max
        };
        let cells: Vec<String> = chart
            .bars
            .iter()
            .map(|bar| {
                if bar.value >= threshold {
                    colored(bar, theme.bar_block.repeat(column_width), theme)
                } else {
                    " ".repeat(column_width)
                }
            })
            .collect();
        layout.push(cells.join(gap.as_str()));
    }

    let total_width = columns * column_width + (columns - 1) * config.column_gap;
    layout.push(theme.horizontal.repeat(total_width));

    let labels: Vec<String> = chart
        .bars
        .iter()
        .map(|bar| pad_center(&bar.label, column_width))
        .collect();
    layout.push(labels.join(gap.as_str()));

    if chart.show_values {
        let values: Vec<String> = chart
            .bars
            .iter()
            .map(|bar| pad_center(&format_value(bar.value), column_width))
            .collect();
        layout.push(values.join(gap.as_str()));
    }
}
