use crate::theme::Theme;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowchartConfig {
    /// Columns before the `│ label` and arrow lines of a vertical edge.
    pub edge_indent: usize,
    /// Spaces between consecutive inline nodes in left-to-right layout.
    pub node_gap: usize,
    /// Columns before the connector of an extra outgoing edge in left-to-right layout.
    pub continuation_indent: usize,
}

impl Default for FlowchartConfig {
    fn default() -> Self {
        Self {
            edge_indent: 4,
            node_gap: 2,
            continuation_indent: 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceConfig {
    pub actor_width: usize,
    pub actor_spacing: usize,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            actor_width: 12,
            actor_spacing: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub column_gap: usize,
    pub min_column_width: usize,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            column_gap: 2,
            min_column_width: 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub flowchart: FlowchartConfig,
    pub sequence: SequenceConfig,
    pub bar_chart: BarChartConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    flowchart: Option<FlowchartOverrides>,
    sequence: Option<SequenceOverrides>,
    bar_chart: Option<BarChartOverrides>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlowchartOverrides {
    edge_indent: Option<usize>,
    node_gap: Option<usize>,
    continuation_indent: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SequenceOverrides {
    actor_width: Option<usize>,
    actor_spacing: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BarChartOverrides {
    column_gap: Option<usize>,
    min_column_width: Option<usize>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let parsed: ConfigFile = match serde_json::from_str(&contents) {
        Ok(parsed) => parsed,
        Err(_) => json5::from_str(&contents)
            .with_context(|| format!("invalid config {}", path.display()))?,
    };
    config.apply(parsed);
    Ok(config)
}

impl Config {
    /// Applies overrides shaped like a config file, e.g. from an `%%{init: ...}%%` directive.
    pub fn apply_overrides(&mut self, value: serde_json::Value) -> anyhow::Result<()> {
        let parsed: ConfigFile =
            serde_json::from_value(value).context("invalid configuration overrides")?;
        self.apply(parsed);
        Ok(())
    }

    fn apply(&mut self, parsed: ConfigFile) {
        if let Some(name) = parsed.theme.as_deref() {
            match Theme::by_name(name) {
                Some(theme) => self.theme = theme,
                None => tracing::debug!(theme = name, "ignoring unknown theme"),
            }
        }

        if let Some(flow) = parsed.flowchart {
            if let Some(v) = flow.edge_indent {
                self.layout.flowchart.edge_indent = v;
            }
            if let Some(v) = flow.node_gap {
                self.layout.flowchart.node_gap = v;
            }
            if let Some(v) = flow.continuation_indent {
                self.layout.flowchart.continuation_indent = v;
            }
        }

        if let Some(seq) = parsed.sequence {
            if let Some(v) = seq.actor_width {
                // The lifeline needs a cell and the box needs both corners.
                self.layout.sequence.actor_width = v.max(2);
            }
            if let Some(v) = seq.actor_spacing {
                self.layout.sequence.actor_spacing = v;
            }
        }

        if let Some(bars) = parsed.bar_chart {
            if let Some(v) = bars.column_gap {
                self.layout.bar_chart.column_gap = v;
            }
            if let Some(v) = bars.min_column_width {
                self.layout.bar_chart.min_column_width = v.max(1);
            }
        }
    }
}
