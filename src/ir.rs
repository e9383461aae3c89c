use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Direction {
    #[default]
    TopToBottom,
    LeftToRight,
}

impl Direction {
    /// Maps a header token to a direction. Unknown tokens fall back to top-to-bottom.
    pub fn from_token(token: &str) -> Self {
        match token {
            "LR" | "RL" => Self::LeftToRight,
            _ => Self::TopToBottom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum NodeShape {
    #[default]
    Box,
    Rounded,
    Diamond,
    Circle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub shape: NodeShape,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    /// Empty when the edge carries no label.
    pub label: String,
}

impl Edge {
    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Flowchart {
    pub direction: Direction,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Flowchart {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Appends a node. Duplicate ids are kept as separate entries.
    pub fn add_node(&mut self, id: &str, label: &str, shape: NodeShape) -> &mut Self {
        self.nodes.push(Node {
            id: id.to_string(),
            label: label.to_string(),
            shape,
        });
        self
    }

    pub fn add_edge(&mut self, from: &str, to: &str, label: &str) -> &mut Self {
        self.edges.push(Edge {
            from: from.to_string(),
            to: to.to_string(),
            label: label.to_string(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MessageKind {
    #[default]
    Sync,
    Async,
    Return,
}

impl MessageKind {
    pub fn is_dashed(self) -> bool {
        matches!(self, Self::Async | Self::Return)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub from: String,
    pub to: String,
    pub label: String,
    pub kind: MessageKind,
    pub is_self: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SequenceDiagram {
    pub actors: Vec<Actor>,
    pub messages: Vec<Message>,
}

impl SequenceDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_actor(&mut self, id: &str, name: &str) -> &mut Self {
        self.actors.push(Actor {
            id: id.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn add_message(
        &mut self,
        from: &str,
        to: &str,
        label: &str,
        kind: MessageKind,
    ) -> &mut Self {
        self.messages.push(Message {
            from: from.to_string(),
            to: to.to_string(),
            label: label.to_string(),
            kind,
            is_self: from == to,
        });
        self
    }

    pub fn actor_index(&self, id: &str) -> Option<usize> {
        self.actors.iter().position(|actor| actor.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BarOrientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Opaque escape sequence wrapped around the bar glyphs.
    pub color: Option<String>,
}

pub const DEFAULT_BAR_WIDTH: usize = 50;
pub const DEFAULT_BAR_HEIGHT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: Option<String>,
    pub orientation: BarOrientation,
    pub bars: Vec<Bar>,
    /// Bar length budget for horizontal charts, column width for vertical ones.
    pub width: usize,
    /// Row count for vertical charts.
    pub height: usize,
    pub show_values: bool,
}

impl BarChart {
    pub fn new(title: Option<&str>, orientation: BarOrientation) -> Self {
        Self {
            title: title.filter(|t| !t.is_empty()).map(str::to_string),
            orientation,
            bars: Vec::new(),
            width: DEFAULT_BAR_WIDTH,
            height: DEFAULT_BAR_HEIGHT,
            show_values: true,
        }
    }

    pub fn add_bar(&mut self, label: &str, value: f64) -> &mut Self {
        self.bars.push(Bar {
            label: label.to_string(),
            value,
            color: None,
        });
        self
    }

    pub fn add_bar_with_color(&mut self, label: &str, value: f64, color: &str) -> &mut Self {
        self.bars.push(Bar {
            label: label.to_string(),
            value,
            color: Some(color.to_string()).filter(|c| !c.is_empty()),
        });
        self
    }

    pub fn set_width(&mut self, width: usize) -> &mut Self {
        self.width = width;
        self
    }

    pub fn set_height(&mut self, height: usize) -> &mut Self {
        self.height = height;
        self
    }

    pub fn set_show_values(&mut self, show: bool) -> &mut Self {
        self.show_values = show;
        self
    }

    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|bar| bar.value).fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagramKind {
    Flowchart,
    Sequence,
    BarChart,
}

impl DiagramKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Sequence => "sequenceDiagram",
            Self::BarChart => "barChart",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "model", rename_all = "camelCase")]
pub enum Diagram {
    Flowchart(Flowchart),
    Sequence(SequenceDiagram),
    BarChart(BarChart),
}

impl Diagram {
    pub fn kind(&self) -> DiagramKind {
        match self {
            Self::Flowchart(_) => DiagramKind::Flowchart,
            Self::Sequence(_) => DiagramKind::Sequence,
            Self::BarChart(_) => DiagramKind::BarChart,
        }
    }
}

impl From<Flowchart> for Diagram {
    fn from(flowchart: Flowchart) -> Self {
        Self::Flowchart(flowchart)
    }
}

impl From<SequenceDiagram> for Diagram {
    fn from(sequence: SequenceDiagram) -> Self {
        Self::Sequence(sequence)
    }
}

impl From<BarChart> for Diagram {
    fn from(chart: BarChart) -> Self {
        Self::BarChart(chart)
    }
}
