#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod ir;
pub mod layout;
pub mod model_dump;
pub mod parser;
pub mod render;
pub mod text_metrics;
pub mod theme;

pub use config::{Config, LayoutConfig, load_config};
pub use error::ParseError;
pub use extract::{BlockKind, DiagramBlock, extract_diagram_blocks};
pub use ir::{
    BarChart, BarOrientation, Diagram, DiagramKind, Direction, Flowchart, MessageKind, NodeShape,
    SequenceDiagram,
};
pub use layout::{TextLayout, compute_layout};
pub use parser::{ParseOutput, parse_flowchart, parse_mermaid, parse_sequence};
pub use render::{Render, render_text};
pub use theme::Theme;
