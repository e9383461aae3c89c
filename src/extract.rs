use crate::ir::{Diagram, DiagramKind};
use crate::parser::{detect_diagram_kind, parse_flowchart, parse_sequence};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    Flowchart,
    Sequence,
    Unknown,
}

impl BlockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Flowchart => "flowchart",
            BlockKind::Sequence => "sequenceDiagram",
            BlockKind::Unknown => "unknown",
        }
    }
}

/// One fenced diagram region found in a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramBlock {
    pub kind: BlockKind,
    pub source: String,
    /// `None` when the kind is unknown or the block failed to parse.
    pub diagram: Option<Diagram>,
}

/// Opening fence: marker character and how many of them opened the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fence {
    marker: char,
    len: usize,
}

/// Scans `document` for ```` ```mermaid ````, `~~~mermaid` and `:::mermaid`
/// fences in order of appearance. A fence left open at the end is dropped.
pub fn extract_diagram_blocks(document: &str) -> Vec<DiagramBlock> {
    let mut blocks = Vec::new();
    let mut fence: Option<Fence> = None;
    let mut current: Vec<&str> = Vec::new();

    for line in document.lines() {
        let trimmed = line.trim();
        match fence {
            None => fence = detect_diagram_fence(trimmed),
            Some(open) if is_fence_end(trimmed, open) => {
                blocks.push(classify_block(current.join("\n"), blocks.len()));
                current.clear();
                fence = None;
            }
            Some(_) => current.push(line),
        }
    }

    if fence.is_some() {
        tracing::debug!(lines = current.len(), "dropping unterminated diagram fence");
    }
    blocks
}

fn marker_run(line: &str, marker: char) -> usize {
    line.chars().take_while(|&ch| ch == marker).count()
}

fn detect_diagram_fence(line: &str) -> Option<Fence> {
    ['`', '~', ':'].into_iter().find_map(|marker| {
        let len = marker_run(line, marker);
        let rest = &line[len * marker.len_utf8()..];
        (len >= 3 && rest.trim().starts_with("mermaid")).then_some(Fence { marker, len })
    })
}

/// A closing line holds only the opening marker, at least as many times.
fn is_fence_end(line: &str, fence: Fence) -> bool {
    let len = marker_run(line, fence.marker);
    len >= fence.len && line[len * fence.marker.len_utf8()..].trim().is_empty()
}

fn classify_block(source: String, index: usize) -> DiagramBlock {
    let kind = match detect_diagram_kind(&source) {
        Some(DiagramKind::Flowchart) => BlockKind::Flowchart,
        Some(DiagramKind::Sequence) => BlockKind::Sequence,
        _ => BlockKind::Unknown,
    };
    tracing::debug!(index, kind = kind.as_str(), "found diagram block");

    let parsed = match kind {
        BlockKind::Flowchart => parse_flowchart(&source).map(Diagram::from),
        BlockKind::Sequence => parse_sequence(&source).map(Diagram::from),
        BlockKind::Unknown => {
            return DiagramBlock {
                kind,
                source,
                diagram: None,
            };
        }
    };
    let diagram = match parsed {
        Ok(diagram) => Some(diagram),
        Err(err) => {
            tracing::warn!(index, error = %err, "diagram block failed to parse");
            None
        }
    };
    DiagramBlock {
        kind,
        source,
        diagram,
    }
}
