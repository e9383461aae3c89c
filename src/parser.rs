use crate::error::{ParseError, Result};
use crate::ir::{
    Diagram, DiagramKind, Direction, Flowchart, MessageKind, NodeShape, SequenceDiagram,
};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashSet;

static INIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^%%\{\s*init\s*:\s*(\{.*\})\s*\}%%").unwrap());
// `((` must be tried before `(` so circles are not read as rounded nodes.
static NODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z0-9_]+)(?:\(\(([^()]+)\)\)|\[([^\]]+)\]|\(([^()]+)\)|\{([^}]+)\})")
        .unwrap()
});
static EDGE_RE: Lazy<Regex> = Lazy::new(|| {
    let shape = r"(?:\(\([^()]*\)\)|\[[^\]]*\]|\([^()]*\)|\{[^}]*\})?";
    Regex::new(&format!(
        r"([A-Za-z0-9_]+){shape}\s*-+>\s*(?:\|([^|]*)\|)?\s*([A-Za-z0-9_]+){shape}"
    ))
    .unwrap()
});
static PARTICIPANT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:participant|actor)\s+(\S+)(?:\s+as(?:\s+(.*))?)?$").unwrap());
static MESSAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+)\s*(-->>|->>|-->|->|--\)|-\))\s*([A-Za-z0-9_]+)\s*:(.*)$").unwrap()
});

#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub diagram: Diagram,
    /// JSON body of an `%%{init: ...}%%` directive, when present and well formed.
    pub init_config: Option<serde_json::Value>,
}

/// Comment-free, trimmed, non-blank statements of a diagram source.
struct Source {
    lines: Vec<String>,
    init_config: Option<serde_json::Value>,
}

fn preprocess_input(input: &str) -> Result<Source> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut init_config: Option<serde_json::Value> = None;
    let mut lines = Vec::new();

    for raw_line in input.lines() {
        let trimmed_line = raw_line.trim();
        if trimmed_line.is_empty() {
            continue;
        }
        if let Some(caps) = INIT_RE.captures(trimmed_line) {
            if let Some(json_str) = caps.get(1).map(|m| m.as_str()) {
                if let Ok(value) = serde_json::from_str::<serde_json::Value>(json_str) {
                    init_config = Some(value);
                } else if let Ok(value) = json5::from_str::<serde_json::Value>(json_str) {
                    init_config = Some(value);
                } else {
                    tracing::debug!(directive = json_str, "ignoring malformed init directive");
                }
            }
            continue;
        }
        if trimmed_line.starts_with("%%") {
            continue;
        }
        let without_comment = strip_trailing_comment(trimmed_line);
        if without_comment.is_empty() {
            continue;
        }
        lines.push(without_comment);
    }

    Ok(Source { lines, init_config })
}

fn strip_trailing_comment(line: &str) -> String {
    let mut quote: Option<char> = None;
    let mut chars = line.chars().peekable();
    let mut out = String::new();
    while let Some(ch) = chars.next() {
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            out.push(ch);
            continue;
        }
        if ch == '"' {
            quote = Some(ch);
            out.push(ch);
            continue;
        }
        if ch == '%'
            && let Some('%') = chars.peek().copied()
        {
            break;
        }
        out.push(ch);
    }
    out.trim().to_string()
}

/// Classifies a source by its first statement.
pub fn detect_diagram_kind(input: &str) -> Option<DiagramKind> {
    let header = input
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with("%%"))?;
    header_kind(header)
}

fn header_kind(header: &str) -> Option<DiagramKind> {
    let lower = header.to_ascii_lowercase();
    let keyword = lower.split_whitespace().next().unwrap_or("");
    if keyword == "graph" || keyword == "flowchart" {
        return Some(DiagramKind::Flowchart);
    }
    if lower.starts_with("sequencediagram") {
        return Some(DiagramKind::Sequence);
    }
    None
}

/// Parses a flowchart or sequence diagram, picking the grammar from the header line.
pub fn parse_mermaid(input: &str) -> Result<ParseOutput> {
    let source = preprocess_input(input)?;
    let header = source.lines.first().map(String::as_str).unwrap_or("");
    let diagram = match header_kind(header) {
        Some(DiagramKind::Flowchart) => Diagram::Flowchart(flowchart_from_lines(&source.lines)),
        Some(DiagramKind::Sequence) => Diagram::Sequence(sequence_from_lines(&source.lines)),
        _ => {
            return Err(ParseError::UnsupportedDiagram {
                header: header.to_string(),
            });
        }
    };
    Ok(ParseOutput {
        diagram,
        init_config: source.init_config,
    })
}

pub fn parse_flowchart(input: &str) -> Result<Flowchart> {
    let source = preprocess_input(input)?;
    Ok(flowchart_from_lines(&source.lines))
}

pub fn parse_sequence(input: &str) -> Result<SequenceDiagram> {
    let source = preprocess_input(input)?;
    Ok(sequence_from_lines(&source.lines))
}

fn flowchart_from_lines(lines: &[String]) -> Flowchart {
    let Some((header, body)) = lines.split_first() else {
        return Flowchart::new(Direction::TopToBottom);
    };
    let direction = header
        .split_whitespace()
        .nth(1)
        .map(|token| Direction::from_token(token.trim_end_matches(';')))
        .unwrap_or_default();

    let mut flow = Flowchart::new(direction);
    let mut declared: HashSet<String> = HashSet::new();

    for line in body {
        for caps in NODE_RE.captures_iter(line) {
            let id = &caps[1];
            if declared.contains(id) {
                continue;
            }
            let Some((shape, label)) = node_shape_and_label(&caps) else {
                continue;
            };
            flow.add_node(id, &clean_label(label), shape);
            declared.insert(id.to_string());
        }

        // Restarting at each destination lets `A --> B --> C` yield both hops.
        let mut start = 0;
        while let Some(caps) = EDGE_RE.captures_at(line, start) {
            let (Some(from), Some(to)) = (caps.get(1), caps.get(3)) else {
                break;
            };
            let label = caps.get(2).map(|m| clean_label(m.as_str())).unwrap_or_default();
            flow.add_edge(from.as_str(), to.as_str(), &label);
            start = to.start();
        }
    }

    flow
}

fn node_shape_and_label<'h>(caps: &Captures<'h>) -> Option<(NodeShape, &'h str)> {
    [
        (2, NodeShape::Circle),
        (3, NodeShape::Box),
        (4, NodeShape::Rounded),
        (5, NodeShape::Diamond),
    ]
    .into_iter()
    .find_map(|(group, shape)| caps.get(group).map(|m| (shape, m.as_str())))
}

fn clean_label(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed)
        .to_string()
}

fn sequence_from_lines(lines: &[String]) -> SequenceDiagram {
    let mut seq = SequenceDiagram::new();
    let mut registered: HashSet<String> = HashSet::new();

    for (idx, line) in lines.iter().enumerate() {
        if idx == 0 && header_kind(line) == Some(DiagramKind::Sequence) {
            continue;
        }

        if let Some(caps) = PARTICIPANT_RE.captures(line) {
            let id = &caps[1];
            let name = caps
                .get(2)
                .map(|m| m.as_str().trim())
                .filter(|name| !name.is_empty())
                .unwrap_or(id);
            if registered.insert(id.to_string()) {
                seq.add_actor(id, name);
            }
            continue;
        }

        let Some(caps) = MESSAGE_RE.captures(line) else {
            tracing::trace!(line = line.as_str(), "unrecognized sequence statement");
            continue;
        };
        let (from, arrow, to) = (&caps[1], &caps[2], &caps[3]);
        for id in [from, to] {
            if registered.insert(id.to_string()) {
                seq.add_actor(id, id);
            }
        }
        let kind = match arrow {
            "-->>" | "-->" => MessageKind::Return,
            "-)" | "--)" => MessageKind::Async,
            _ => MessageKind::Sync,
        };
        seq.add_message(from, to, caps[4].trim(), kind);
    }

    seq
}
