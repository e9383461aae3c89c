use super::shapes::{inline_node, node_art};
use super::*;
use crate::config::FlowchartConfig;
use crate::ir::{Direction, Edge, Flowchart, Node};
use std::collections::{HashMap, HashSet, VecDeque};

/// Index over a flowchart used by both layouts.
struct FlowGraph<'a> {
    nodes: HashMap<&'a str, &'a Node>,
    outgoing: HashMap<&'a str, Vec<&'a Edge>>,
    roots: Vec<&'a str>,
}

impl<'a> FlowGraph<'a> {
    fn build(flow: &'a Flowchart) -> Self {
        let mut nodes: HashMap<&str, &Node> = HashMap::new();
        for node in &flow.nodes {
            nodes.insert(node.id.as_str(), node);
        }

        let mut outgoing: HashMap<&str, Vec<&Edge>> = HashMap::new();
        let mut incoming: HashMap<&str, usize> = HashMap::new();
        for edge in &flow.edges {
            outgoing.entry(edge.from.as_str()).or_default().push(edge);
            *incoming.entry(edge.to.as_str()).or_default() += 1;
        }

        let mut roots: Vec<&str> = flow
            .nodes
            .iter()
            .map(|node| node.id.as_str())
            .filter(|id| !incoming.contains_key(id))
            .collect();
        // Every node has a parent, so the graph is cyclic.
        if roots.is_empty()
            && let Some(first) = flow.nodes.first()
        {
            roots.push(first.id.as_str());
        }

        Self {
            nodes,
            outgoing,
            roots,
        }
    }

    fn outgoing(&self, id: &str) -> &[&'a Edge] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Breadth-first visit order from the roots. Ids without a node are skipped.
    fn traversal_order(&self) -> Vec<&'a Node> {
        let mut order = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = self.roots.iter().copied().collect();

        while let Some(id) = queue.pop_front() {
            if !visited.insert(id) {
                continue;
            }
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            order.push(*node);
            for edge in self.outgoing(id) {
                let target = edge.to.as_str();
                if !visited.contains(target) && self.nodes.contains_key(target) {
                    queue.push_back(target);
                }
            }
        }
        order
    }
}

pub fn compute_flowchart_layout(
    flow: &Flowchart,
    theme: &Theme,
    config: &LayoutConfig,
) -> TextLayout {
    if flow.nodes.is_empty() {
        return TextLayout::default();
    }
    let graph = FlowGraph::build(flow);
    match flow.direction {
        Direction::TopToBottom => vertical_layout(&graph, theme, &config.flowchart),
        Direction::LeftToRight => horizontal_layout(&graph, theme, &config.flowchart),
    }
}

fn vertical_layout(graph: &FlowGraph<'_>, theme: &Theme, config: &FlowchartConfig) -> TextLayout {
    let indent = " ".repeat(config.edge_indent);
    let mut layout = TextLayout::default();

    for (idx, node) in graph.traversal_order().into_iter().enumerate() {
        if idx > 0 {
            layout.push("");
        }
        layout.extend(node_art(node, theme));

        // Every outgoing edge is drawn, not only the one that advanced the traversal.
        for edge in graph.outgoing(&node.id) {
            if edge.has_label() {
                layout.push(format!("{indent}{} {}", theme.vertical, edge.label));
            }
            layout.push(format!("{indent}{}", theme.arrow_down));
        }
    }

    layout
}

fn horizontal_layout(graph: &FlowGraph<'_>, theme: &Theme, config: &FlowchartConfig) -> TextLayout {
    let gap = " ".repeat(config.node_gap);
    let continuation = " ".repeat(config.continuation_indent);
    let mut out = String::new();

    for (idx, node) in graph.traversal_order().into_iter().enumerate() {
        if idx > 0 {
            out.push_str(&gap);
        }
        out.push_str(&inline_node(node));

        let edges = graph.outgoing(&node.id);
        let Some((first, rest)) = edges.split_first() else {
            continue;
        };
        out.push(' ');
        out.push_str(&inline_edge(first, theme));
        for edge in rest {
            out.push('\n');
            out.push_str(&continuation);
            out.push_str(&theme.vertical);
            out.push(' ');
            out.push_str(&inline_edge(edge, theme));
        }
    }

    TextLayout {
        lines: out.lines().map(str::to_string).collect(),
    }
}

fn inline_edge(edge: &Edge, theme: &Theme) -> String {
    if edge.has_label() {
        format!("{}[{}]{}", theme.horizontal, edge.label, theme.arrow_right)
    } else {
        format!("{h}{h}{}", theme.arrow_right, h = theme.horizontal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::NodeShape;

    fn render(flow: &Flowchart) -> Vec<String> {
        compute_flowchart_layout(flow, &Theme::unicode(), &LayoutConfig::default()).lines
    }

    fn ids(order: &[&Node]) -> Vec<String> {
        order.iter().map(|node| node.id.clone()).collect()
    }

    #[test]
    fn empty_flowchart_has_no_lines() {
        let flow = Flowchart::new(Direction::TopToBottom);
        assert!(render(&flow).is_empty());
        let flow = Flowchart::new(Direction::LeftToRight);
        assert!(render(&flow).is_empty());
    }

    #[test]
    fn traversal_is_breadth_first_from_ordered_roots() {
        let mut flow = Flowchart::new(Direction::TopToBottom);
        flow.add_node("A", "A", NodeShape::Box)
            .add_node("B", "B", NodeShape::Box)
            .add_node("C", "C", NodeShape::Box)
            .add_node("D", "D", NodeShape::Box)
            .add_node("R", "R", NodeShape::Box)
            .add_edge("A", "C", "")
            .add_edge("A", "B", "")
            .add_edge("B", "D", "")
            .add_edge("C", "D", "")
            .add_edge("R", "D", "");
        let graph = FlowGraph::build(&flow);
        assert_eq!(graph.roots, vec!["A", "R"]);
        assert_eq!(ids(&graph.traversal_order()), vec!["A", "R", "C", "B", "D"]);
    }

    #[test]
    fn cyclic_graph_starts_at_first_node() {
        let mut flow = Flowchart::new(Direction::TopToBottom);
        flow.add_node("X", "X", NodeShape::Box)
            .add_node("Y", "Y", NodeShape::Box)
            .add_edge("Y", "X", "")
            .add_edge("X", "Y", "");
        let graph = FlowGraph::build(&flow);
        assert_eq!(graph.roots, vec!["X"]);
        assert_eq!(ids(&graph.traversal_order()), vec!["X", "Y"]);
    }

    #[test]
    fn disconnected_cycle_is_not_rendered() {
        let mut flow = Flowchart::new(Direction::TopToBottom);
        flow.add_node("A", "Root", NodeShape::Box)
            .add_node("B", "Loop1", NodeShape::Box)
            .add_node("C", "Loop2", NodeShape::Box)
            .add_edge("B", "C", "")
            .add_edge("C", "B", "");
        let text = render(&flow).join("\n");
        assert!(text.contains("Root"));
        assert!(!text.contains("Loop1"));
        assert!(!text.contains("Loop2"));
    }

    #[test]
    fn unresolved_target_keeps_arrow_but_skips_node() {
        let mut flow = Flowchart::new(Direction::TopToBottom);
        flow.add_node("A", "Only", NodeShape::Box)
            .add_edge("A", "ghost", "");
        assert_eq!(
            render(&flow),
            vec!["┌──────┐", "│ Only │", "└──────┘", "    ↓"]
        );
    }

    #[test]
    fn vertical_draws_every_outgoing_edge() {
        let mut flow = Flowchart::new(Direction::TopToBottom);
        flow.add_node("Q", "Ok?", NodeShape::Diamond)
            .add_node("Y", "Go", NodeShape::Circle)
            .add_node("N", "Stop", NodeShape::Circle)
            .add_edge("Q", "Y", "Yes")
            .add_edge("Q", "N", "No");
        assert_eq!(
            render(&flow),
            vec![
                "   ◆",
                "< Ok? >",
                "   ◆",
                "    │ Yes",
                "    ↓",
                "    │ No",
                "    ↓",
                "",
                "( Go )",
                "",
                "( Stop )",
            ]
        );
    }

    #[test]
    fn duplicate_id_renders_last_declaration() {
        let mut flow = Flowchart::new(Direction::TopToBottom);
        flow.add_node("A", "One", NodeShape::Box)
            .add_node("A", "Two", NodeShape::Rounded);
        assert_eq!(render(&flow), vec!["╭─────╮", "│ Two │", "╰─────╯"]);
    }

    #[test]
    fn each_reachable_node_renders_once() {
        let mut flow = Flowchart::new(Direction::TopToBottom);
        flow.add_node("A", "alpha", NodeShape::Box)
            .add_node("B", "beta", NodeShape::Box)
            .add_node("C", "gamma", NodeShape::Box)
            .add_edge("A", "B", "")
            .add_edge("A", "C", "")
            .add_edge("B", "C", "");
        let text = render(&flow).join("\n");
        for label in ["alpha", "beta", "gamma"] {
            assert_eq!(text.matches(label).count(), 1, "{label}");
        }
        assert!(text.find("beta").unwrap() < text.find("gamma").unwrap());
    }

    #[test]
    fn horizontal_inline_chain() {
        let mut flow = Flowchart::new(Direction::LeftToRight);
        flow.add_node("A", "Start", NodeShape::Box)
            .add_node("B", "Work", NodeShape::Rounded)
            .add_node("C", "End", NodeShape::Circle)
            .add_edge("A", "B", "")
            .add_edge("B", "C", "done");
        assert_eq!(render(&flow), vec!["[Start] ──→  (Work) ─[done]→  ((End))"]);
    }

    #[test]
    fn horizontal_branches_use_continuation_lines() {
        let mut flow = Flowchart::new(Direction::LeftToRight);
        flow.add_node("Q", "Ok?", NodeShape::Diamond)
            .add_node("Y", "Yes", NodeShape::Box)
            .add_node("N", "No", NodeShape::Box)
            .add_edge("Q", "Y", "y")
            .add_edge("Q", "N", "n");
        assert_eq!(
            render(&flow),
            vec!["<Ok?> ─[y]→", "       │ ─[n]→  [Yes]  [No]"]
        );
    }
}
