use super::*;
use crate::ir::{Node, NodeShape};

pub(super) fn node_art(node: &Node, theme: &Theme) -> Vec<String> {
    match node.shape {
        NodeShape::Box => box_art(&node.label, theme),
        NodeShape::Rounded => rounded_art(&node.label, theme),
        NodeShape::Diamond => diamond_art(&node.label, theme),
        NodeShape::Circle => circle_art(&node.label),
    }
}

pub(super) fn inline_node(node: &Node) -> String {
    let label = &node.label;
    match node.shape {
        NodeShape::Box => format!("[{label}]"),
        NodeShape::Rounded => format!("({label})"),
        NodeShape::Diamond => format!("<{label}>"),
        NodeShape::Circle => format!("(({label}))"),
    }
}

struct Corners<'a> {
    top_left: &'a str,
    top_right: &'a str,
    bottom_left: &'a str,
    bottom_right: &'a str,
}

pub(super) fn box_art(label: &str, theme: &Theme) -> Vec<String> {
    framed(
        label,
        theme,
        Corners {
            top_left: &theme.top_left,
            top_right: &theme.top_right,
            bottom_left: &theme.bottom_left,
            bottom_right: &theme.bottom_right,
        },
    )
}

pub(super) fn rounded_art(label: &str, theme: &Theme) -> Vec<String> {
    framed(
        label,
        theme,
        Corners {
            top_left: &theme.rounded_top_left,
            top_right: &theme.rounded_top_right,
            bottom_left: &theme.rounded_bottom_left,
            bottom_right: &theme.rounded_bottom_right,
        },
    )
}

fn framed(label: &str, theme: &Theme, corners: Corners<'_>) -> Vec<String> {
    let inner = theme.horizontal.repeat(measure_text_width(label) + 2);
    vec![
        format!("{}{inner}{}", corners.top_left, corners.top_right),
        format!("{v} {label} {v}", v = theme.vertical),
        format!("{}{inner}{}", corners.bottom_left, corners.bottom_right),
    ]
}

pub(super) fn diamond_art(label: &str, theme: &Theme) -> Vec<String> {
    let width = measure_text_width(label) + 4;
    let apex = format!("{}{}", " ".repeat(width / 2), theme.diamond_apex);
    vec![apex.clone(), format!("< {label} >"), apex]
}

pub(super) fn circle_art(label: &str) -> Vec<String> {
    vec![format!("( {label} )")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_is_label_width_plus_four() {
        let art = box_art("Start", &Theme::unicode());
        assert_eq!(art, vec!["┌───────┐", "│ Start │", "└───────┘"]);
        for line in &art {
            assert_eq!(measure_text_width(line), 9);
        }
    }

    #[test]
    fn rounded_uses_curved_corners() {
        let art = rounded_art("Go", &Theme::unicode());
        assert_eq!(art, vec!["╭────╮", "│ Go │", "╰────╯"]);
    }

    #[test]
    fn diamond_apex_is_centered() {
        let art = diamond_art("Ok?", &Theme::unicode());
        assert_eq!(art, vec!["   ◆", "< Ok? >", "   ◆"]);
    }

    #[test]
    fn circle_is_single_line() {
        assert_eq!(circle_art("x"), vec!["( x )"]);
    }

    #[test]
    fn inline_brackets_per_shape() {
        let node = |shape| Node {
            id: "n".to_string(),
            label: "x".to_string(),
            shape,
        };
        assert_eq!(inline_node(&node(NodeShape::Box)), "[x]");
        assert_eq!(inline_node(&node(NodeShape::Rounded)), "(x)");
        assert_eq!(inline_node(&node(NodeShape::Diamond)), "<x>");
        assert_eq!(inline_node(&node(NodeShape::Circle)), "((x))");
    }

    #[test]
    fn ascii_box() {
        let art = box_art("A", &Theme::ascii());
        assert_eq!(art, vec!["+---+", "| A |", "+---+"]);
    }
}
