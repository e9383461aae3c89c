use std::path::Path;

use pretty_assertions::assert_eq;
use tui_diagrams::{
    BlockKind, Config, Diagram, LayoutConfig, Render, Theme, extract_diagram_blocks,
    parse_mermaid,
};

fn read_fixture(rel: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(rel);
    std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("fixture {rel}: {err}"))
}

fn render_fixture(rel: &str, theme: &Theme) -> String {
    let parsed = parse_mermaid(&read_fixture(rel)).expect("parse failed");
    let mut config = Config::default();
    if let Some(init) = parsed.init_config {
        config.apply_overrides(init).expect("init directive");
    }
    parsed.diagram.render_with(theme, &config.layout)
}

#[test]
fn render_all_fixtures() {
    // Keep this list explicit so new fixtures must be added intentionally.
    let candidates = [
        "flowchart/basic.mmd",
        "flowchart/branches.mmd",
        "flowchart/cycles.mmd",
        "flowchart/lr.mmd",
        "sequence/basic.mmd",
        "sequence/participants.mmd",
    ];

    for rel in candidates {
        for theme in [Theme::unicode(), Theme::ascii()] {
            let text = render_fixture(rel, &theme);
            assert!(!text.is_empty(), "{rel}: empty output");
            assert!(!text.ends_with('\n'), "{rel}: trailing newline");
            if theme == Theme::ascii() {
                assert!(text.is_ascii(), "{rel}: non-ascii glyph in\n{text}");
            }
        }
    }
}

#[test]
fn flowchart_basic_output() {
    assert_eq!(
        render_fixture("flowchart/basic.mmd", &Theme::unicode()),
        "┌───────┐\n│ Start │\n└───────┘\n    ↓\n\n┌─────┐\n│ End │\n└─────┘"
    );
}

#[test]
fn flowchart_basic_ascii_output() {
    assert_eq!(
        render_fixture("flowchart/basic.mmd", &Theme::ascii()),
        "+-------+\n| Start |\n+-------+\n    v\n\n+-----+\n| End |\n+-----+"
    );
}

#[test]
fn flowchart_branches_output() {
    let expected = [
        "╭────────────╮",
        "│ User Login │",
        "╰────────────╯",
        "    ↓",
        "",
        "┌───────────────────┐",
        "│ Enter Credentials │",
        "└───────────────────┘",
        "    ↓",
        "",
        "     ◆",
        "< Valid? >",
        "     ◆",
        "    │ yes",
        "    ↓",
        "    │ no",
        "    ↓",
        "",
        "( Welcome )",
        "",
        "┌────────────┐",
        "│ Show Error │",
        "└────────────┘",
        "    │ retry",
        "    ↓",
    ];
    assert_eq!(
        render_fixture("flowchart/branches.mmd", &Theme::unicode()),
        expected.join("\n")
    );
}

#[test]
fn flowchart_cycle_starts_at_first_node() {
    let text = render_fixture("flowchart/cycles.mmd", &Theme::unicode());
    let ping = text.find("Ping").expect("Ping rendered");
    let pong = text.find("Pong").expect("Pong rendered");
    assert!(ping < pong);
    assert_eq!(text.matches('↓').count(), 2);
}

#[test]
fn flowchart_left_to_right_output() {
    assert_eq!(
        render_fixture("flowchart/lr.mmd", &Theme::unicode()),
        "(Commit) ──→  [Build] ──→  [Test] ──→\n       │ ─[fail]→  [Deploy]"
    );
}

#[test]
fn sequence_basic_output() {
    let lifelines = "      │                 │     ";
    let expected = [
        "   Alice              Bob     ",
        "┌──────────┐      ┌──────────┐",
        lifelines,
        "      ── Hello ──→",
        lifelines,
        "      ←---- Hi ----",
        lifelines,
        "└──────────┘      └──────────┘",
    ];
    assert_eq!(
        render_fixture("sequence/basic.mmd", &Theme::unicode()),
        expected.join("\n")
    );
}

#[test]
fn sequence_init_directive_widens_actors() {
    let text = render_fixture("sequence/participants.mmd", &Theme::unicode());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[1],
        "┌────────────┐      ┌────────────┐      ┌────────────┐"
    );
    assert!(lines[0].contains("Client"));
    assert!(lines[0].contains("Database"));
    assert!(text.contains("[cache]"));
    assert!(text.contains(" query "));
    assert!(text.contains("200 OK"));
}

#[test]
fn markdown_document_blocks() {
    let blocks = extract_diagram_blocks(&read_fixture("markdown/doc.md"));
    let kinds: Vec<BlockKind> = blocks.iter().map(|block| block.kind).collect();
    assert_eq!(
        kinds,
        vec![BlockKind::Sequence, BlockKind::Flowchart, BlockKind::Unknown]
    );
    assert!(matches!(blocks[0].diagram, Some(Diagram::Sequence(_))));
    assert!(matches!(blocks[1].diagram, Some(Diagram::Flowchart(_))));
    assert!(blocks[2].diagram.is_none());

    let flow = blocks[1].diagram.as_ref().expect("flowchart parsed");
    assert_eq!(
        flow.render_with(&Theme::unicode(), &LayoutConfig::default()),
        "[Fetch] ──→  [Compile]"
    );
}
