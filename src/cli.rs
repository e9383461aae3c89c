use crate::config::{Config, load_config};
use crate::extract::{DiagramBlock, extract_diagram_blocks};
use crate::model_dump::{DiagramDump, ModelDump, write_model_dump};
use crate::parser::parse_mermaid;
use crate::render::Render;
use crate::theme::Theme;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "tuidiag",
    version,
    about = "Render flowcharts and sequence diagrams as terminal text"
)]
pub struct Args {
    /// Input file (.mmd, .md) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Config JSON file with layout and theme overrides
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Draw with plain ASCII glyphs
    #[arg(long)]
    pub ascii: bool,

    /// Write the parsed diagram model(s) as JSON to this path
    #[arg(long = "dump")]
    pub dump: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

pub fn run(args: Args) -> Result<()> {
    let mut base_config = load_config(args.config.as_deref())?;
    if args.ascii {
        base_config.theme = Theme::ascii();
    }

    let (input, is_markdown) = read_input(args.input.as_deref())?;
    let mut stdout = io::stdout().lock();

    if is_markdown {
        let blocks = extract_diagram_blocks(&input);
        writeln!(stdout, "{}", render_blocks(&blocks, &base_config))?;
        if let Some(path) = args.dump.as_deref() {
            let dump = ModelDump {
                diagrams: blocks
                    .iter()
                    .enumerate()
                    .map(|(idx, block)| DiagramDump::from_block(idx, block, &base_config))
                    .collect(),
            };
            write_model_dump(path, &dump)?;
        }
        return Ok(());
    }

    let parsed = parse_mermaid(&input)?;
    let config = effective_config(&base_config, parsed.init_config, args.ascii);
    writeln!(
        stdout,
        "{}",
        parsed.diagram.render_with(&config.theme, &config.layout)
    )?;
    if let Some(path) = args.dump.as_deref() {
        let dump = ModelDump {
            diagrams: vec![DiagramDump::from_diagram(0, &parsed.diagram, &config)],
        };
        write_model_dump(path, &dump)?;
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<(String, bool)> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let is_md = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "md" | "markdown"))
            .unwrap_or(false);
        return Ok((content, is_md));
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok((buf, false))
}

/// Layers an init directive over the base config. `--ascii` still wins.
fn effective_config(base: &Config, init: Option<serde_json::Value>, force_ascii: bool) -> Config {
    let mut config = base.clone();
    if let Some(init) = init
        && let Err(err) = config.apply_overrides(init)
    {
        tracing::warn!(error = %err, "ignoring init directive");
    }
    if force_ascii {
        config.theme = Theme::ascii();
    }
    config
}

fn render_blocks(blocks: &[DiagramBlock], config: &Config) -> String {
    if blocks.is_empty() {
        return "No mermaid diagrams found in input".to_string();
    }
    blocks
        .iter()
        .enumerate()
        .map(|(idx, block)| {
            let body = match &block.diagram {
                Some(diagram) => diagram.render_with(&config.theme, &config.layout),
                None => block.source.clone(),
            };
            format!("=== Diagram {} ({}) ===\n{body}", idx + 1, block.kind.as_str())
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
