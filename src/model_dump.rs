use crate::config::Config;
use crate::extract::DiagramBlock;
use crate::ir::Diagram;
use crate::layout::compute_layout;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct ModelDump<'a> {
    pub diagrams: Vec<DiagramDump<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramDump<'a> {
    pub index: usize,
    pub kind: &'static str,
    /// Rendered size in terminal cells; zero for unparsed blocks.
    pub width: usize,
    pub height: usize,
    pub model: Option<&'a Diagram>,
}

impl<'a> DiagramDump<'a> {
    pub fn from_diagram(index: usize, diagram: &'a Diagram, config: &Config) -> Self {
        let layout = compute_layout(diagram, &config.theme, &config.layout);
        DiagramDump {
            index,
            kind: diagram.kind().as_str(),
            width: layout.width(),
            height: layout.height(),
            model: Some(diagram),
        }
    }

    pub fn from_block(index: usize, block: &'a DiagramBlock, config: &Config) -> Self {
        match &block.diagram {
            Some(diagram) => Self::from_diagram(index, diagram, config),
            None => DiagramDump {
                index,
                kind: block.kind.as_str(),
                width: 0,
                height: 0,
                model: None,
            },
        }
    }
}

pub fn write_model_dump(path: &Path, dump: &ModelDump<'_>) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, dump)?;
    Ok(())
}
