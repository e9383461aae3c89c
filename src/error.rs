#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty diagram text")]
    Empty,

    #[error("unsupported diagram type: {header}")]
    UnsupportedDiagram { header: String },
}

pub type Result<T, E = ParseError> = std::result::Result<T, E>;
