use crate::graph::EdgeId;
use roxmltree::TextPos;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("GXL document is not well-formed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("<{element}> at {pos} is missing required attribute `{attribute}`")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
        pos: TextPos,
    },

    #[error("<{element}> at {pos} has a non-numeric `{attribute}`: {value:?}")]
    InvalidNumber {
        element: &'static str,
        attribute: &'static str,
        value: String,
        pos: TextPos,
    },

    #[error("edge {edge_id} references unknown node `{name}`")]
    UnknownEndpoint { edge_id: EdgeId, name: String },

    #[error("edge {edge_id} references `{name}`, which names {count} nodes")]
    AmbiguousEndpoint {
        edge_id: EdgeId,
        name: String,
        count: usize,
    },
}

impl Error {
    /// Whether the failure came from the filesystem rather than the document contents.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. })
    }
}
