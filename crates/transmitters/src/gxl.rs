//! GXL interchange codec.
//!
//! The document is a flat list of `node` and `edge` elements under a root element:
//!
//! ```text
//! <gxl>
//!   <node id="v1" x="12.3456" y="-7.8901" />
//!   <edge id="1" start="v1" end="v2" />
//! </gxl>
//! ```
//!
//! Nodes are written in Cartesian form rounded to four decimals; reading converts back to polar
//! form. Colors and degrees are not part of the format. Reading is all-or-nothing: the graph is
//! only returned once every element has been parsed and every edge endpoint resolved.

use crate::error::{Error, Result};
use crate::geom::{Point, round_to};
use crate::graph::{EdgeId, Graph, NodeId};
use rustc_hash::FxHashMap;
use std::fmt::Write as _;
use std::path::Path;

const ROOT_TAG: &str = "gxl";
const COORD_DECIMALS: i32 = 4;

/// Serializes `graph` to a GXL document.
pub fn to_gxl_string(graph: &Graph) -> String {
    let mut out = String::with_capacity(64 + graph.node_count() * 48 + graph.edge_count() * 40);
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    let _ = writeln!(out, "<{ROOT_TAG}>");
    for node in graph.nodes() {
        let p = node.cartesian();
        out.push_str("  <node id=\"");
        escape_attr_into(&mut out, &node.name);
        let _ = writeln!(
            out,
            "\" x=\"{}\" y=\"{}\" />",
            fmt_coord(p.x),
            fmt_coord(p.y)
        );
    }
    for edge in graph.edges() {
        let _ = write!(out, "  <edge id=\"{}\" start=\"", edge.id);
        escape_attr_into(&mut out, &graph.node(edge.start).name);
        out.push_str("\" end=\"");
        escape_attr_into(&mut out, &graph.node(edge.end).name);
        out.push_str("\" />\n");
    }
    let _ = writeln!(out, "</{ROOT_TAG}>");
    out
}

/// Parses a GXL document.
///
/// `node` and `edge` elements are collected from anywhere in the document, in document order;
/// the root element name is not checked. Edge endpoints must match exactly one node name
/// (case-sensitive).
pub fn from_gxl_str(text: &str) -> Result<Graph> {
    // GXL files conventionally carry `<!DOCTYPE gxl SYSTEM "...gxl-1.0.dtd">`.
    let opts = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(text, opts)?;

    let mut graph = Graph::new();
    let mut by_name: FxHashMap<&str, Vec<NodeId>> = FxHashMap::default();
    for el in doc.descendants().filter(|n| n.has_tag_name("node")) {
        let name = required_attr(&doc, el, "node", "id")?;
        let x = number_attr(&doc, el, "node", "x")?;
        let y = number_attr(&doc, el, "node", "y")?;
        let id = graph.add_node(name, Point::new(x, y).to_polar());
        by_name.entry(name).or_default().push(id);
    }

    for el in doc.descendants().filter(|n| n.has_tag_name("edge")) {
        let raw_id = required_attr(&doc, el, "edge", "id")?;
        let start = required_attr(&doc, el, "edge", "start")?;
        let end = required_attr(&doc, el, "edge", "end")?;
        let edge_id: EdgeId = raw_id
            .trim()
            .parse()
            .map_err(|_| Error::InvalidNumber {
                element: "edge",
                attribute: "id",
                value: raw_id.to_string(),
                pos: doc.text_pos_at(el.range().start),
            })?;
        let start = resolve_endpoint(&by_name, edge_id, start)?;
        let end = resolve_endpoint(&by_name, edge_id, end)?;
        graph.add_edge_with_id(start, end, edge_id);
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "parsed GXL document"
    );
    Ok(graph)
}

/// Reads and parses a GXL file.
pub fn read_gxl(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = from_gxl_str(&text)?;
    tracing::debug!(path = %path.display(), "read GXL file");
    Ok(graph)
}

/// Serializes `graph` and writes it to `path`, replacing any existing file.
pub fn write_gxl(graph: &Graph, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let text = to_gxl_string(graph);
    std::fs::write(path, text).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), nodes = graph.node_count(), "wrote GXL file");
    Ok(())
}

fn required_attr<'a>(
    doc: &roxmltree::Document<'_>,
    el: roxmltree::Node<'a, '_>,
    element: &'static str,
    attribute: &'static str,
) -> Result<&'a str> {
    el.attribute(attribute).ok_or_else(|| Error::MissingAttribute {
        element,
        attribute,
        pos: doc.text_pos_at(el.range().start),
    })
}

fn number_attr(
    doc: &roxmltree::Document<'_>,
    el: roxmltree::Node<'_, '_>,
    element: &'static str,
    attribute: &'static str,
) -> Result<f64> {
    let raw = required_attr(doc, el, element, attribute)?;
    raw.trim().parse::<f64>().map_err(|_| Error::InvalidNumber {
        element,
        attribute,
        value: raw.to_string(),
        pos: doc.text_pos_at(el.range().start),
    })
}

fn resolve_endpoint(
    by_name: &FxHashMap<&str, Vec<NodeId>>,
    edge_id: EdgeId,
    name: &str,
) -> Result<NodeId> {
    match by_name.get(name).map(Vec::as_slice) {
        Some([only]) => Ok(*only),
        None | Some([]) => Err(Error::UnknownEndpoint {
            edge_id,
            name: name.to_string(),
        }),
        Some(many) => Err(Error::AmbiguousEndpoint {
            edge_id,
            name: name.to_string(),
            count: many.len(),
        }),
    }
}

/// Four-decimal coordinate, `.` as separator, shortest form, never `-0`.
fn fmt_coord(v: f64) -> String {
    round_to(v, COORD_DECIMALS).to_string()
}

fn escape_attr_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
