//! JSON graph loader.
//!
//! The file format is the serde form of [`GraphDef`]; see [`crate::def`] for
//! an example.  Loading resolves names and builds the graph in one step, then
//! runs [`BehaviorGraph::validate`] so authoring mistakes show up in the log.

use std::io::Read;
use std::path::Path;

use crate::{BehaviorError, BehaviorGraph, BehaviorResult, GraphDef};

/// Load a behavior graph from a JSON file.
pub fn load_graph_json(path: &Path) -> BehaviorResult<BehaviorGraph> {
    let file = std::fs::File::open(path).map_err(BehaviorError::Io)?;
    load_graph_reader(file)
}

/// Like [`load_graph_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or graphs embedded in a
/// binary.
pub fn load_graph_reader<R: Read>(reader: R) -> BehaviorResult<BehaviorGraph> {
    let def: GraphDef =
        serde_json::from_reader(reader).map_err(|e| BehaviorError::Parse(e.to_string()))?;
    let graph = def.build()?;
    graph.validate();
    Ok(graph)
}
