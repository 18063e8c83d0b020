//! The workflow the editor opens with.

use serde_json::{Map, Value};

use super::{Edge, EdgeId, Node, NodeData, NodeId, NodeKind, Position, Workflow};

/// Returns the seed workflow a fresh editor starts out with: three nodes
/// wired start to process to stop.
///
/// The seed carries richer attributes than interactively created nodes
/// get (custom names, descriptions, a prompt and tool entries on the
/// process step) so a first launch demonstrates the full schema. Its
/// short numeric identifiers are historical and survive export.
#[must_use]
pub fn seed_workflow() -> Workflow {
    let start = NodeId::from("1");
    let process = NodeId::from("2");
    let stop = NodeId::from("3");

    let nodes = vec![
        Node {
            id: start.clone(),
            kind: NodeKind::Start,
            position: Position::new(250.0, 5.0),
            data: NodeData::for_kind(NodeKind::Start)
                .with_name("Start")
                .with_description("Start of the workflow"),
        },
        Node {
            id: process.clone(),
            kind: NodeKind::Process,
            position: Position::new(100.0, 100.0),
            data: NodeData::for_kind(NodeKind::Process)
                .with_name("Process Step")
                .with_description("Processing step")
                .with_prompt("Process the input")
                .with_tool("tool1", Value::Object(Map::new()))
                .with_tool("tool2", Value::Object(Map::new())),
        },
        Node {
            id: stop.clone(),
            kind: NodeKind::Stop,
            position: Position::new(400.0, 100.0),
            data: NodeData::for_kind(NodeKind::Stop)
                .with_name("End")
                .with_description("End of the workflow")
                .with_ai_model(""),
        },
    ];

    let edges = vec![seed_edge(&start, &process), seed_edge(&process, &stop)];

    Workflow { nodes, edges }
}

fn seed_edge(source: &NodeId, target: &NodeId) -> Edge {
    Edge {
        id: EdgeId::pairing(source, target),
        source: source.clone(),
        target: target.clone(),
        curve: None,
        animated: false,
    }
}
