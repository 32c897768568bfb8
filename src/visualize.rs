use dot::{Edges, GraphWalk, Labeller, Nodes};

use crate::ring::CylinderRing;
use crate::scheduling_blocks::schedule::Schedule;

type Node = usize;

#[derive(Debug, Clone)]
enum EdgeKind {
    /// `next` link of the ring
    Ring,
    /// k-th move of the arm and the distance charged for it
    Move { step: usize, distance: usize },
}

#[derive(Debug, Clone)]
struct Edge {
    source: Node,
    target: Node,
    kind: EdgeKind,
}

struct Graph<'a> {
    ring: &'a CylinderRing,
    head: Node,
    title: String,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl<'a> Labeller<'a, Node, Edge> for Graph<'a> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new(self.title.as_str()).unwrap()
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        let marker = if *n == self.head { " (head)" } else { "" };
        dot::LabelText::label(format!("{}{}", self.ring.value(*n), marker))
    }

    fn edge_label(&self, e: &Edge) -> dot::LabelText<'a> {
        match e.kind {
            EdgeKind::Ring => dot::LabelText::label(""),
            EdgeKind::Move { step, distance } => {
                dot::LabelText::label(format!("#{} +{}", step, distance))
            }
        }
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for Graph<'a> {
    fn nodes(&self) -> Nodes<'_, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.source
    }

    fn target(&self, e: &Edge) -> Node {
        e.target
    }
}

/// Returns the ring and the service path of `schedule` in DOT format.
///
/// Unlabelled edges are the ring links, labelled edges are the moves of the
/// arm in order, with the distance each one was charged.
///
/// Use returned string with `dot` or `circo`.
pub fn draw_schedule(ring: &CylinderRing, schedule: &Schedule) -> std::io::Result<String> {
    let mut graph = Graph {
        ring,
        head: schedule.head,
        title: schedule.algorithm.slug().to_string(),
        nodes: ring.first().map(|first| ring.walk_from(first).collect()).unwrap_or_default(),
        edges: Vec::new(),
    };

    for &node in &graph.nodes {
        graph.edges.push(Edge {
            source: node,
            target: ring.next(node),
            kind: EdgeKind::Ring,
        });
    }

    let path = schedule.path();
    for (i, (window, step)) in path.windows(2).zip(&schedule.steps).enumerate() {
        graph.edges.push(Edge {
            source: window[0],
            target: window[1],
            kind: EdgeKind::Move {
                step: i + 1,
                distance: step.distance,
            },
        });
    }

    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&graph, &mut buffer)?;
    String::from_utf8(buffer.into_inner())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
