//! Diagram coordinates for a generated topology.
//!
//! Nodes are placed in one row per tier, left to right in creation order.
//! Edge points sit on the top border of their node when they connect towards
//! an ancestor and on the bottom border otherwise.

use crate::tapi::{EdgePoint, Node, Role, Tier, Topology};
use crate::topology::connections::{link_rules, End};
use std::collections::HashMap;
use uuid::Uuid;

/// Base unit of the diagram; every other measure derives from it
pub const FONT_SIZE: i64 = 14;

const NEP_SPACING: i64 = 3 * FONT_SIZE;
const NODE_HEIGHT: i64 = 4 * FONT_SIZE;
const ROW_HEIGHT: i64 = 10 * FONT_SIZE;
const COLUMN_GAP: i64 = 2 * FONT_SIZE;
const MARGIN: i64 = 4 * FONT_SIZE;

/// Row of a tier in the diagram
pub fn row(tier: Tier) -> i64 {
    match tier {
        Tier::Smo => 0,
        Tier::OCloud | Tier::NearRtRic => 1,
        Tier::OCuCp | Tier::OCuUp => 2,
        Tier::ODu => 3,
        Tier::FronthaulGateway => 4,
        Tier::ORu => 5,
        Tier::UserEquipment => 6,
    }
}

/// Whether an edge point of a `tier` node connects towards an ancestor
pub fn faces_up(tier: Tier, edge_point: &EdgePoint) -> bool {
    link_rules(tier).iter().any(|rule| match edge_point.role() {
        Role::Provider => rule.provider == End::Current && edge_point.name() == format!("{}-provider", rule.name_prefix),
        Role::Consumer => {
            rule.consumer == End::Current && edge_point.name() == format!("{}-consumer", rule.consumer_prefix)
        }
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgePointLayout {
    pub id: Uuid,
    pub name: String,
    pub label: &'static str,
    pub role: Role,
    pub x: i64,
    pub y: i64,
}

/// Box of one node, centred on `(x, y)`
#[derive(Debug, Clone, PartialEq)]
pub struct NodeLayout {
    pub id: Uuid,
    pub name: String,
    pub label: &'static str,
    pub function: &'static str,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub edge_points: Vec<EdgePointLayout>,
}

/// Straight connection between two edge point centres, consumer first
#[derive(Debug, Clone, PartialEq)]
pub struct LinkLayout {
    pub id: Uuid,
    pub name: String,
    pub from: (i64, i64),
    pub to: (i64, i64),
}

#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub nodes: Vec<NodeLayout>,
    pub links: Vec<LinkLayout>,
    pub width: i64,
    pub height: i64,
}

fn node_width(top: usize, bottom: usize) -> i64 {
    top.max(bottom).max(1) as i64 * NEP_SPACING + 2 * FONT_SIZE
}

fn spread(center: i64, count: usize) -> impl Iterator<Item = i64> {
    let start = center - (count.saturating_sub(1) as i64 * NEP_SPACING) / 2;
    (0..count as i64).map(move |i| start + i * NEP_SPACING)
}

fn layout_node(node: &Node, left: i64) -> NodeLayout {
    let (top, bottom): (Vec<&EdgePoint>, Vec<&EdgePoint>) =
        node.edge_points().iter().partition(|nep| faces_up(node.tier(), nep));
    let width = node_width(top.len(), bottom.len());
    let x = left + width / 2;
    let y = MARGIN + row(node.tier()) * ROW_HEIGHT;

    let mut edge_points = Vec::with_capacity(node.edge_points().len());
    for (side, border) in [(&top, y - NODE_HEIGHT / 2), (&bottom, y + NODE_HEIGHT / 2)] {
        for (nep, nep_x) in side.iter().zip(spread(x, side.len())) {
            edge_points.push(EdgePointLayout {
                id: nep.identifier(),
                name: nep.name().to_string(),
                label: nep.protocol().short_label(),
                role: nep.role(),
                x: nep_x,
                y: border,
            });
        }
    }

    NodeLayout {
        id: node.identifier(),
        name: node.name().to_string(),
        label: node.function_label(),
        function: node.tier().type_name(),
        x,
        y,
        width,
        height: NODE_HEIGHT,
        edge_points,
    }
}

impl Layout {
    /// Compute positions for every node, edge point and link
    pub fn of(topology: &Topology) -> Self {
        let mut cursors: HashMap<i64, i64> = HashMap::new();
        let mut positions: HashMap<Uuid, (i64, i64)> = HashMap::new();
        let mut layout = Layout::default();

        for node in topology.nodes() {
            let cursor = cursors.entry(row(node.tier())).or_insert(MARGIN);
            let placed = layout_node(node, *cursor);
            *cursor += placed.width + COLUMN_GAP;
            for nep in &placed.edge_points {
                positions.insert(nep.id, (nep.x, nep.y));
            }
            layout.width = layout.width.max(*cursor - COLUMN_GAP + MARGIN);
            layout.height = layout.height.max(placed.y + NODE_HEIGHT / 2 + MARGIN);
            layout.nodes.push(placed);
        }

        for link in topology.links() {
            let from = positions.get(&link.consumer_end().node_edge_point_uuid);
            let to = positions.get(&link.provider_end().node_edge_point_uuid);
            if let (Some(from), Some(to)) = (from, to) {
                layout.links.push(LinkLayout {
                    id: link.identifier(),
                    name: link.name().to_string(),
                    from: *from,
                    to: *to,
                });
            }
        }

        layout
    }
}
