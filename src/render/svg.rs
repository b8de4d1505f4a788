//! SVG diagram export.

use super::layout::{Layout, LinkLayout, NodeLayout, FONT_SIZE};
use std::fmt::Write;

const STYLE: &str = "\
text { font-family: sans-serif; font-size: 14px; text-anchor: middle; }
path.node { fill: #f5f5f5; stroke: #424242; stroke-width: 2; }
circle.cep { fill: #ffffff; stroke: #424242; stroke-width: 1; }
circle.cep.provider { fill: #bbdefb; }
circle.cep.consumer { fill: #c8e6c9; }
path.link { fill: none; stroke: #616161; stroke-width: 1; }";

/// Path of a rounded rectangle centred on `(x, y)`
pub fn rounded_rect_path(x: i64, y: i64, width: i64, height: i64, radius: i64) -> String {
    let w = width - 2 * radius;
    let h = height - 2 * radius;
    let r = radius;
    format!(
        "M{},{} h{} a{r},{r} 0 0 1 {r},{r} v{} a{r},{r} 0 0 1 -{r},{r} h-{} a{r},{r} 0 0 1 -{r},-{r} v-{} a{r},{r} 0 0 1 {r},-{r} z",
        x - w / 2,
        y - height / 2,
        w,
        h,
        w,
        h,
        r = r
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn write_node(out: &mut String, node: &NodeLayout) -> std::fmt::Result {
    writeln!(out, "  <g class=\"node {}\">", node.function)?;
    writeln!(out, "    <title>{} ({})</title>", escape(&node.name), node.id)?;
    writeln!(
        out,
        "    <path class=\"node {}\" d=\"{}\"/>",
        node.function,
        rounded_rect_path(node.x, node.y, node.width, node.height, FONT_SIZE)
    )?;
    // +4px keeps descenders inside the box
    writeln!(out, "    <text x=\"{}\" y=\"{}\">{}</text>", node.x, node.y + 4, node.label)?;
    for nep in &node.edge_points {
        writeln!(out, "    <g class=\"nep\">")?;
        writeln!(out, "      <title>{} ({})</title>", escape(&nep.name), nep.id)?;
        writeln!(
            out,
            "      <circle class=\"cep {}\" cx=\"{}\" cy=\"{}\" r=\"{}\"/>",
            nep.role.as_str(),
            nep.x,
            nep.y,
            FONT_SIZE
        )?;
        writeln!(out, "      <text x=\"{}\" y=\"{}\">{}</text>", nep.x, nep.y + 4, escape(nep.label))?;
        writeln!(out, "    </g>")?;
    }
    writeln!(out, "  </g>")
}

fn write_link(out: &mut String, link: &LinkLayout) -> std::fmt::Result {
    writeln!(
        out,
        "  <path class=\"link\" d=\"M{} {} L{} {}\"><title>{}</title></path>",
        link.from.0,
        link.from.1,
        link.to.0,
        link.to.1,
        escape(&link.name)
    )
}

/// Render a laid-out topology as a standalone SVG document.
///
/// Links are drawn first so that nodes and edge points cover their ends.
pub fn render(layout: &Layout) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = layout.width,
        h = layout.height
    )?;
    writeln!(out, "  <style>\n{}\n  </style>", STYLE)?;
    for link in &layout.links {
        write_link(&mut out, link)?;
    }
    for node in &layout.nodes {
        write_node(&mut out, node)?;
    }
    writeln!(out, "</svg>")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tapi::{Node, NodeOptions, Tier, Topology};
    use crate::utils::ident::IdGenerator;

    #[test]
    fn test_rounded_rect_path() {
        assert_eq!(
            rounded_rect_path(100, 100, 60, 40, 10),
            "M80,80 h40 a10,10 0 0 1 10,10 v20 a10,10 0 0 1 -10,10 h-40 a10,10 0 0 1 -10,-10 v-20 a10,10 0 0 1 10,-10 z"
        );
    }

    #[test]
    fn test_render_document() {
        let mut ids = IdGenerator::seeded(81);
        let mut topology = Topology::new(&mut ids, "svg");
        let smo = Node::new(&mut ids, Tier::Smo, "0".to_string(), None, NodeOptions::default()).unwrap();
        let smo = topology.add_node(smo);
        let ric = Node::new(&mut ids, Tier::NearRtRic, "00".to_string(), Some(smo), NodeOptions::default()).unwrap();
        let ric = topology.add_node(ric);
        topology.connect(&mut ids, "o1-netconf", "o1-netconf", ric, smo).unwrap();

        let svg = render(&Layout::of(&topology)).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(">SMO</text>"));
        assert!(svg.contains(">Near-RT-RIC</text>"));
        assert!(svg.contains(">NC</text>"));
        assert_eq!(svg.matches("<circle").count(), 9);
        assert_eq!(svg.matches("class=\"link\"").count(), 1);
        assert!(svg.contains("O1-NETCONF|smo-0|-&gt;|near-rt-ric-00|"));
    }
}
