use crate::node::{Namespace, NodeData, NodeId};
use crate::style::declarations;
use crate::surface::Surface;

fn style_value<'a>(node: &'a NodeData, prop: &str) -> Option<&'a str> {
    declarations(node.attribute("style")?)
        .find(|(p, _)| *p == prop)
        .map(|(_, value)| value)
}

/// SVG also accepts `display` and `visibility` as presentation attributes; the inline style wins.
fn property<'a>(node: &'a NodeData, prop: &str) -> Option<&'a str> {
    style_value(node, prop).or_else(|| {
        if matches!(node.namespace, Namespace::Svg) {
            node.attribute(prop)
        } else {
            None
        }
    })
}

impl Surface {
    /// Whether `id` would be rendered by the host.
    ///
    /// An element is invisible when it is deleted or not connected, when it or an ancestor has
    /// `display: none`, when it sits inside an SVG `<defs>`, or when the closest `visibility`
    /// declaration on it or an ancestor is `hidden` or `collapse`.
    pub fn is_visible(&self, id: NodeId) -> bool {
        if !self.is_connected(id) {
            return false;
        }
        let mut visibility = None;
        let mut current = Some(id);
        while let Some(node_id) = current {
            let Ok(node) = self.node(node_id) else {
                return false;
            };
            if property(node, "display").is_some_and(|v| v.eq_ignore_ascii_case("none")) {
                return false;
            }
            if matches!(node.namespace, Namespace::Svg) && &*node.tag == "defs" {
                return false;
            }
            if visibility.is_none() {
                visibility = match property(node, "visibility") {
                    Some(v) if v.eq_ignore_ascii_case("hidden") => Some(false),
                    Some(v) if v.eq_ignore_ascii_case("collapse") => Some(false),
                    Some(v) if v.eq_ignore_ascii_case("visible") => Some(true),
                    _ => None,
                };
            }
            current = node.parent;
        }
        visibility.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::node::NodeKind;

    use super::*;

    fn svg_tree() -> (Surface, NodeId, NodeId, NodeId) {
        let mut surface = Surface::new();
        let svg = surface
            .create_element(Namespace::Svg, "svg", NodeKind::Container)
            .unwrap();
        let group = surface
            .create_element(Namespace::Svg, "g", NodeKind::Container)
            .unwrap();
        let rect = surface
            .create_element(Namespace::Svg, "rect", NodeKind::Token)
            .unwrap();
        surface.append_child(svg, group).unwrap();
        surface.append_child(group, rect).unwrap();
        (surface, svg, group, rect)
    }

    #[test]
    fn needs_connection() {
        let (mut surface, svg, _, rect) = svg_tree();
        assert!(!surface.is_visible(rect));
        surface.mount(svg).unwrap();
        assert!(surface.is_visible(rect));
    }

    #[test]
    fn display_none_hides_subtree() {
        let (mut surface, svg, group, rect) = svg_tree();
        surface.mount(svg).unwrap();
        surface.set_style(group, "display", "none").unwrap();
        assert!(!surface.is_visible(rect));
        assert!(surface.is_visible(svg));
        surface.set_style(group, "display", "").unwrap();
        surface.set_attribute(group, "display", "none").unwrap();
        assert!(!surface.is_visible(rect));
    }

    #[test]
    fn nearest_visibility_wins() {
        let (mut surface, svg, group, rect) = svg_tree();
        surface.mount(svg).unwrap();
        surface.set_style(group, "visibility", "hidden").unwrap();
        assert!(!surface.is_visible(rect));
        surface.set_attribute(rect, "visibility", "visible").unwrap();
        assert!(surface.is_visible(rect));
        assert!(!surface.is_visible(group));
    }

    #[test]
    fn defs_are_not_rendered() {
        let (mut surface, svg, group, rect) = svg_tree();
        let defs = surface
            .create_element(Namespace::Svg, "defs", NodeKind::Container)
            .unwrap();
        surface.append_child(svg, defs).unwrap();
        surface.append_child(defs, group).unwrap();
        surface.mount(svg).unwrap();
        assert!(!surface.is_visible(rect));
    }

    #[test]
    fn mathml_display_attribute_is_not_css() {
        let mut surface = Surface::new();
        let math = surface
            .create_element(Namespace::MathML, "math", NodeKind::Container)
            .unwrap();
        surface.set_attribute(math, "display", "block").unwrap();
        surface.mount(math).unwrap();
        assert!(surface.is_visible(math));
        surface.set_attribute(math, "visibility", "hidden").unwrap();
        assert!(surface.is_visible(math));
    }
}
