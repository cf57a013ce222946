use crate::error::SurfaceError;
use crate::escape::{escape_attribute, escape_content};
use crate::node::{Namespace, NodeId, NodeKind};
use crate::surface::Surface;

const INDENT: &str = "    ";

/// Options for [`Surface::emit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Put every child of a container on its own, indented line.
    pub pretty: bool,
    /// Write `xmlns` on the emitted root and wherever the namespace changes.
    pub xml_namespace: bool,
}

fn new_line_and_indent(s: &mut String, depth: usize) {
    s.push('\n');
    for _ in 0..depth {
        s.push_str(INDENT);
    }
}

struct Emitter<'s> {
    surface: &'s Surface,
    s: String,
    options: EmitOptions,
}

impl Emitter<'_> {
    fn emit(
        &mut self,
        id: NodeId,
        parent_ns: Option<Namespace>,
        depth: usize,
    ) -> Result<(), SurfaceError> {
        let surface = self.surface;
        let node = surface.node(id)?;

        self.s.push('<');
        self.s.push_str(&node.tag);
        if self.options.xml_namespace
            && parent_ns != Some(node.namespace)
            && node.attribute("xmlns").is_none()
        {
            self.s.push_str(" xmlns=\"");
            self.s.push_str(node.namespace.uri());
            self.s.push('"');
        }
        for (name, value) in &node.attributes {
            self.s.push(' ');
            self.s.push_str(name);
            self.s.push_str("=\"");
            escape_attribute(&mut self.s, value);
            self.s.push('"');
        }

        match node.kind {
            NodeKind::Token if node.text.is_empty() => {
                self.s.push_str("/>");
                return Ok(());
            }
            NodeKind::Token => {
                self.s.push('>');
                escape_content(&mut self.s, &node.text);
            }
            NodeKind::Container => {
                self.s.push('>');
                for &child in &node.children {
                    if self.options.pretty {
                        new_line_and_indent(&mut self.s, depth + 1);
                    }
                    self.emit(child, Some(node.namespace), depth + 1)?;
                }
                if self.options.pretty && !node.children.is_empty() {
                    new_line_and_indent(&mut self.s, depth);
                }
            }
        }
        self.s.push_str("</");
        self.s.push_str(&node.tag);
        self.s.push('>');
        Ok(())
    }
}

impl Surface {
    /// Serializes `id` and its subtree as markup.
    pub fn emit(&self, id: NodeId, options: EmitOptions) -> Result<String, SurfaceError> {
        let mut emitter = Emitter {
            surface: self,
            s: String::new(),
            options,
        };
        emitter.emit(id, None, 0)?;
        Ok(emitter.s)
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use crate::node::ElementInit;

    use super::*;

    fn token(surface: &mut Surface, tag: &'static str, text: &str) -> NodeId {
        surface.create_known(
            Namespace::MathML,
            tag,
            NodeKind::Token,
            ElementInit {
                text: Some(text.to_string()),
                ..Default::default()
            },
        )
    }

    fn fraction(surface: &mut Surface) -> NodeId {
        let frac = surface
            .create_element(Namespace::MathML, "mfrac", NodeKind::Container)
            .unwrap();
        let num = token(surface, "mn", "1");
        let den = token(surface, "mi", "x");
        surface.append_child(frac, num).unwrap();
        surface.append_child(frac, den).unwrap();
        frac
    }

    #[test]
    fn compact() {
        let mut surface = Surface::new();
        let frac = fraction(&mut surface);
        surface.set_attribute(frac, "linethickness", "0").unwrap();
        assert_snapshot!(
            surface.emit(frac, EmitOptions::default()).unwrap(),
            @r#"<mfrac linethickness="0"><mn>1</mn><mi>x</mi></mfrac>"#
        );
    }

    #[test]
    fn pretty() {
        let mut surface = Surface::new();
        let math = surface
            .create_element(Namespace::MathML, "math", NodeKind::Container)
            .unwrap();
        let frac = fraction(&mut surface);
        let empty = surface
            .create_element(Namespace::MathML, "mrow", NodeKind::Container)
            .unwrap();
        surface.append_child(math, frac).unwrap();
        surface.append_child(math, empty).unwrap();
        let options = EmitOptions {
            pretty: true,
            ..Default::default()
        };
        assert_eq!(
            surface.emit(math, options).unwrap(),
            "<math>\n    <mfrac>\n        <mn>1</mn>\n        <mi>x</mi>\n    </mfrac>\n    <mrow></mrow>\n</math>"
        );
    }

    #[test]
    fn escaping_and_self_closing() {
        let mut surface = Surface::new();
        let row = surface
            .create_element(Namespace::MathML, "mrow", NodeKind::Container)
            .unwrap();
        let op = token(&mut surface, "mo", "<");
        let space = token(&mut surface, "mspace", "");
        surface.set_attribute(space, "width", "1em").unwrap();
        surface.set_attribute(op, "data-note", "a \"b\"").unwrap();
        surface.append_child(row, op).unwrap();
        surface.append_child(row, space).unwrap();
        assert_snapshot!(
            surface.emit(row, EmitOptions::default()).unwrap(),
            @r#"<mrow><mo data-note="a &quot;b&quot;">&lt;</mo><mspace width="1em"/></mrow>"#
        );
    }

    #[test]
    fn namespace_changes() {
        let mut surface = Surface::new();
        let svg = surface
            .create_element(Namespace::Svg, "svg", NodeKind::Container)
            .unwrap();
        let object = surface
            .create_element(Namespace::Svg, "foreignObject", NodeKind::Container)
            .unwrap();
        let math = surface
            .create_element(Namespace::MathML, "math", NodeKind::Container)
            .unwrap();
        surface.append_child(svg, object).unwrap();
        surface.append_child(object, math).unwrap();
        let options = EmitOptions {
            xml_namespace: true,
            ..Default::default()
        };
        assert_snapshot!(
            surface.emit(svg, options).unwrap(),
            @r#"<svg xmlns="http://www.w3.org/2000/svg"><foreignObject><math xmlns="http://www.w3.org/1998/Math/MathML"></math></foreignObject></svg>"#
        );
    }
}
