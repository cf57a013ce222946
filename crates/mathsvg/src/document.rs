use surface::{EmitOptions, Namespace, NodeId, NodeKind, Surface};
use tracing::warn;

use crate::arity::ArityViolation;
use crate::config::{MarkupConfig, PrettyPrint};
use crate::element::Child;
use crate::error::Error;
use crate::tags::lookup_tag;

/// Owns the element tree and the markup configuration.
///
/// The child management operations take the parent as a raw [`NodeId`] and accept anything that
/// converts into a [`Child`]. A composite child contributes its content node to `append`,
/// `insert_at`, `move_to`, `remove_child` and `index_of`, and its root node to `attach` and
/// `mount`.
#[derive(Debug, Default)]
pub struct Document {
    surface: Surface,
    config: MarkupConfig,
}

impl Document {
    pub fn new(config: MarkupConfig) -> Self {
        Document {
            surface: Surface::new(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &MarkupConfig {
        &self.config
    }

    #[inline]
    pub fn config_mut(&mut self) -> &mut MarkupConfig {
        &mut self.config
    }

    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Creates an element of a supported tag given by name, e.g. from a scene file.
    pub fn create_by_name(&mut self, name: &str) -> Result<NodeId, Error> {
        let Some(info) = lookup_tag(name) else {
            return Err(Error::UnknownTag(name.into()));
        };
        Ok(self
            .surface
            .create_known(info.namespace, info.name, info.kind, Default::default()))
    }

    /// Appends `child` to `parent` and returns the inserted node.
    pub fn append(&mut self, parent: NodeId, child: impl Into<Child>) -> Result<NodeId, Error> {
        let node = child.into().insertion_node();
        self.surface.append_child(parent, node)?;
        Ok(node)
    }

    /// Inserts `child` at `index`, shifting later children back.
    ///
    /// Fails with a range error, leaving the children unchanged, when `index` is greater than the
    /// number of children. `insert_at(parent, child_count, x)` is the same as `append`.
    pub fn insert_at(
        &mut self,
        parent: NodeId,
        index: usize,
        child: impl Into<Child>,
    ) -> Result<NodeId, Error> {
        let node = child.into().insertion_node();
        self.surface.insert_child(parent, index, node)?;
        Ok(node)
    }

    /// Moves an existing child of `parent` to `new_index`; the other children keep their order.
    ///
    /// Fails when `child` is not a child of `parent`, and with a range error when `new_index` is
    /// not below the number of children. Moving a child to its current index does nothing.
    pub fn move_to(
        &mut self,
        parent: NodeId,
        child: impl Into<Child>,
        new_index: usize,
    ) -> Result<(), Error> {
        let node = child.into().insertion_node();
        self.surface.move_child(parent, node, new_index)?;
        Ok(())
    }

    /// Removes `child` from `parent`. The removed node stays alive.
    ///
    /// Removing a node that is not a child of `parent` is not an error: a warning is logged and
    /// `Ok(false)` is returned.
    pub fn remove_child(&mut self, parent: NodeId, child: impl Into<Child>) -> Result<bool, Error> {
        let node = child.into().insertion_node();
        if self.surface.index_of(parent, node)?.is_none() {
            warn!(parent = %parent, child = %node, "not removing a node that is not a child");
            return Ok(false);
        }
        self.surface.remove_child(parent, node)?;
        Ok(true)
    }

    /// Removes all children of `parent` and returns how many there were.
    pub fn clear(&mut self, parent: NodeId) -> Result<usize, Error> {
        Ok(self.surface.clear_children(parent)?)
    }

    /// Appends the root of `child` to `parent`.
    pub fn attach(&mut self, parent: NodeId, child: impl Into<Child>) -> Result<NodeId, Error> {
        let node = child.into().attachment_node();
        self.surface.append_child(parent, node)?;
        Ok(node)
    }

    /// Attaches the root of `child` to the host, which makes it visible.
    pub fn mount(&mut self, child: impl Into<Child>) -> Result<NodeId, Error> {
        let node = child.into().attachment_node();
        self.surface.mount(node)?;
        Ok(node)
    }

    pub fn children(&self, parent: NodeId) -> Result<&[NodeId], Error> {
        Ok(self.surface.children(parent)?)
    }

    pub fn child_count(&self, parent: NodeId) -> Result<usize, Error> {
        Ok(self.surface.child_count(parent)?)
    }

    pub fn index_of(&self, parent: NodeId, child: impl Into<Child>) -> Result<Option<usize>, Error> {
        Ok(self
            .surface
            .index_of(parent, child.into().insertion_node())?)
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, Error> {
        Ok(self.surface.parent(id)?)
    }

    /// Deletes `id` and its subtree. Deleted ids are never reused.
    pub fn delete(&mut self, id: NodeId) -> Result<usize, Error> {
        Ok(self.surface.delete(id)?)
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.surface.get_element_by_id(id)
    }

    /// Reports every element below `root` (inclusive) whose child count does not match the
    /// arity of its tag. Elements of unknown tags are skipped.
    pub fn validate(&self, root: NodeId) -> Result<Vec<ArityViolation>, Error> {
        let mut violations = Vec::new();
        for id in self.surface.descendants(root)? {
            let Some(info) = lookup_tag(self.surface.tag_name(id)?) else {
                continue;
            };
            if info.namespace != self.surface.namespace(id)? || info.kind != NodeKind::Container {
                continue;
            }
            let actual = self.surface.child_count(id)?;
            if !info.arity.accepts(actual) {
                violations.push(ArityViolation {
                    node: id,
                    tag: info.name,
                    expected: info.arity,
                    actual,
                });
            }
        }
        Ok(violations)
    }

    fn pretty_print(&self, root: NodeId) -> Result<bool, Error> {
        Ok(match self.config.pretty_print {
            PrettyPrint::Never => false,
            PrettyPrint::Always => true,
            PrettyPrint::Auto => match self.surface.namespace(root)? {
                Namespace::Svg => self.surface.tag_name(root)? == "svg",
                Namespace::MathML => {
                    self.surface.tag_name(root)? == "math"
                        && self.surface.attribute(root, "display")? == Some("block")
                }
                Namespace::Xhtml => false,
            },
        })
    }

    /// Serializes `root` and its subtree.
    pub fn to_markup(&self, root: NodeId) -> Result<String, Error> {
        if self.config.enforce_arity
            && let Some(violation) = self.validate(root)?.into_iter().next()
        {
            return Err(Error::Arity(violation));
        }
        let options = EmitOptions {
            pretty: self.pretty_print(root)?,
            xml_namespace: self.config.xml_namespace,
        };
        Ok(self.surface.emit(root, options)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arity::Arity;
    use crate::options::MathOptions;
    use crate::tags::{Math, Mfrac, Mi, Mn, Mrow};

    #[test]
    fn create_by_name() {
        let mut doc = Document::default();
        let rect = doc.create_by_name("rect").unwrap();
        assert_eq!(doc.surface().namespace(rect).unwrap(), Namespace::Svg);
        assert_eq!(
            doc.create_by_name("blink"),
            Err(Error::UnknownTag("blink".into()))
        );
    }

    #[test]
    fn validate_reports_arity() {
        let mut doc = Document::default();
        let row = Mrow::new(&mut doc);
        let frac = Mfrac::new(&mut doc);
        row.add(&mut doc, &frac).unwrap();
        let one = Mn::new(&mut doc, 1);
        frac.add(&mut doc, &one).unwrap();

        let violations = doc.validate(row.id()).unwrap();
        assert_eq!(
            violations,
            [ArityViolation {
                node: frac.id(),
                tag: "mfrac",
                expected: Arity::Exactly(2),
                actual: 1,
            }]
        );
        // Not enforced by default.
        assert!(doc.to_markup(row.id()).is_ok());

        doc.config_mut().enforce_arity = true;
        assert!(matches!(doc.to_markup(row.id()), Err(Error::Arity(_))));

        let x = Mi::new(&mut doc, "x");
        frac.add(&mut doc, &x).unwrap();
        assert!(doc.validate(row.id()).unwrap().is_empty());
        assert!(doc.to_markup(row.id()).is_ok());
    }

    #[test]
    fn auto_pretty_print() {
        let mut doc = Document::new(MarkupConfig {
            pretty_print: PrettyPrint::Auto,
            ..Default::default()
        });
        let inline = Math::new(&mut doc);
        let x = Mi::new(&mut doc, "x");
        inline.add(&mut doc, &x).unwrap();
        assert_eq!(doc.to_markup(inline.id()).unwrap(), "<math><mi>x</mi></math>");

        let block = Math::with(&mut doc, &MathOptions::block());
        let y = Mi::new(&mut doc, "y");
        block.add(&mut doc, &y).unwrap();
        assert_eq!(
            doc.to_markup(block.id()).unwrap(),
            "<math display=\"block\">\n    <mi>y</mi>\n</math>"
        );
    }
}
