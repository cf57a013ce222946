use tracing::debug;

use crate::error::SurfaceError;
use crate::node::{ElementInit, Namespace, NodeData, NodeId, NodeKind};

/// An in-memory tree of namespaced elements.
///
/// Every element lives in a slot addressed by its [`NodeId`]. Elements start out detached; they
/// become part of a tree by being inserted into a container, and they become *connected* when the
/// top of their tree is [mounted](Surface::mount) on the host.
#[derive(Debug, Default)]
pub struct Surface {
    slots: Vec<Option<NodeData>>,
    roots: Vec<NodeId>,
}

/// Returns `true` if `name` can be used as an element or attribute name.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '.' | '_' | ':'))
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements that have not been deleted.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn create_element(
        &mut self,
        namespace: Namespace,
        tag: &str,
        kind: NodeKind,
    ) -> Result<NodeId, SurfaceError> {
        if !is_valid_name(tag) {
            return Err(SurfaceError::InvalidName(tag.into()));
        }
        Ok(self.push(NodeData::new(namespace, tag.into(), kind)))
    }

    /// Creates an element whose tag and attribute names are known to be valid.
    pub fn create_known(
        &mut self,
        namespace: Namespace,
        tag: &'static str,
        kind: NodeKind,
        init: ElementInit,
    ) -> NodeId {
        debug_assert!(is_valid_name(tag));
        let mut data = NodeData::new(namespace, tag.into(), kind);
        for (name, value) in init.attributes {
            debug_assert!(is_valid_name(name));
            data.set_attribute(name, value);
        }
        if let Some(text) = init.text {
            debug_assert!(matches!(kind, NodeKind::Token));
            data.text = text;
        }
        self.push(data)
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId::new(self.slots.len());
        self.slots.push(Some(data));
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<&NodeData, SurfaceError> {
        match self.slots.get(id.index()) {
            Some(Some(data)) => Ok(data),
            Some(None) => Err(SurfaceError::Deleted(id)),
            None => Err(SurfaceError::UnknownNode(id)),
        }
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData, SurfaceError> {
        match self.slots.get_mut(id.index()) {
            Some(Some(data)) => Ok(data),
            Some(None) => Err(SurfaceError::Deleted(id)),
            None => Err(SurfaceError::UnknownNode(id)),
        }
    }

    #[inline]
    pub fn is_alive(&self, id: NodeId) -> bool {
        matches!(self.slots.get(id.index()), Some(Some(_)))
    }

    pub fn namespace(&self, id: NodeId) -> Result<Namespace, SurfaceError> {
        Ok(self.node(id)?.namespace)
    }

    pub fn tag_name(&self, id: NodeId) -> Result<&str, SurfaceError> {
        Ok(&self.node(id)?.tag)
    }

    pub fn kind(&self, id: NodeId) -> Result<NodeKind, SurfaceError> {
        Ok(self.node(id)?.kind)
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Result<Option<&str>, SurfaceError> {
        Ok(self.node(id)?.attribute(name))
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> Result<bool, SurfaceError> {
        Ok(self.node(id)?.attribute(name).is_some())
    }

    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), SurfaceError> {
        if !is_valid_name(name) {
            return Err(SurfaceError::InvalidName(name.into()));
        }
        self.node_mut(id)?.set_attribute(name, value.into());
        Ok(())
    }

    /// Removes an attribute and returns its old value.
    pub fn remove_attribute(
        &mut self,
        id: NodeId,
        name: &str,
    ) -> Result<Option<String>, SurfaceError> {
        Ok(self.node_mut(id)?.remove_attribute(name))
    }

    /// Attributes in the order they were first set.
    pub fn attributes(
        &self,
        id: NodeId,
    ) -> Result<impl Iterator<Item = (&str, &str)>, SurfaceError> {
        Ok(self
            .node(id)?
            .attributes
            .iter()
            .map(|(name, value)| (&**name, value.as_str())))
    }

    pub fn text(&self, id: NodeId) -> Result<&str, SurfaceError> {
        let node = self.node(id)?;
        match node.kind {
            NodeKind::Token => Ok(&node.text),
            NodeKind::Container => Err(SurfaceError::NotAToken {
                tag: node.tag.clone(),
            }),
        }
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), SurfaceError> {
        let node = self.node_mut(id)?;
        match node.kind {
            NodeKind::Token => {
                node.text = text.into();
                Ok(())
            }
            NodeKind::Container => Err(SurfaceError::NotAToken {
                tag: node.tag.clone(),
            }),
        }
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, SurfaceError> {
        Ok(self.node(id)?.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], SurfaceError> {
        Ok(&self.node(id)?.children)
    }

    pub fn child_count(&self, id: NodeId) -> Result<usize, SurfaceError> {
        Ok(self.node(id)?.children.len())
    }

    /// Position of `child` among the children of `parent`, if it is one.
    pub fn index_of(&self, parent: NodeId, child: NodeId) -> Result<Option<usize>, SurfaceError> {
        Ok(self.node(parent)?.children.iter().position(|&c| c == child))
    }

    /// Checks that `child` may be put into `parent`.
    fn check_insertion(&self, parent: NodeId, child: NodeId) -> Result<(), SurfaceError> {
        let parent_node = self.node(parent)?;
        self.node(child)?;
        if matches!(parent_node.kind, NodeKind::Token) {
            return Err(SurfaceError::NotAContainer {
                tag: parent_node.tag.clone(),
            });
        }
        // `child` must not be `parent` itself or one of its ancestors.
        let mut current = Some(parent);
        while let Some(id) = current {
            if id == child {
                return Err(SurfaceError::HierarchyRequest { parent, child });
            }
            current = self.node(id)?.parent;
        }
        Ok(())
    }

    /// Takes `id` out of its parent's child list or off the host.
    fn unlink(&mut self, id: NodeId) -> Result<(), SurfaceError> {
        let node = self.node_mut(id)?;
        let parent = node.parent.take();
        if std::mem::replace(&mut node.mounted, false) {
            self.roots.retain(|&root| root != id);
        }
        if let Some(parent) = parent {
            self.node_mut(parent)?.children.retain(|&c| c != id);
        }
        Ok(())
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SurfaceError> {
        self.check_insertion(parent, child)?;
        self.unlink(child)?;
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Inserts `child` so that it ends up before the node currently at `index`.
    ///
    /// `index == child_count` appends. A child that already has a parent is moved.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), SurfaceError> {
        self.check_insertion(parent, child)?;
        let children = &self.node(parent)?.children;
        if index > children.len() {
            return Err(SurfaceError::IndexOutOfRange {
                index,
                len: children.len(),
            });
        }
        let reference = children.get(index).copied();
        if reference == Some(child) {
            return Ok(());
        }
        self.unlink(child)?;
        let children = &mut self.node_mut(parent)?.children;
        let pos = reference
            .and_then(|r| children.iter().position(|&c| c == r))
            .unwrap_or(children.len());
        children.insert(pos, child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Moves an existing child so that it ends up at `new_index`.
    pub fn move_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
        new_index: usize,
    ) -> Result<(), SurfaceError> {
        let children = &mut self.node_mut(parent)?.children;
        let Some(current) = children.iter().position(|&c| c == child) else {
            return Err(SurfaceError::NotAChild { parent, child });
        };
        if new_index >= children.len() {
            return Err(SurfaceError::IndexOutOfRange {
                index: new_index,
                len: children.len(),
            });
        }
        if new_index != current {
            let moved = children.remove(current);
            children.insert(new_index, moved);
        }
        Ok(())
    }

    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SurfaceError> {
        let children = &mut self.node_mut(parent)?.children;
        let Some(pos) = children.iter().position(|&c| c == child) else {
            return Err(SurfaceError::NotAChild { parent, child });
        };
        children.remove(pos);
        self.node_mut(child)?.parent = None;
        Ok(())
    }

    /// Detaches every child of `parent` and returns how many there were.
    pub fn clear_children(&mut self, parent: NodeId) -> Result<usize, SurfaceError> {
        let children = std::mem::take(&mut self.node_mut(parent)?.children);
        for &child in &children {
            self.node_mut(child)?.parent = None;
        }
        Ok(children.len())
    }

    /// Takes `id` out of its tree. The element stays alive and can be inserted elsewhere.
    pub fn detach(&mut self, id: NodeId) -> Result<(), SurfaceError> {
        self.unlink(id)
    }

    /// Attaches a detached element to the host.
    pub fn mount(&mut self, id: NodeId) -> Result<(), SurfaceError> {
        let node = self.node_mut(id)?;
        if node.parent.is_some() || node.mounted {
            return Err(SurfaceError::AlreadyAttached(id));
        }
        node.mounted = true;
        self.roots.push(id);
        debug!(node = %id, "mounted");
        Ok(())
    }

    /// Returns `false` if `id` was not mounted.
    pub fn unmount(&mut self, id: NodeId) -> Result<bool, SurfaceError> {
        let node = self.node_mut(id)?;
        if !node.mounted {
            return Ok(false);
        }
        node.mounted = false;
        self.roots.retain(|&root| root != id);
        debug!(node = %id, "unmounted");
        Ok(true)
    }

    /// Mounted elements, in mount order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// The topmost ancestor of `id` (or `id` itself).
    pub fn root_of(&self, id: NodeId) -> Result<NodeId, SurfaceError> {
        let mut current = id;
        while let Some(parent) = self.node(current)?.parent {
            current = parent;
        }
        Ok(current)
    }

    pub fn is_connected(&self, id: NodeId) -> bool {
        self.root_of(id)
            .and_then(|root| self.node(root))
            .is_ok_and(|root| root.mounted)
    }

    /// Deletes `id` and everything below it. Returns the number of deleted elements.
    pub fn delete(&mut self, id: NodeId) -> Result<usize, SurfaceError> {
        self.unlink(id)?;
        let doomed: Vec<NodeId> = self.descendants(id)?.collect();
        for &node in &doomed {
            if let Some(slot) = self.slots.get_mut(node.index()) {
                *slot = None;
            }
        }
        debug!(node = %id, count = doomed.len(), "deleted subtree");
        Ok(doomed.len())
    }

    /// `id` and all its descendants in document order.
    pub fn descendants(&self, id: NodeId) -> Result<Descendants<'_>, SurfaceError> {
        self.node(id)?;
        Ok(Descendants {
            surface: self,
            stack: vec![id],
        })
    }

    /// First connected element, in document order, whose `id` attribute equals `value`.
    pub fn get_element_by_id(&self, value: &str) -> Option<NodeId> {
        self.roots.iter().find_map(|&root| {
            self.descendants(root)
                .ok()?
                .find(|&id| matches!(self.attribute(id, "id"), Ok(Some(v)) if v == value))
        })
    }
}

/// Pre-order iterator over a subtree; see [`Surface::descendants`].
pub struct Descendants<'s> {
    surface: &'s Surface,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Ok(node) = self.surface.node(id) {
            self.stack.extend(node.children.iter().rev());
        }
        Some(id)
    }
}
