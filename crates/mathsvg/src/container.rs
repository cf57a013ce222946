use surface::NodeId;

use crate::document::Document;
use crate::element::{Child, Element};
use crate::error::Error;
use crate::tags::ContainerTag;

/// Child management for elements that hold other elements.
///
/// These delegate to the [`Document`] operations of the same name; see there for the exact rules.
impl<T: ContainerTag> Element<T> {
    /// Appends `child`, or the content node if `child` is a composite. Returns the inserted node.
    pub fn add(&self, doc: &mut Document, child: impl Into<Child>) -> Result<NodeId, Error> {
        doc.append(self.id(), child)
    }

    pub fn insert_at(
        &self,
        doc: &mut Document,
        index: usize,
        child: impl Into<Child>,
    ) -> Result<NodeId, Error> {
        doc.insert_at(self.id(), index, child)
    }

    pub fn move_to(
        &self,
        doc: &mut Document,
        child: impl Into<Child>,
        new_index: usize,
    ) -> Result<(), Error> {
        doc.move_to(self.id(), child, new_index)
    }

    /// Returns `false` (and logs a warning) if `child` is not a child of this element.
    pub fn remove_child(&self, doc: &mut Document, child: impl Into<Child>) -> Result<bool, Error> {
        doc.remove_child(self.id(), child)
    }

    pub fn clear(&self, doc: &mut Document) -> Result<usize, Error> {
        doc.clear(self.id())
    }

    /// Appends a composite's root rather than its content.
    pub fn attach(&self, doc: &mut Document, child: impl Into<Child>) -> Result<NodeId, Error> {
        doc.attach(self.id(), child)
    }

    pub fn children<'d>(&self, doc: &'d Document) -> Result<&'d [NodeId], Error> {
        doc.children(self.id())
    }

    pub fn child_count(&self, doc: &Document) -> Result<usize, Error> {
        doc.child_count(self.id())
    }

    pub fn index_of(&self, doc: &Document, child: impl Into<Child>) -> Result<Option<usize>, Error> {
        doc.index_of(self.id(), child)
    }
}
