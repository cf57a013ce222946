use std::fmt;
use std::marker::PhantomData;

use surface::{ElementInit, NodeId};

use crate::attribute::AppliesTo;
use crate::document::Document;
use crate::error::Error;
use crate::options::TagOptions;
use crate::tags::{TagSchema, TokenTag};
use crate::text::TextContent;

/// Something that can be inserted as a child: a plain node, or a composite whose content node is
/// inserted while its root stays the attachment point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Child {
    Node(NodeId),
    Composite { root: NodeId, content: NodeId },
}

impl Child {
    /// The node that `add` and `insert_at` put into the parent.
    #[inline]
    pub fn insertion_node(self) -> NodeId {
        match self {
            Child::Node(id) => id,
            Child::Composite { content, .. } => content,
        }
    }

    /// The node that `attach` and `mount` use.
    #[inline]
    pub fn attachment_node(self) -> NodeId {
        match self {
            Child::Node(id) => id,
            Child::Composite { root, .. } => root,
        }
    }
}

impl From<NodeId> for Child {
    #[inline]
    fn from(id: NodeId) -> Self {
        Child::Node(id)
    }
}

impl<T: TagSchema> From<&Element<T>> for Child {
    #[inline]
    fn from(element: &Element<T>) -> Self {
        Child::Node(element.id)
    }
}

/// Typed handle to one element of tag `T` in a [`Document`].
///
/// The handle does not borrow the document; every operation takes it explicitly. Handles are not
/// `Clone`, and [`delete`](Element::delete) consumes the handle.
pub struct Element<T> {
    id: NodeId,
    tag: PhantomData<fn() -> T>,
}

impl<T: TagSchema> fmt::Debug for Element<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> {}", T::NAME, self.id)
    }
}

impl<T: TagSchema> PartialEq for Element<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T: TagSchema> Element<T> {
    pub(crate) fn create(
        doc: &mut Document,
        text: Option<String>,
        options: &impl TagOptions<T>,
    ) -> Self {
        let init = ElementInit {
            attributes: options.attributes(),
            text,
        };
        let id = doc
            .surface_mut()
            .create_known(T::NAMESPACE, T::NAME, T::KIND, init);
        Element {
            id,
            tag: PhantomData,
        }
    }

    /// Wraps an existing node, checking that it is a `T`.
    pub fn from_id(doc: &Document, id: NodeId) -> Result<Self, Error> {
        let surface = doc.surface();
        let tag = surface.tag_name(id)?;
        if tag != T::NAME || surface.namespace(id)? != T::NAMESPACE {
            return Err(Error::TagMismatch {
                expected: T::NAME,
                found: tag.into(),
            });
        }
        Ok(Element {
            id,
            tag: PhantomData,
        })
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn tag_name(&self) -> &'static str {
        T::NAME
    }

    pub fn attribute<'d>(&self, doc: &'d Document, name: &str) -> Result<Option<&'d str>, Error> {
        Ok(doc.surface().attribute(self.id, name)?)
    }

    /// Sets an arbitrary attribute by name. Prefer [`set`](Element::set) for known attributes.
    pub fn set_attribute(
        &self,
        doc: &mut Document,
        name: &str,
        value: impl Into<String>,
    ) -> Result<&Self, Error> {
        doc.surface_mut().set_attribute(self.id, name, value)?;
        Ok(self)
    }

    pub fn remove_attribute(&self, doc: &mut Document, name: &str) -> Result<Option<String>, Error> {
        Ok(doc.surface_mut().remove_attribute(self.id, name)?)
    }

    /// Sets a typed attribute recognized on `T`.
    pub fn set<A: AppliesTo<T>>(&self, doc: &mut Document, value: A) -> Result<&Self, Error> {
        doc.surface_mut()
            .set_attribute(self.id, A::NAME, value.value())?;
        Ok(self)
    }

    /// Removes a typed attribute and returns its previous value.
    pub fn unset<A: AppliesTo<T>>(&self, doc: &mut Document) -> Result<Option<String>, Error> {
        Ok(doc.surface_mut().remove_attribute(self.id, A::NAME)?)
    }

    /// Writes every attribute set in `options`; unset fields leave existing attributes alone.
    pub fn apply(&self, doc: &mut Document, options: &impl TagOptions<T>) -> Result<&Self, Error> {
        for (name, value) in options.attributes() {
            doc.surface_mut().set_attribute(self.id, name, value)?;
        }
        Ok(self)
    }

    pub fn set_id(&self, doc: &mut Document, id: &str) -> Result<&Self, Error> {
        self.set_attribute(doc, "id", id)
    }

    pub fn add_class(&self, doc: &mut Document, class: &str) -> Result<&Self, Error> {
        doc.surface_mut().add_class(self.id, class)?;
        Ok(self)
    }

    pub fn remove_class(&self, doc: &mut Document, class: &str) -> Result<&Self, Error> {
        doc.surface_mut().remove_class(self.id, class)?;
        Ok(self)
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&self, doc: &mut Document, class: &str) -> Result<bool, Error> {
        Ok(doc.surface_mut().toggle_class(self.id, class)?)
    }

    pub fn has_class(&self, doc: &Document, class: &str) -> Result<bool, Error> {
        Ok(doc.surface().has_class(self.id, class)?)
    }

    pub fn style<'d>(&self, doc: &'d Document, prop: &str) -> Result<Option<&'d str>, Error> {
        Ok(doc.surface().style(self.id, prop)?)
    }

    pub fn set_style(&self, doc: &mut Document, prop: &str, value: &str) -> Result<&Self, Error> {
        doc.surface_mut().set_style(self.id, prop, value)?;
        Ok(self)
    }

    pub fn remove_style(&self, doc: &mut Document, prop: &str) -> Result<Option<String>, Error> {
        Ok(doc.surface_mut().remove_style(self.id, prop)?)
    }

    pub fn hide(&self, doc: &mut Document) -> Result<&Self, Error> {
        self.set_style(doc, "display", "none")
    }

    /// Undoes [`hide`](Element::hide).
    pub fn show(&self, doc: &mut Document) -> Result<&Self, Error> {
        doc.surface_mut().remove_style(self.id, "display")?;
        Ok(self)
    }

    pub fn is_visible(&self, doc: &Document) -> bool {
        doc.surface().is_visible(self.id)
    }

    pub fn parent(&self, doc: &Document) -> Result<Option<NodeId>, Error> {
        doc.parent(self.id)
    }

    /// Removes the element from its parent (or from the host), keeping it alive.
    pub fn detach(&self, doc: &mut Document) -> Result<&Self, Error> {
        doc.surface_mut().detach(self.id)?;
        Ok(self)
    }

    /// Attaches the element to the host as a root.
    pub fn mount(&self, doc: &mut Document) -> Result<&Self, Error> {
        doc.mount(self.id)?;
        Ok(self)
    }

    /// Deletes the element and its subtree. Returns the number of deleted nodes.
    pub fn delete(self, doc: &mut Document) -> Result<usize, Error> {
        doc.delete(self.id)
    }

    pub fn to_markup(&self, doc: &Document) -> Result<String, Error> {
        doc.to_markup(self.id)
    }
}

impl<T: TokenTag> Element<T> {
    pub fn text<'d>(&self, doc: &'d Document) -> Result<&'d str, Error> {
        Ok(doc.surface().text(self.id)?)
    }

    pub fn set_text(&self, doc: &mut Document, text: impl Into<TextContent>) -> Result<&Self, Error> {
        doc.surface_mut()
            .set_text(self.id, text.into().into_string())?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{Form, LineThickness, MathColor, Color};
    use crate::options::{FracOptions, MoOptions};
    use crate::tags::{Mfrac, Mi, Mn, Mo, Mrow};

    #[test]
    fn typed_setters_chain() {
        let mut doc = Document::default();
        let op = Mo::new(&mut doc, "+");
        op.set(&mut doc, Form::Infix)
            .unwrap()
            .set(&mut doc, MathColor(Color::Rgb(0, 0, 255)))
            .unwrap();
        assert_eq!(op.attribute(&doc, "form").unwrap(), Some("infix"));
        assert_eq!(op.attribute(&doc, "mathcolor").unwrap(), Some("#0000FF"));
        assert_eq!(op.unset::<Form>(&mut doc).unwrap().as_deref(), Some("infix"));
        assert_eq!(op.attribute(&doc, "form").unwrap(), None);
    }

    #[test]
    fn options_at_construction_and_later() {
        let mut doc = Document::default();
        let op = Mo::with(&mut doc, "(", &MoOptions::prefix());
        assert_eq!(op.attribute(&doc, "form").unwrap(), Some("prefix"));

        let frac = Mfrac::with(&mut doc, &FracOptions::default());
        assert_eq!(frac.attribute(&doc, "linethickness").unwrap(), None);
        frac.apply(&mut doc, &FracOptions::binomial()).unwrap();
        assert_eq!(frac.attribute(&doc, "linethickness").unwrap(), Some("0"));
        frac.set(&mut doc, LineThickness::Thick).unwrap();
        assert_eq!(frac.attribute(&doc, "linethickness").unwrap(), Some("thick"));
    }

    #[test]
    fn text_shorthand() {
        let mut doc = Document::default();
        let n = Mn::new(&mut doc, 3.5);
        assert_eq!(n.text(&doc).unwrap(), "3.5");
        n.set_text(&mut doc, 12).unwrap();
        assert_eq!(n.text(&doc).unwrap(), "12");
    }

    #[test]
    fn from_id_checks_the_tag() {
        let mut doc = Document::default();
        let x = Mi::new(&mut doc, "x");
        assert!(Element::<Mi>::from_id(&doc, x.id()).is_ok());
        assert_eq!(
            Element::<Mrow>::from_id(&doc, x.id()),
            Err(Error::TagMismatch {
                expected: "mrow",
                found: "mi".into()
            })
        );
    }

    #[test]
    fn classes_and_styles() {
        let mut doc = Document::default();
        let x = Mi::new(&mut doc, "x");
        x.add_class(&mut doc, "var")
            .unwrap()
            .add_class(&mut doc, "bound")
            .unwrap();
        assert!(x.has_class(&doc, "bound").unwrap());
        assert!(!x.toggle_class(&mut doc, "var").unwrap());
        assert_eq!(x.attribute(&doc, "class").unwrap(), Some("bound"));

        x.set_style(&mut doc, "color", "red").unwrap();
        assert_eq!(x.style(&doc, "color").unwrap(), Some("red"));
        assert_eq!(x.remove_style(&mut doc, "color").unwrap().as_deref(), Some("red"));
        assert_eq!(x.attribute(&doc, "style").unwrap(), None);
    }

    #[test]
    fn hide_and_show() {
        let mut doc = Document::default();
        let row = Mrow::new(&mut doc);
        let x = Mi::new(&mut doc, "x");
        row.add(&mut doc, &x).unwrap();
        assert!(!x.is_visible(&doc));
        row.mount(&mut doc).unwrap();
        assert!(x.is_visible(&doc));
        row.hide(&mut doc).unwrap();
        assert!(!x.is_visible(&doc));
        row.show(&mut doc).unwrap();
        assert!(x.is_visible(&doc));
        x.detach(&mut doc).unwrap();
        assert!(!x.is_visible(&doc));
    }

    #[test]
    fn style_value_cannot_smuggle_declarations() {
        let mut doc = Document::default();
        let x = Mi::new(&mut doc, "x");
        x.mount(&mut doc).unwrap();
        let err = x.set_style(&mut doc, "color", "red; display: none").unwrap_err();
        assert!(matches!(
            err,
            Error::Surface(surface::SurfaceError::InvalidStyleValue(_))
        ));
        assert_eq!(x.style(&doc, "display").unwrap(), None);
        assert!(x.is_visible(&doc));
    }

    #[test]
    fn delete_is_terminal() {
        let mut doc = Document::default();
        let row = Mrow::new(&mut doc);
        let x = Mi::new(&mut doc, "x");
        row.add(&mut doc, &x).unwrap();
        let x_id = x.id();
        assert_eq!(row.delete(&mut doc).unwrap(), 2);
        assert!(matches!(
            doc.surface().text(x_id),
            Err(surface::SurfaceError::Deleted(_))
        ));
    }
}
