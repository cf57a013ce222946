use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

/// Handle to one element in a [`Surface`](crate::Surface).
///
/// Ids are never reused; once the element is deleted the id stays dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(u32::try_from(index).is_ok());
        NodeId(index as u32)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// XML namespace of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Namespace {
    #[strum(serialize = "http://www.w3.org/1998/Math/MathML")]
    MathML,
    #[strum(serialize = "http://www.w3.org/2000/svg")]
    Svg,
    #[strum(serialize = "http://www.w3.org/1999/xhtml")]
    Xhtml,
}

impl Namespace {
    #[inline]
    pub fn uri(self) -> &'static str {
        <&str>::from(self)
    }

    pub fn from_uri(uri: &str) -> Option<Self> {
        Namespace::iter().find(|ns| ns.uri() == uri)
    }
}

/// Whether an element holds child elements or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NodeKind {
    /// Ordered child elements, no text.
    Container,
    /// Text content, no child elements.
    Token,
}

/// Initial attributes and text for [`Surface::create_known`](crate::Surface::create_known).
#[derive(Debug, Default, Clone)]
pub struct ElementInit {
    pub attributes: Vec<(&'static str, String)>,
    pub text: Option<String>,
}

#[derive(Debug)]
pub(crate) struct NodeData {
    pub namespace: Namespace,
    pub tag: Box<str>,
    pub kind: NodeKind,
    pub attributes: Vec<(Box<str>, String)>,
    pub text: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub mounted: bool,
}

impl NodeData {
    pub fn new(namespace: Namespace, tag: Box<str>, kind: NodeKind) -> Self {
        NodeData {
            namespace,
            tag,
            kind,
            attributes: Vec::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
            mounted: false,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| &**n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the previous value.
    pub fn set_attribute(&mut self, name: &str, value: String) -> Option<String> {
        match self.attributes.iter_mut().find(|(n, _)| &**n == name) {
            Some((_, old)) => Some(std::mem::replace(old, value)),
            None => {
                self.attributes.push((name.into(), value));
                None
            }
        }
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let pos = self.attributes.iter().position(|(n, _)| &**n == name)?;
        Some(self.attributes.remove(pos).1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_round_trip() {
        for ns in Namespace::iter() {
            assert_eq!(Namespace::from_uri(ns.uri()), Some(ns));
        }
        assert_eq!(Namespace::from_uri("urn:nothing"), None);
    }

    #[test]
    fn attribute_replaced_in_place() {
        let mut data = NodeData::new(Namespace::MathML, "mo".into(), NodeKind::Token);
        assert_eq!(data.set_attribute("form", "prefix".into()), None);
        assert_eq!(data.set_attribute("stretchy", "false".into()), None);
        assert_eq!(
            data.set_attribute("form", "postfix".into()).as_deref(),
            Some("prefix")
        );
        assert_eq!(data.attributes[0].0.as_ref(), "form");
        assert_eq!(data.attribute("form"), Some("postfix"));
        assert_eq!(data.remove_attribute("form").as_deref(), Some("postfix"));
        assert_eq!(data.remove_attribute("form"), None);
        assert_eq!(data.attributes.len(), 1);
    }

    #[test]
    fn node_id_display() {
        assert_eq!(NodeId::new(7).to_string(), "#7");
    }
}
