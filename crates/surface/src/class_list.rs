//! Class list manipulation, reflected in the `class` attribute.

use crate::error::SurfaceError;
use crate::node::NodeId;
use crate::surface::Surface;

const CLASS: &str = "class";

fn check_token(class: &str) -> Result<(), SurfaceError> {
    if class.is_empty() || class.contains(char::is_whitespace) {
        Err(SurfaceError::InvalidName(class.into()))
    } else {
        Ok(())
    }
}

impl Surface {
    /// Class names of `id`, in attribute order.
    pub fn classes(&self, id: NodeId) -> Result<impl Iterator<Item = &str>, SurfaceError> {
        Ok(self
            .attribute(id, CLASS)?
            .unwrap_or_default()
            .split_whitespace())
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> Result<bool, SurfaceError> {
        Ok(self.classes(id)?.any(|c| c == class))
    }

    /// Returns `false` if the class was already present.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<bool, SurfaceError> {
        check_token(class)?;
        let node = self.node_mut(id)?;
        let current = node.attribute(CLASS).unwrap_or_default();
        if current.split_whitespace().any(|c| c == class) {
            return Ok(false);
        }
        let mut list = current.trim().to_string();
        if !list.is_empty() {
            list.push(' ');
        }
        list.push_str(class);
        node.set_attribute(CLASS, list);
        Ok(true)
    }

    /// Returns `false` if the class was not present.
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> Result<bool, SurfaceError> {
        check_token(class)?;
        let node = self.node_mut(id)?;
        let Some(current) = node.attribute(CLASS) else {
            return Ok(false);
        };
        if !current.split_whitespace().any(|c| c == class) {
            return Ok(false);
        }
        let remaining = current
            .split_whitespace()
            .filter(|&c| c != class)
            .collect::<Vec<_>>()
            .join(" ");
        if remaining.is_empty() {
            node.remove_attribute(CLASS);
        } else {
            node.set_attribute(CLASS, remaining);
        }
        Ok(true)
    }

    /// Adds the class if absent, removes it otherwise. Returns whether it is now present.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> Result<bool, SurfaceError> {
        if self.has_class(id, class)? {
            self.remove_class(id, class)?;
            Ok(false)
        } else {
            self.add_class(id, class)?;
            Ok(true)
        }
    }
}
