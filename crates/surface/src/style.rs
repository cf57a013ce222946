//! Inline style declarations, reflected in the `style` attribute.

use crate::error::SurfaceError;
use crate::node::NodeId;
use crate::surface::Surface;

const STYLE: &str = "style";

/// Splits `prop: value; prop: value` into trimmed pairs, skipping malformed entries.
pub(crate) fn declarations(style: &str) -> impl Iterator<Item = (&str, &str)> {
    style.split(';').filter_map(|decl| {
        let (prop, value) = decl.split_once(':')?;
        let prop = prop.trim();
        if prop.is_empty() {
            return None;
        }
        Some((prop, value.trim()))
    })
}

fn is_valid_property(prop: &str) -> bool {
    !prop.is_empty() && prop.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

fn join(decls: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (prop, value) in decls {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(prop);
        out.push_str(": ");
        out.push_str(value);
        out.push(';');
    }
    out
}

impl Surface {
    /// Value of one inline style property.
    pub fn style(&self, id: NodeId, prop: &str) -> Result<Option<&str>, SurfaceError> {
        Ok(self
            .attribute(id, STYLE)?
            .and_then(|style| declarations(style).find(|(p, _)| *p == prop))
            .map(|(_, value)| value))
    }

    /// Sets one inline style property. An empty value removes the property.
    ///
    /// A value containing `;` would add declarations of its own and is rejected.
    pub fn set_style(&mut self, id: NodeId, prop: &str, value: &str) -> Result<(), SurfaceError> {
        if !is_valid_property(prop) {
            return Err(SurfaceError::InvalidName(prop.into()));
        }
        let value = value.trim();
        if value.contains(';') {
            return Err(SurfaceError::InvalidStyleValue(value.into()));
        }
        let node = self.node_mut(id)?;
        let current = node.attribute(STYLE).unwrap_or_default();
        let mut decls: Vec<(&str, &str)> = declarations(current).collect();
        match (decls.iter().position(|(p, _)| *p == prop), value.is_empty()) {
            (Some(pos), false) => decls[pos].1 = value,
            (Some(pos), true) => {
                decls.remove(pos);
            }
            (None, false) => decls.push((prop, value)),
            (None, true) => {}
        }
        let style = join(&decls);
        if style.is_empty() {
            node.remove_attribute(STYLE);
        } else {
            node.set_attribute(STYLE, style);
        }
        Ok(())
    }

    /// Returns the removed value, if the property was set.
    pub fn remove_style(&mut self, id: NodeId, prop: &str) -> Result<Option<String>, SurfaceError> {
        let old = self.style(id, prop)?.map(str::to_string);
        if old.is_some() {
            self.set_style(id, prop, "")?;
        }
        Ok(old)
    }
}
