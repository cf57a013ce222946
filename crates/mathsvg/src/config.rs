#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether [`Document::to_markup`](crate::Document::to_markup) pretty-prints.
///
/// Pretty-printing puts every child of a container on its own line, indented by four spaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[non_exhaustive]
pub enum PrettyPrint {
    /// Never pretty print.
    #[default]
    Never,
    /// Always pretty print.
    Always,
    /// Pretty print `<math display="block">` and `<svg>` roots only.
    Auto,
}

/// Configuration of a [`Document`](crate::Document).
///
/// # Example usage
///
/// ```rust
/// use mathsvg::{Document, MarkupConfig, PrettyPrint};
///
/// let config = MarkupConfig {
///     pretty_print: PrettyPrint::Auto,
///     xml_namespace: true,
///     ..Default::default()
/// };
/// let doc = Document::new(config);
/// assert!(doc.config().xml_namespace);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct MarkupConfig {
    /// See [`PrettyPrint`].
    pub pretty_print: PrettyPrint,
    /// If `true`, write `xmlns` on the emitted root and wherever the namespace changes.
    pub xml_namespace: bool,
    /// If `true`, `to_markup` fails on the first element whose child count does not match its
    /// tag's [`Arity`](crate::Arity).
    pub enforce_arity: bool,
}
