//! Internal library for the `mathsvg` crate: an in-memory tree of MathML and SVG elements.
//!
//! The [`Surface`] plays the part a browser document plays for script code. It creates namespaced
//! elements, stores their attributes, text and children, reflects class lists and inline styles in
//! the corresponding attributes, decides whether an element would be visible, and serializes a
//! subtree to markup.
//!
//! # Example
//!
//! ```rust
//! use mathsvg_surface::{EmitOptions, Namespace, NodeKind, Surface};
//!
//! let mut surface = Surface::new();
//! let row = surface.create_element(Namespace::MathML, "mrow", NodeKind::Container)?;
//! let x = surface.create_element(Namespace::MathML, "mi", NodeKind::Token)?;
//! surface.set_text(x, "x")?;
//! surface.append_child(row, x)?;
//! surface.add_class(row, "highlight")?;
//!
//! assert_eq!(
//!     surface.emit(row, EmitOptions::default())?,
//!     "<mrow class=\"highlight\"><mi>x</mi></mrow>"
//! );
//! # Ok::<(), mathsvg_surface::SurfaceError>(())
//! ```
mod class_list;
mod emit;
mod error;
pub mod escape;
mod node;
mod style;
mod surface;
mod visibility;

use static_assertions::{assert_eq_size, assert_impl_all};

pub use self::emit::EmitOptions;
pub use self::error::SurfaceError;
pub use self::node::{ElementInit, Namespace, NodeId, NodeKind};
pub use self::surface::{Descendants, Surface, is_valid_name};

assert_eq_size!(NodeId, u32);
assert_eq_size!(Option<NodeId>, u64);
assert_impl_all!(Surface: Send, Sync);
