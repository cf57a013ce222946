//! Typed MathML and SVG element wrappers.
//!
//! # Usage
//!
//! All elements live in a [`Document`]. Elements are created through the marker types in
//! [`tags`], which return typed [`Element`] handles. Attributes are set either through the option
//! structs in [`options`] at construction time, or later with [`Element::set`], which only
//! accepts attributes that apply to the element's tag.
//!
//! Container elements manage their children with `add`, `insert_at`, `move_to`, `remove_child`
//! and `clear`. Anything implementing [`Composite`] can be passed where a child is expected; its
//! content node is inserted.
//!
//! ```rust
//! use mathsvg::{Composite, Document, Fenced, MathBlock};
//! use mathsvg::options::MoOptions;
//! use mathsvg::tags::{Mi, Mn, Mo, Msup};
//!
//! let mut doc = Document::default();
//! let math = MathBlock::block(&mut doc)?;
//! let base = Mi::new(&mut doc, "x");
//! let two = Mn::new(&mut doc, 2);
//! let square = Msup::of(&mut doc, &base, &two)?;
//! let plus = Mo::with(&mut doc, "+", &MoOptions::infix());
//! let one = Mn::new(&mut doc, 1);
//! let parens = Fenced::parens(&mut doc)?;
//! parens.add(&mut doc, &square)?;
//! parens.add(&mut doc, &plus)?;
//! parens.add(&mut doc, &one)?;
//! parens.attach_to(&mut doc, math.content())?;
//!
//! let markup = math.to_markup(&doc)?;
//! assert!(markup.starts_with(r#"<math display="block"><mrow><mrow><mo"#));
//! # Ok::<(), mathsvg::Error>(())
//! ```
//!
//! # Features
//!
//! - `serde`: With this feature, `MarkupConfig` implements serde's `Deserialize` and `Serialize`.
//!
mod arity;
pub mod attribute;
mod composite;
mod config;
mod container;
mod document;
mod element;
mod error;
pub mod options;
pub mod tags;
mod text;

use static_assertions::{assert_impl_all, assert_not_impl_any};

pub use surface::{Namespace, NodeId, NodeKind, Surface, SurfaceError};

pub use self::arity::{Arity, ArityViolation};
pub use self::composite::{Canvas, Composite, EmbeddedMath, Fenced, MathBlock, NumberedEquation};
pub use self::config::{MarkupConfig, PrettyPrint};
pub use self::document::Document;
pub use self::element::{Child, Element};
pub use self::error::Error;
pub use self::text::TextContent;

assert_impl_all!(Document: Send, Sync);
assert_impl_all!(Element<tags::Mrow>: Send, Sync);
assert_not_impl_any!(Element<tags::Mrow>: Clone, Copy);
assert_impl_all!(Child: Copy);
