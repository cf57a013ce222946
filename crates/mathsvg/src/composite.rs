//! Components made of several elements.
//!
//! A composite has a root, which is what gets attached to a host or a parent, and a content node
//! somewhere below the root, which is where children go. Passing a composite where a child is
//! expected inserts its content node:
//!
//! ```rust
//! use mathsvg::{Composite, Document, Fenced, tags::{Mi, Mrow}};
//!
//! let mut doc = Document::default();
//! let row = Mrow::new(&mut doc);
//! let parens = Fenced::parens(&mut doc)?;
//! let x = Mi::new(&mut doc, "x");
//! parens.add(&mut doc, &x)?;
//!
//! // The outer row receives the inner row of the fence, not the fence itself.
//! row.add(&mut doc, &parens)?;
//! assert_eq!(row.children(&doc)?, [parens.content()]);
//! # Ok::<(), mathsvg::Error>(())
//! ```
use surface::NodeId;

use crate::attribute::{Length, Width};
use crate::document::Document;
use crate::element::{Child, Element};
use crate::error::Error;
use crate::options::{ForeignObjectOptions, MathOptions, MoOptions, SvgOptions, TableOptions};
use crate::tags::{ForeignObject, G, Math, Mo, Mrow, Mtable, Mtd, Mtext, Mtr, Svg};
use crate::text::TextContent;

pub trait Composite {
    /// The node to attach to a host or parent.
    fn root(&self) -> NodeId;

    /// The node that receives children.
    fn content(&self) -> NodeId;

    fn as_child(&self) -> Child {
        Child::Composite {
            root: self.root(),
            content: self.content(),
        }
    }

    /// Appends `child` to the content node.
    fn add(&self, doc: &mut Document, child: impl Into<Child>) -> Result<NodeId, Error>
    where
        Self: Sized,
    {
        doc.append(self.content(), child)
    }

    /// Appends the root to `parent`.
    fn attach_to(&self, doc: &mut Document, parent: NodeId) -> Result<NodeId, Error> {
        doc.attach(parent, self.as_child())
    }

    /// Mounts the root on the host.
    fn mount(&self, doc: &mut Document) -> Result<NodeId, Error> {
        doc.mount(self.as_child())
    }

    fn to_markup(&self, doc: &Document) -> Result<String, Error> {
        doc.to_markup(self.root())
    }
}

macro_rules! composite_child {
    ($($ty:ty),*) => {$(
        impl From<&$ty> for Child {
            #[inline]
            fn from(composite: &$ty) -> Self {
                composite.as_child()
            }
        }
    )*};
}

composite_child!(Fenced, MathBlock, NumberedEquation, Canvas, EmbeddedMath);

/// A row with stretchy fences around an inner row:
/// `<mrow><mo>(</mo><mrow>…</mrow><mo>)</mo></mrow>`.
#[derive(Debug)]
pub struct Fenced {
    row: Element<Mrow>,
    open: Element<Mo>,
    inner: Element<Mrow>,
    close: Element<Mo>,
}

impl Fenced {
    pub fn new(doc: &mut Document, open: &str, close: &str) -> Result<Self, Error> {
        let row = Mrow::new(doc);
        let open = Mo::with(doc, open, &(MoOptions::fence(), MoOptions::prefix()));
        let inner = Mrow::new(doc);
        let close = Mo::with(doc, close, &(MoOptions::fence(), MoOptions::postfix()));
        row.add(doc, &open)?;
        row.add(doc, &inner)?;
        row.add(doc, &close)?;
        Ok(Fenced {
            row,
            open,
            inner,
            close,
        })
    }

    pub fn parens(doc: &mut Document) -> Result<Self, Error> {
        Self::new(doc, "(", ")")
    }

    pub fn brackets(doc: &mut Document) -> Result<Self, Error> {
        Self::new(doc, "[", "]")
    }

    pub fn braces(doc: &mut Document) -> Result<Self, Error> {
        Self::new(doc, "{", "}")
    }

    /// Vertical bars, as for an absolute value.
    pub fn abs(doc: &mut Document) -> Result<Self, Error> {
        Self::new(doc, "|", "|")
    }

    pub fn open(&self) -> &Element<Mo> {
        &self.open
    }

    pub fn close(&self) -> &Element<Mo> {
        &self.close
    }
}

impl Composite for Fenced {
    fn root(&self) -> NodeId {
        self.row.id()
    }

    fn content(&self) -> NodeId {
        self.inner.id()
    }
}

/// A `<math>` element with a row for its content.
#[derive(Debug)]
pub struct MathBlock {
    math: Element<Math>,
    row: Element<Mrow>,
}

impl MathBlock {
    pub fn with(doc: &mut Document, options: &MathOptions) -> Result<Self, Error> {
        let math = Math::with(doc, options);
        let row = Mrow::new(doc);
        math.add(doc, &row)?;
        Ok(MathBlock { math, row })
    }

    /// Display math.
    pub fn block(doc: &mut Document) -> Result<Self, Error> {
        Self::with(doc, &MathOptions::block())
    }

    pub fn inline(doc: &mut Document) -> Result<Self, Error> {
        Self::with(doc, &MathOptions::default())
    }

    pub fn math(&self) -> &Element<Math> {
        &self.math
    }
}

impl Composite for MathBlock {
    fn root(&self) -> NodeId {
        self.math.id()
    }

    fn content(&self) -> NodeId {
        self.row.id()
    }
}

/// A full-width table with one row of three cells: an empty spacer, the equation and a label
/// such as `(1)`.
#[derive(Debug)]
pub struct NumberedEquation {
    table: Element<Mtable>,
    cell: Element<Mtd>,
    label: Element<Mtext>,
}

fn label_text(number: impl Into<TextContent>) -> String {
    format!("({})", number.into().as_str())
}

impl NumberedEquation {
    pub fn new(doc: &mut Document, number: impl Into<TextContent>) -> Result<Self, Error> {
        let table = Mtable::with(
            doc,
            &TableOptions {
                width: Some(Width(Length::percent(100.0))),
                ..Default::default()
            },
        );
        let row = Mtr::new(doc);
        let spacer = Mtd::new(doc);
        let cell = Mtd::new(doc);
        let label_cell = Mtd::new(doc);
        let label = Mtext::new(doc, label_text(number));
        table.add(doc, &row)?;
        row.add(doc, &spacer)?;
        row.add(doc, &cell)?;
        row.add(doc, &label_cell)?;
        label_cell.add(doc, &label)?;
        Ok(NumberedEquation { table, cell, label })
    }

    pub fn set_number(&self, doc: &mut Document, number: impl Into<TextContent>) -> Result<(), Error> {
        self.label.set_text(doc, label_text(number))?;
        Ok(())
    }

    pub fn label(&self) -> &Element<Mtext> {
        &self.label
    }
}

impl Composite for NumberedEquation {
    fn root(&self) -> NodeId {
        self.table.id()
    }

    fn content(&self) -> NodeId {
        self.cell.id()
    }
}

/// An `<svg>` viewport with a group for its content.
#[derive(Debug)]
pub struct Canvas {
    svg: Element<Svg>,
    group: Element<G>,
}

impl Canvas {
    pub fn new(doc: &mut Document, width: f64, height: f64) -> Result<Self, Error> {
        let svg = Svg::with(doc, &SvgOptions::viewport(width, height));
        let group = G::new(doc);
        svg.add(doc, &group)?;
        Ok(Canvas { svg, group })
    }

    pub fn svg(&self) -> &Element<Svg> {
        &self.svg
    }

    /// The group that receives the content; transforms set on it move everything.
    pub fn group(&self) -> &Element<G> {
        &self.group
    }
}

impl Composite for Canvas {
    fn root(&self) -> NodeId {
        self.svg.id()
    }

    fn content(&self) -> NodeId {
        self.group.id()
    }
}

/// MathML placed inside an SVG drawing through `<foreignObject>`.
#[derive(Debug)]
pub struct EmbeddedMath {
    object: Element<ForeignObject>,
    math: Element<Math>,
}

impl EmbeddedMath {
    pub fn new(doc: &mut Document, x: f64, y: f64, width: f64, height: f64) -> Result<Self, Error> {
        let object = ForeignObject::with(doc, &ForeignObjectOptions::at(x, y, width, height));
        let math = Math::new(doc);
        object.add(doc, &math)?;
        Ok(EmbeddedMath { object, math })
    }

    pub fn math(&self) -> &Element<Math> {
        &self.math
    }
}

impl Composite for EmbeddedMath {
    fn root(&self) -> NodeId {
        self.object.id()
    }

    fn content(&self) -> NodeId {
        self.math.id()
    }
}
