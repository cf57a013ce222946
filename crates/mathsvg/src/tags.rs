//! One marker type per supported tag.
//!
//! A marker carries the static description of its tag through [`TagSchema`] and hosts the
//! constructors returning [`Element`]s of that tag:
//!
//! ```rust
//! use mathsvg::{Document, tags::{Mfrac, Mi, Mn}};
//!
//! let mut doc = Document::default();
//! let one = Mn::new(&mut doc, 1);
//! let x = Mi::new(&mut doc, "x");
//! let frac = Mfrac::of(&mut doc, &one, &x)?;
//! assert_eq!(frac.to_markup(&doc)?, "<mfrac><mn>1</mn><mi>x</mi></mfrac>");
//! # Ok::<(), mathsvg::Error>(())
//! ```
use phf::phf_map;
use surface::{Namespace, NodeKind};

use crate::arity::Arity;
use crate::document::Document;
use crate::element::{Child, Element};
use crate::error::Error;
use crate::options::{
    AnnotationOptions, CircleOptions, EllipseOptions, EncloseOptions, FontOptions,
    ForeignObjectOptions, FracOptions, LineOptions, MathOptions, MoOptions, MsOptions,
    NoOptions, OverOptions, PaddedOptions, PathOptions, PointsOptions, RectOptions,
    SpaceOptions, StyleOptions, SvgOptions, TableCellOptions, TableOptions, TableRowOptions,
    TagOptions, TextOptions, TokenOptions, UnderOptions, UnderOverOptions, UseOptions,
};
use crate::text::TextContent;

/// Static description of a tag.
pub trait TagSchema: Sized + 'static {
    const NAME: &'static str;
    const NAMESPACE: Namespace;
    const KIND: NodeKind;
    const ARITY: Arity;
    /// The options struct taken by the tag's `with` constructor.
    type Options: TagOptions<Self> + Default;
}

/// Tags that hold child elements.
pub trait ContainerTag: TagSchema {}
/// Tags that hold text.
pub trait TokenTag: TagSchema {}
pub trait MathTag: TagSchema {}
pub trait SvgTag: TagSchema {}
/// SVG elements that take presentation attributes such as `fill` and `transform`.
pub trait SvgGraphic: SvgTag {}

/// Runtime counterpart of [`TagSchema`], used for lookups by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    pub name: &'static str,
    pub namespace: Namespace,
    pub kind: NodeKind,
    pub arity: Arity,
}

macro_rules! tags {
    ($(
        $(#[$meta:meta])*
        $ty:ident($name:tt, $ns:ident, $kind:ident, $ctor:ident): $opts:ty, $arity:expr;
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $ty;

            impl TagSchema for $ty {
                const NAME: &'static str = $name;
                const NAMESPACE: Namespace = Namespace::$ns;
                const KIND: NodeKind = NodeKind::$kind;
                const ARITY: Arity = $arity;
                type Options = $opts;
            }

            tags!(@kind $kind $ty);
            tags!(@ns $ns $ty);
            tags!(@ctor $ctor $ty);
        )*

        static TAGS: phf::Map<&'static str, TagInfo> = phf_map! {
            $(
                $name => TagInfo {
                    name: $name,
                    namespace: Namespace::$ns,
                    kind: NodeKind::$kind,
                    arity: $arity,
                },
            )*
        };
    };
    (@kind Container $ty:ident) => {
        impl ContainerTag for $ty {}
    };
    (@kind Token $ty:ident) => {
        impl TokenTag for $ty {}
    };
    (@ns MathML $ty:ident) => {
        impl MathTag for $ty {}
    };
    (@ns Svg $ty:ident) => {
        impl SvgTag for $ty {}
    };
    (@ctor text $ty:ident) => {
        impl $ty {
            pub fn new(doc: &mut Document, text: impl Into<TextContent>) -> Element<$ty> {
                Self::with(doc, text, &<$ty as TagSchema>::Options::default())
            }

            pub fn with(
                doc: &mut Document,
                text: impl Into<TextContent>,
                options: &impl TagOptions<$ty>,
            ) -> Element<$ty> {
                Element::create(doc, Some(text.into().into_string()), options)
            }
        }
    };
    (@ctor plain $ty:ident) => {
        impl $ty {
            pub fn new(doc: &mut Document) -> Element<$ty> {
                Self::with(doc, &<$ty as TagSchema>::Options::default())
            }

            pub fn with(doc: &mut Document, options: &impl TagOptions<$ty>) -> Element<$ty> {
                Element::create(doc, None, options)
            }
        }
    };
}

tags! {
    /// `<math>`
    Math("math", MathML, Container, plain): MathOptions, Arity::Any;
    /// `<mrow>`
    Mrow("mrow", MathML, Container, plain): NoOptions, Arity::Any;
    /// `<mi>` identifier
    Mi("mi", MathML, Token, text): TokenOptions, Arity::Any;
    /// `<mn>` number
    Mn("mn", MathML, Token, text): TokenOptions, Arity::Any;
    /// `<mo>` operator
    Mo("mo", MathML, Token, text): MoOptions, Arity::Any;
    /// `<mtext>`
    Mtext("mtext", MathML, Token, text): TokenOptions, Arity::Any;
    /// `<ms>` string literal
    Ms("ms", MathML, Token, text): MsOptions, Arity::Any;
    /// `<mspace>`
    Mspace("mspace", MathML, Token, plain): SpaceOptions, Arity::Any;
    /// `<mfrac>`: numerator, denominator.
    Mfrac("mfrac", MathML, Container, plain): FracOptions, Arity::Exactly(2);
    /// `<msqrt>`
    Msqrt("msqrt", MathML, Container, plain): NoOptions, Arity::Any;
    /// `<mroot>`: base, index.
    Mroot("mroot", MathML, Container, plain): NoOptions, Arity::Exactly(2);
    /// `<msub>`: base, subscript.
    Msub("msub", MathML, Container, plain): NoOptions, Arity::Exactly(2);
    /// `<msup>`: base, superscript.
    Msup("msup", MathML, Container, plain): NoOptions, Arity::Exactly(2);
    /// `<msubsup>`: base, subscript, superscript.
    Msubsup("msubsup", MathML, Container, plain): NoOptions, Arity::Exactly(3);
    /// `<munder>`: base, underscript.
    Munder("munder", MathML, Container, plain): UnderOptions, Arity::Exactly(2);
    /// `<mover>`: base, overscript.
    Mover("mover", MathML, Container, plain): OverOptions, Arity::Exactly(2);
    /// `<munderover>`: base, underscript, overscript.
    Munderover("munderover", MathML, Container, plain): UnderOverOptions, Arity::Exactly(3);
    /// `<mmultiscripts>`: base followed by script pairs.
    Mmultiscripts("mmultiscripts", MathML, Container, plain): NoOptions, Arity::AtLeast(1);
    /// `<mprescripts/>` separator inside `<mmultiscripts>`.
    Mprescripts("mprescripts", MathML, Token, plain): NoOptions, Arity::Any;
    /// `<mtable>`
    Mtable("mtable", MathML, Container, plain): TableOptions, Arity::Any;
    /// `<mtr>`
    Mtr("mtr", MathML, Container, plain): TableRowOptions, Arity::Any;
    /// `<mtd>`
    Mtd("mtd", MathML, Container, plain): TableCellOptions, Arity::Any;
    /// `<mstyle>`
    Mstyle("mstyle", MathML, Container, plain): StyleOptions, Arity::Any;
    /// `<mpadded>`
    Mpadded("mpadded", MathML, Container, plain): PaddedOptions, Arity::Any;
    /// `<mphantom>`
    Mphantom("mphantom", MathML, Container, plain): NoOptions, Arity::Any;
    /// `<menclose>`
    Menclose("menclose", MathML, Container, plain): EncloseOptions, Arity::Any;
    /// `<merror>`
    Merror("merror", MathML, Container, plain): NoOptions, Arity::Any;
    /// `<semantics>`: presentation followed by annotations.
    Semantics("semantics", MathML, Container, plain): NoOptions, Arity::AtLeast(1);
    /// `<annotation>`
    Annotation("annotation", MathML, Token, text): AnnotationOptions, Arity::Any;

    /// `<svg>`
    Svg("svg", Svg, Container, plain): SvgOptions, Arity::Any;
    /// `<g>`
    G("g", Svg, Container, plain): FontOptions, Arity::Any;
    /// `<defs>`: nothing inside is rendered.
    Defs("defs", Svg, Container, plain): NoOptions, Arity::Any;
    /// `<rect>`
    Rect("rect", Svg, Container, plain): RectOptions, Arity::Any;
    /// `<circle>`
    Circle("circle", Svg, Container, plain): CircleOptions, Arity::Any;
    /// `<ellipse>`
    Ellipse("ellipse", Svg, Container, plain): EllipseOptions, Arity::Any;
    /// `<line>`
    Line("line", Svg, Container, plain): LineOptions, Arity::Any;
    /// `<polyline>`
    Polyline("polyline", Svg, Container, plain): PointsOptions, Arity::Any;
    /// `<polygon>`
    Polygon("polygon", Svg, Container, plain): PointsOptions, Arity::Any;
    /// `<path>`
    Path("path", Svg, Container, plain): PathOptions, Arity::Any;
    /// `<text>`
    Text("text", Svg, Token, text): TextOptions, Arity::Any;
    /// `<title>`: accessible name of the parent.
    Title("title", Svg, Token, text): NoOptions, Arity::Any;
    /// `<use>`
    Use("use", Svg, Container, plain): UseOptions, Arity::Any;
    /// `<foreignObject>`: hosts markup from another namespace, usually `<math>`.
    ForeignObject("foreignObject", Svg, Container, plain): ForeignObjectOptions, Arity::Any;
}

impl SvgGraphic for Svg {}
impl SvgGraphic for G {}
impl SvgGraphic for Rect {}
impl SvgGraphic for Circle {}
impl SvgGraphic for Ellipse {}
impl SvgGraphic for Line {}
impl SvgGraphic for Polyline {}
impl SvgGraphic for Polygon {}
impl SvgGraphic for Path {}
impl SvgGraphic for Text {}
impl SvgGraphic for Use {}

/// Looks up a supported tag by its markup name.
#[inline]
pub fn lookup_tag(name: &str) -> Option<&'static TagInfo> {
    TAGS.get(name)
}

/// Names of all supported tags, in no particular order.
pub fn tag_names() -> impl Iterator<Item = &'static str> {
    TAGS.keys().copied()
}

fn build<T: ContainerTag, const N: usize>(
    doc: &mut Document,
    children: [Child; N],
) -> Result<Element<T>, Error> {
    let element = Element::<T>::create(doc, None, &NoOptions);
    for child in children {
        doc.append(element.id(), child)?;
    }
    Ok(element)
}

impl Mrow {
    /// A row holding `children` in order.
    pub fn of<C: Into<Child>>(
        doc: &mut Document,
        children: impl IntoIterator<Item = C>,
    ) -> Result<Element<Mrow>, Error> {
        let row = Mrow::new(doc);
        for child in children {
            doc.append(row.id(), child)?;
        }
        Ok(row)
    }
}

impl Mfrac {
    pub fn of(
        doc: &mut Document,
        numerator: impl Into<Child>,
        denominator: impl Into<Child>,
    ) -> Result<Element<Mfrac>, Error> {
        build(doc, [numerator.into(), denominator.into()])
    }
}

impl Msqrt {
    pub fn of(doc: &mut Document, radicand: impl Into<Child>) -> Result<Element<Msqrt>, Error> {
        build(doc, [radicand.into()])
    }
}

impl Mroot {
    pub fn of(
        doc: &mut Document,
        base: impl Into<Child>,
        index: impl Into<Child>,
    ) -> Result<Element<Mroot>, Error> {
        build(doc, [base.into(), index.into()])
    }
}

impl Msub {
    pub fn of(
        doc: &mut Document,
        base: impl Into<Child>,
        subscript: impl Into<Child>,
    ) -> Result<Element<Msub>, Error> {
        build(doc, [base.into(), subscript.into()])
    }
}

impl Msup {
    pub fn of(
        doc: &mut Document,
        base: impl Into<Child>,
        superscript: impl Into<Child>,
    ) -> Result<Element<Msup>, Error> {
        build(doc, [base.into(), superscript.into()])
    }
}

impl Msubsup {
    pub fn of(
        doc: &mut Document,
        base: impl Into<Child>,
        subscript: impl Into<Child>,
        superscript: impl Into<Child>,
    ) -> Result<Element<Msubsup>, Error> {
        build(doc, [base.into(), subscript.into(), superscript.into()])
    }
}

impl Munder {
    pub fn of(
        doc: &mut Document,
        base: impl Into<Child>,
        underscript: impl Into<Child>,
    ) -> Result<Element<Munder>, Error> {
        build(doc, [base.into(), underscript.into()])
    }
}

impl Mover {
    pub fn of(
        doc: &mut Document,
        base: impl Into<Child>,
        overscript: impl Into<Child>,
    ) -> Result<Element<Mover>, Error> {
        build(doc, [base.into(), overscript.into()])
    }
}

impl Munderover {
    pub fn of(
        doc: &mut Document,
        base: impl Into<Child>,
        underscript: impl Into<Child>,
        overscript: impl Into<Child>,
    ) -> Result<Element<Munderover>, Error> {
        build(doc, [base.into(), underscript.into(), overscript.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_matches_markers() {
        assert_eq!(lookup_tag("mfrac").map(|t| t.arity), Some(Mfrac::ARITY));
        assert_eq!(lookup_tag("mi").map(|t| t.kind), Some(NodeKind::Token));
        assert_eq!(
            lookup_tag("foreignObject").map(|t| t.namespace),
            Some(Namespace::Svg)
        );
        assert_eq!(lookup_tag("foreignobject"), None);
        assert_eq!(lookup_tag("div"), None);
        assert_eq!(tag_names().count(), 43);
    }

    #[test]
    fn marker_constants() {
        assert_eq!(Munderover::NAME, "munderover");
        assert_eq!(Munderover::ARITY, Arity::Exactly(3));
        assert_eq!(Text::NAMESPACE, Namespace::Svg);
        assert_eq!(Mspace::KIND, NodeKind::Token);
    }
}
