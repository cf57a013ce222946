use bitflags::bitflags;

use super::value::{AttrValue, Color, Length, write_number};
use super::{AppliesTo, Attribute};
use crate::tags::{
    Annotation, Math, MathTag, Menclose, Mfrac, Mi, Mn, Mo, Mover, Mpadded, Ms, Mspace, Mstyle,
    Mtable, Mtd, Mtext, Mtr, Munder, Munderover,
};

keywords! {
    /// `display` on `<math>`.
    Display("display") {
        Block => "block",
        Inline => "inline",
    }

    /// Operator fixity.
    Form("form") {
        Prefix => "prefix",
        Infix => "infix",
        Postfix => "postfix",
    }

    /// `mathvariant` on token elements.
    MathVariant("mathvariant") {
        Normal => "normal",
        Bold => "bold",
        Italic => "italic",
        BoldItalic => "bold-italic",
        DoubleStruck => "double-struck",
        Fraktur => "fraktur",
        BoldFraktur => "bold-fraktur",
        Script => "script",
        BoldScript => "bold-script",
        SansSerif => "sans-serif",
        BoldSansSerif => "bold-sans-serif",
        SansSerifItalic => "sans-serif-italic",
        SansSerifBoldItalic => "sans-serif-bold-italic",
        Monospace => "monospace",
    }

    /// Table frame style.
    Frame("frame") {
        None => "none",
        Solid => "solid",
        Dashed => "dashed",
    }

    LineStyle {
        None => "none",
        Solid => "solid",
        Dashed => "dashed",
    }

    HAlign {
        Left => "left",
        Center => "center",
        Right => "right",
    }

    VAlign {
        Top => "top",
        Bottom => "bottom",
        Center => "center",
        Baseline => "baseline",
        Axis => "axis",
    }
}

newtype_attributes! {
    /// Text alternative for the whole formula.
    AltText("alttext"): String;
    DisplayStyle("displaystyle"): bool;
    MathColor("mathcolor"): Color;
    MathBackground("mathbackground"): Color;
    MathSize("mathsize"): Length;

    Stretchy("stretchy"): bool;
    Symmetric("symmetric"): bool;
    LargeOp("largeop"): bool;
    MovableLimits("movablelimits"): bool;
    Fence("fence"): bool;
    Separator("separator"): bool;
    LSpace("lspace"): Length;
    RSpace("rspace"): Length;
    MinSize("minsize"): Length;
    MaxSize("maxsize"): Length;

    Accent("accent"): bool;
    AccentUnder("accentunder"): bool;

    Width("width"): Length;
    Height("height"): Length;
    Depth("depth"): Length;
    VOffset("voffset"): Length;

    ColumnLines("columnlines"): Vec<LineStyle>;
    RowLines("rowlines"): Vec<LineStyle>;
    ColumnAlign("columnalign"): Vec<HAlign>;
    RowAlign("rowalign"): Vec<VAlign>;
    ColumnSpacing("columnspacing"): Vec<Length>;
    RowSpacing("rowspacing"): Vec<Length>;
    ColumnSpan("columnspan"): u32;
    RowSpan("rowspan"): u32;

    /// Opening quote of `<ms>`.
    LQuote("lquote"): String;
    /// Closing quote of `<ms>`.
    RQuote("rquote"): String;
    /// Format of an `<annotation>`, e.g. `application/x-tex`.
    Encoding("encoding"): String;
}

/// `scriptlevel`: either an absolute level or a change relative to the inherited one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptLevel {
    Absolute(u8),
    Increment(i8),
}

impl Attribute for ScriptLevel {
    const NAME: &'static str = "scriptlevel";

    fn write_value(&self, out: &mut String) {
        match *self {
            ScriptLevel::Absolute(level) => out.push_str(&level.to_string()),
            ScriptLevel::Increment(delta) => {
                if delta >= 0 {
                    out.push('+');
                }
                out.push_str(&delta.to_string());
            }
        }
    }
}

/// Thickness of the fraction line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineThickness {
    /// No line at all, as in binomial coefficients.
    Zero,
    Thin,
    Medium,
    Thick,
    Length(Length),
}

impl Attribute for LineThickness {
    const NAME: &'static str = "linethickness";

    fn write_value(&self, out: &mut String) {
        match self {
            LineThickness::Zero => write_number(out, 0.0),
            LineThickness::Thin => out.push_str("thin"),
            LineThickness::Medium => out.push_str("medium"),
            LineThickness::Thick => out.push_str("thick"),
            LineThickness::Length(length) => length.write(out),
        }
    }
}

bitflags! {
    /// `notation` of `<menclose>`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Notation: u16 {
        const BOX = 1;
        const ROUNDEDBOX = 1 << 1;
        const CIRCLE = 1 << 2;
        const LEFT = 1 << 3;
        const RIGHT = 1 << 4;
        const TOP = 1 << 5;
        const BOTTOM = 1 << 6;
        const UPDIAGONALSTRIKE = 1 << 7;
        const DOWNDIAGONALSTRIKE = 1 << 8;
        const VERTICALSTRIKE = 1 << 9;
        const HORIZONTALSTRIKE = 1 << 10;
        const LONGDIV = 1 << 11;
        const ACTUARIAL = 1 << 12;
        const MADRUWB = 1 << 13;
    }
}

impl Attribute for Notation {
    const NAME: &'static str = "notation";

    fn write_value(&self, out: &mut String) {
        // The flag names are the keywords in upper case.
        for (i, (name, _)) in self.iter_names().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.extend(name.chars().map(|c| c.to_ascii_lowercase()));
        }
    }
}

impl<T: MathTag> AppliesTo<T> for DisplayStyle {}
impl<T: MathTag> AppliesTo<T> for ScriptLevel {}
impl<T: MathTag> AppliesTo<T> for MathColor {}
impl<T: MathTag> AppliesTo<T> for MathBackground {}
impl<T: MathTag> AppliesTo<T> for MathSize {}

applies_to! {
    Display => Math;
    AltText => Math;
    MathVariant => Mi, Mn, Mo, Mtext, Ms, Mstyle;
    LineThickness => Mfrac;
    Form => Mo;
    Stretchy => Mo;
    Symmetric => Mo;
    LargeOp => Mo;
    MovableLimits => Mo;
    Fence => Mo;
    Separator => Mo;
    LSpace => Mo, Mpadded;
    RSpace => Mo;
    MinSize => Mo;
    MaxSize => Mo;
    Accent => Mo, Mover, Munderover;
    AccentUnder => Munder, Munderover;
    Depth => Mspace, Mpadded;
    VOffset => Mpadded;
    Frame => Mtable;
    ColumnLines => Mtable;
    RowLines => Mtable;
    ColumnAlign => Mtable, Mtr, Mtd;
    RowAlign => Mtable, Mtr, Mtd;
    ColumnSpacing => Mtable;
    RowSpacing => Mtable;
    ColumnSpan => Mtd;
    RowSpan => Mtd;
    Notation => Menclose;
    LQuote => Ms;
    RQuote => Ms;
    Encoding => Annotation;
}

// `width` and `height` are shared with SVG, see `svg.rs`.
applies_to! {
    Width => Mspace, Mpadded, Mtable;
    Height => Mspace, Mpadded;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_level() {
        assert_eq!(ScriptLevel::Absolute(0).value(), "0");
        assert_eq!(ScriptLevel::Increment(1).value(), "+1");
        assert_eq!(ScriptLevel::Increment(-2).value(), "-2");
    }

    #[test]
    fn line_thickness() {
        assert_eq!(LineThickness::Zero.value(), "0");
        assert_eq!(LineThickness::Thick.value(), "thick");
        assert_eq!(LineThickness::Length(Length::px(2.0)).value(), "2px");
    }

    #[test]
    fn notation() {
        assert_eq!(Notation::BOX.value(), "box");
        assert_eq!(
            (Notation::UPDIAGONALSTRIKE | Notation::ROUNDEDBOX).value(),
            "roundedbox updiagonalstrike"
        );
        assert_eq!(Notation::empty().value(), "");
    }

    #[test]
    fn colors() {
        assert_eq!(MathColor(Color::Rgb(255, 0, 0)).value(), "#FF0000");
        assert_eq!(<MathBackground as Attribute>::NAME, "mathbackground");
    }
}
