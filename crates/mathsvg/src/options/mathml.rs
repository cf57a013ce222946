use crate::attribute::{
    Accent, AccentUnder, AltText, ColumnAlign, ColumnLines, ColumnSpacing, ColumnSpan, Depth,
    Display, DisplayStyle, Encoding, Fence, Form, Frame, HAlign, Height, LQuote, LSpace, LargeOp,
    Length, LineStyle, LineThickness, MathBackground, MathColor, MathSize, MathVariant, MaxSize,
    MinSize, MovableLimits, Notation, RQuote, RSpace, RowAlign, RowLines, RowSpacing, RowSpan,
    ScriptLevel, Separator, Stretchy, Symmetric, VAlign, VOffset, Width,
};
use crate::tags::{
    Annotation, Math, Menclose, Mfrac, Mi, Mn, Mo, Mover, Mpadded, Ms, Mspace, Mstyle, Mtable,
    Mtd, Mtext, Mtr, Munder, Munderover,
};

tag_options! {
    /// Options for `<math>`.
    pub struct MathOptions for Math {
        pub display: Display,
        pub alt_text: AltText,
        pub display_style: DisplayStyle,
        pub math_color: MathColor,
        pub math_background: MathBackground,
        pub math_size: MathSize,
    }

    /// Options for `<mi>`, `<mn>` and `<mtext>`.
    pub struct TokenOptions for Mi, Mn, Mtext {
        pub math_variant: MathVariant,
        pub math_color: MathColor,
        pub math_size: MathSize,
    }

    /// Options for `<mo>`.
    pub struct MoOptions for Mo {
        pub form: Form,
        pub stretchy: Stretchy,
        pub symmetric: Symmetric,
        pub large_op: LargeOp,
        pub movable_limits: MovableLimits,
        pub fence: Fence,
        pub separator: Separator,
        pub accent: Accent,
        pub lspace: LSpace,
        pub rspace: RSpace,
        pub min_size: MinSize,
        pub max_size: MaxSize,
        pub math_variant: MathVariant,
    }

    /// Options for `<ms>`.
    pub struct MsOptions for Ms {
        pub lquote: LQuote,
        pub rquote: RQuote,
        pub math_variant: MathVariant,
    }

    /// Options for `<mspace>`.
    pub struct SpaceOptions for Mspace {
        pub width: Width,
        pub height: Height,
        pub depth: Depth,
    }

    /// Options for `<mfrac>`.
    pub struct FracOptions for Mfrac {
        pub line_thickness: LineThickness,
        pub display_style: DisplayStyle,
    }

    /// Options for `<munder>`.
    pub struct UnderOptions for Munder {
        pub accent_under: AccentUnder,
    }

    /// Options for `<mover>`.
    pub struct OverOptions for Mover {
        pub accent: Accent,
    }

    /// Options for `<munderover>`.
    pub struct UnderOverOptions for Munderover {
        pub accent: Accent,
        pub accent_under: AccentUnder,
    }

    /// Options for `<mtable>`.
    pub struct TableOptions for Mtable {
        pub frame: Frame,
        pub column_lines: ColumnLines,
        pub row_lines: RowLines,
        pub column_align: ColumnAlign,
        pub row_align: RowAlign,
        pub column_spacing: ColumnSpacing,
        pub row_spacing: RowSpacing,
        pub width: Width,
        pub display_style: DisplayStyle,
    }

    /// Options for `<mtr>`.
    pub struct TableRowOptions for Mtr {
        pub column_align: ColumnAlign,
        pub row_align: RowAlign,
    }

    /// Options for `<mtd>`.
    pub struct TableCellOptions for Mtd {
        pub column_span: ColumnSpan,
        pub row_span: RowSpan,
        pub column_align: ColumnAlign,
        pub row_align: RowAlign,
    }

    /// Options for `<mstyle>`.
    pub struct StyleOptions for Mstyle {
        pub display_style: DisplayStyle,
        pub script_level: ScriptLevel,
        pub math_variant: MathVariant,
        pub math_color: MathColor,
        pub math_background: MathBackground,
        pub math_size: MathSize,
    }

    /// Options for `<mpadded>`.
    pub struct PaddedOptions for Mpadded {
        pub width: Width,
        pub height: Height,
        pub depth: Depth,
        pub lspace: LSpace,
        pub voffset: VOffset,
    }

    /// Options for `<menclose>`.
    pub struct EncloseOptions for Menclose {
        pub notation: Notation,
    }

    /// Options for `<annotation>`.
    pub struct AnnotationOptions for Annotation {
        pub encoding: Encoding,
    }
}

impl MathOptions {
    /// Display math, laid out as its own block.
    pub fn block() -> Self {
        MathOptions {
            display: Some(Display::Block),
            ..Default::default()
        }
    }
}

impl MoOptions {
    fn with_form(form: Form) -> Self {
        MoOptions {
            form: Some(form),
            ..Default::default()
        }
    }

    pub fn prefix() -> Self {
        Self::with_form(Form::Prefix)
    }

    pub fn infix() -> Self {
        Self::with_form(Form::Infix)
    }

    pub fn postfix() -> Self {
        Self::with_form(Form::Postfix)
    }

    /// A stretchy fence such as a parenthesis.
    pub fn fence() -> Self {
        MoOptions {
            fence: Some(Fence(true)),
            stretchy: Some(Stretchy(true)),
            symmetric: Some(Symmetric(true)),
            ..Default::default()
        }
    }

    /// A big operator such as `∑`, with limits that move to scripts in inline math.
    pub fn large_op() -> Self {
        MoOptions {
            large_op: Some(LargeOp(true)),
            movable_limits: Some(MovableLimits(true)),
            ..Default::default()
        }
    }

    pub fn separator() -> Self {
        MoOptions {
            separator: Some(Separator(true)),
            lspace: Some(LSpace(Length::zero())),
            rspace: Some(RSpace(Length::THIN)),
            ..Default::default()
        }
    }
}

impl FracOptions {
    /// No fraction line.
    pub fn binomial() -> Self {
        FracOptions {
            line_thickness: Some(LineThickness::Zero),
            ..Default::default()
        }
    }

    pub fn display() -> Self {
        FracOptions {
            display_style: Some(DisplayStyle(true)),
            ..Default::default()
        }
    }

    pub fn text() -> Self {
        FracOptions {
            display_style: Some(DisplayStyle(false)),
            ..Default::default()
        }
    }
}

impl TableOptions {
    pub fn matrix() -> Self {
        TableOptions {
            column_align: Some(ColumnAlign(vec![HAlign::Center])),
            column_spacing: Some(ColumnSpacing(vec![Length::QUAD])),
            ..Default::default()
        }
    }

    /// Solid lines around and between all cells.
    pub fn bordered() -> Self {
        TableOptions {
            frame: Some(Frame::Solid),
            column_lines: Some(ColumnLines(vec![LineStyle::Solid])),
            row_lines: Some(RowLines(vec![LineStyle::Solid])),
            ..Default::default()
        }
    }

    /// Left-aligned value and condition columns.
    pub fn cases() -> Self {
        TableOptions {
            column_align: Some(ColumnAlign(vec![HAlign::Left, HAlign::Left])),
            column_spacing: Some(ColumnSpacing(vec![Length::QUAD])),
            ..Default::default()
        }
    }

    /// Alternating right- and left-aligned columns meeting at the alignment point.
    pub fn aligned() -> Self {
        TableOptions {
            column_align: Some(ColumnAlign(vec![HAlign::Right, HAlign::Left])),
            column_spacing: Some(ColumnSpacing(vec![Length::zero()])),
            row_align: Some(RowAlign(vec![VAlign::Baseline])),
            display_style: Some(DisplayStyle(true)),
            ..Default::default()
        }
    }
}

impl StyleOptions {
    fn with_style(display: bool, level: u8) -> Self {
        StyleOptions {
            display_style: Some(DisplayStyle(display)),
            script_level: Some(ScriptLevel::Absolute(level)),
            ..Default::default()
        }
    }

    pub fn display() -> Self {
        Self::with_style(true, 0)
    }

    pub fn text() -> Self {
        Self::with_style(false, 0)
    }

    pub fn script() -> Self {
        Self::with_style(false, 1)
    }
}

impl EncloseOptions {
    pub fn boxed() -> Self {
        EncloseOptions {
            notation: Some(Notation::BOX),
        }
    }

    /// Struck through horizontally.
    pub fn strike() -> Self {
        EncloseOptions {
            notation: Some(Notation::HORIZONTALSTRIKE),
        }
    }
}
