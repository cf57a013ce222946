use super::mathml::{Height, Width};
use super::value::{AttrValue, Length, Paint, write_number};
use super::{AppliesTo, Attribute};
use crate::tags::{
    Circle, Ellipse, ForeignObject, G, Line, Path, Polygon, Polyline, Rect, Svg, SvgGraphic, Text,
    Use,
};

keywords! {
    StrokeLinecap("stroke-linecap") {
        Butt => "butt",
        Round => "round",
        Square => "square",
    }

    StrokeLinejoin("stroke-linejoin") {
        Miter => "miter",
        Round => "round",
        Bevel => "bevel",
    }

    FillRule("fill-rule") {
        NonZero => "nonzero",
        EvenOdd => "evenodd",
    }

    TextAnchor("text-anchor") {
        Start => "start",
        Middle => "middle",
        End => "end",
    }

    DominantBaseline("dominant-baseline") {
        Auto => "auto",
        Alphabetic => "alphabetic",
        Middle => "middle",
        Central => "central",
        Hanging => "hanging",
        Mathematical => "mathematical",
    }

    AspectAlign {
        None => "none",
        XMinYMin => "xMinYMin",
        XMidYMin => "xMidYMin",
        XMaxYMin => "xMaxYMin",
        XMinYMid => "xMinYMid",
        XMidYMid => "xMidYMid",
        XMaxYMid => "xMaxYMid",
        XMinYMax => "xMinYMax",
        XMidYMax => "xMidYMax",
        XMaxYMax => "xMaxYMax",
    }

    MeetOrSlice {
        Meet => "meet",
        Slice => "slice",
    }
}

newtype_attributes! {
    X("x"): f64;
    Y("y"): f64;
    Dx("dx"): f64;
    Dy("dy"): f64;
    Cx("cx"): f64;
    Cy("cy"): f64;
    R("r"): f64;
    Rx("rx"): f64;
    Ry("ry"): f64;
    X1("x1"): f64;
    Y1("y1"): f64;
    X2("x2"): f64;
    Y2("y2"): f64;

    /// Vertices of a `<polyline>` or `<polygon>`.
    Points("points"): Vec<(f64, f64)>;

    Fill("fill"): Paint;
    Stroke("stroke"): Paint;
    StrokeWidth("stroke-width"): Length;
    StrokeDasharray("stroke-dasharray"): Vec<Length>;
    Opacity("opacity"): f64;
    FillOpacity("fill-opacity"): f64;
    StrokeOpacity("stroke-opacity"): f64;
    Transform("transform"): Vec<TransformOp>;

    FontSize("font-size"): Length;
    FontFamily("font-family"): String;
    /// Target of a `<use>`, usually `#id`.
    Href("href"): String;
}

impl AttrValue for (f64, f64) {
    fn write(&self, out: &mut String) {
        write_number(out, self.0);
        out.push(',');
        write_number(out, self.1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// A view box with its origin at `(0, 0)`.
    pub const fn sized(width: f64, height: f64) -> Self {
        ViewBox {
            min_x: 0.0,
            min_y: 0.0,
            width,
            height,
        }
    }
}

impl Attribute for ViewBox {
    const NAME: &'static str = "viewBox";

    fn write_value(&self, out: &mut String) {
        vec![self.min_x, self.min_y, self.width, self.height].write(out);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreserveAspectRatio {
    pub align: AspectAlign,
    pub meet_or_slice: Option<MeetOrSlice>,
}

impl Attribute for PreserveAspectRatio {
    const NAME: &'static str = "preserveAspectRatio";

    fn write_value(&self, out: &mut String) {
        self.align.write(out);
        if let Some(meet_or_slice) = self.meet_or_slice {
            out.push(' ');
            meet_or_slice.write(out);
        }
    }
}

/// One entry of a `transform` list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    Translate(f64, f64),
    Scale(f64, f64),
    /// Angle in degrees.
    Rotate(f64),
    SkewX(f64),
    SkewY(f64),
    Matrix([f64; 6]),
}

fn write_call(out: &mut String, name: &str, args: &[f64]) {
    out.push_str(name);
    out.push('(');
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_number(out, *arg);
    }
    out.push(')');
}

impl AttrValue for TransformOp {
    fn write(&self, out: &mut String) {
        match self {
            TransformOp::Translate(x, y) => write_call(out, "translate", &[*x, *y]),
            TransformOp::Scale(x, y) => write_call(out, "scale", &[*x, *y]),
            TransformOp::Rotate(angle) => write_call(out, "rotate", &[*angle]),
            TransformOp::SkewX(angle) => write_call(out, "skewX", &[*angle]),
            TransformOp::SkewY(angle) => write_call(out, "skewY", &[*angle]),
            TransformOp::Matrix(m) => write_call(out, "matrix", m),
        }
    }
}

impl<T: SvgGraphic> AppliesTo<T> for Fill {}
impl<T: SvgGraphic> AppliesTo<T> for Stroke {}
impl<T: SvgGraphic> AppliesTo<T> for StrokeWidth {}
impl<T: SvgGraphic> AppliesTo<T> for StrokeLinecap {}
impl<T: SvgGraphic> AppliesTo<T> for StrokeLinejoin {}
impl<T: SvgGraphic> AppliesTo<T> for StrokeDasharray {}
impl<T: SvgGraphic> AppliesTo<T> for Opacity {}
impl<T: SvgGraphic> AppliesTo<T> for FillOpacity {}
impl<T: SvgGraphic> AppliesTo<T> for StrokeOpacity {}
impl<T: SvgGraphic> AppliesTo<T> for FillRule {}
impl<T: SvgGraphic> AppliesTo<T> for Transform {}

applies_to! {
    ViewBox => Svg;
    PreserveAspectRatio => Svg;
    X => Svg, Rect, Text, Use, ForeignObject;
    Y => Svg, Rect, Text, Use, ForeignObject;
    Dx => Text;
    Dy => Text;
    Cx => Circle, Ellipse;
    Cy => Circle, Ellipse;
    R => Circle;
    Rx => Rect, Ellipse;
    Ry => Rect, Ellipse;
    X1 => Line;
    Y1 => Line;
    X2 => Line;
    Y2 => Line;
    Points => Polyline, Polygon;
    super::PathData => Path;
    TextAnchor => Svg, G, Text;
    DominantBaseline => Svg, G, Text;
    FontSize => Svg, G, Text;
    FontFamily => Svg, G, Text;
    Href => Use;
    Width => Svg, Rect, Use, ForeignObject;
    Height => Svg, Rect, Use, ForeignObject;
}
