use crate::attribute::{
    Cx, Cy, DominantBaseline, Dx, Dy, Fill, FillOpacity, FillRule, FontFamily, FontSize, Height,
    Href, Length, Opacity, Paint, PathData, Points, PreserveAspectRatio, R, Rx, Ry, Stroke,
    StrokeDasharray, StrokeLinecap, StrokeLinejoin, StrokeOpacity, StrokeWidth, TextAnchor,
    Transform, ViewBox, Width, X, X1, X2, Y, Y1, Y2,
};
use crate::options::{TagOptions, push_attribute};
use crate::tags::{
    Circle, Ellipse, ForeignObject, G, Line, Path, Polygon, Polyline, Rect, Svg, SvgGraphic, Text,
    Use,
};

tag_options! {
    /// Options for `<svg>`.
    pub struct SvgOptions for Svg {
        pub width: Width,
        pub height: Height,
        pub view_box: ViewBox,
        pub preserve_aspect_ratio: PreserveAspectRatio,
    }

    /// Text layout inherited by descendants.
    pub struct FontOptions for Svg, G, Text {
        pub font_size: FontSize,
        pub font_family: FontFamily,
        pub text_anchor: TextAnchor,
        pub dominant_baseline: DominantBaseline,
    }

    /// Options for `<rect>`.
    pub struct RectOptions for Rect {
        pub x: X,
        pub y: Y,
        pub width: Width,
        pub height: Height,
        pub rx: Rx,
        pub ry: Ry,
    }

    /// Options for `<circle>`.
    pub struct CircleOptions for Circle {
        pub cx: Cx,
        pub cy: Cy,
        pub r: R,
    }

    /// Options for `<ellipse>`.
    pub struct EllipseOptions for Ellipse {
        pub cx: Cx,
        pub cy: Cy,
        pub rx: Rx,
        pub ry: Ry,
    }

    /// Options for `<line>`.
    pub struct LineOptions for Line {
        pub x1: X1,
        pub y1: Y1,
        pub x2: X2,
        pub y2: Y2,
    }

    /// Options for `<polyline>` and `<polygon>`.
    pub struct PointsOptions for Polyline, Polygon {
        pub points: Points,
    }

    /// Options for `<path>`.
    pub struct PathOptions for Path {
        pub d: PathData,
    }

    /// Options for `<text>`.
    pub struct TextOptions for Text {
        pub x: X,
        pub y: Y,
        pub dx: Dx,
        pub dy: Dy,
        pub text_anchor: TextAnchor,
        pub dominant_baseline: DominantBaseline,
        pub font_size: FontSize,
        pub font_family: FontFamily,
    }

    /// Options for `<use>`.
    pub struct UseOptions for Use {
        pub href: Href,
        pub x: X,
        pub y: Y,
        pub width: Width,
        pub height: Height,
    }

    /// Options for `<foreignObject>`.
    pub struct ForeignObjectOptions for ForeignObject {
        pub x: X,
        pub y: Y,
        pub width: Width,
        pub height: Height,
    }
}

impl SvgOptions {
    /// A `width` by `height` canvas whose user units are pixels.
    pub fn viewport(width: f64, height: f64) -> Self {
        SvgOptions {
            width: Some(Width(Length::user(width))),
            height: Some(Height(Length::user(height))),
            view_box: Some(ViewBox::sized(width, height)),
            ..Default::default()
        }
    }
}

impl RectOptions {
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
        RectOptions {
            x: Some(X(x)),
            y: Some(Y(y)),
            width: Some(Width(Length::user(width))),
            height: Some(Height(Length::user(height))),
            ..Default::default()
        }
    }
}

impl CircleOptions {
    pub fn at(cx: f64, cy: f64, r: f64) -> Self {
        CircleOptions {
            cx: Some(Cx(cx)),
            cy: Some(Cy(cy)),
            r: Some(R(r)),
        }
    }
}

impl LineOptions {
    pub fn between((x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> Self {
        LineOptions {
            x1: Some(X1(x1)),
            y1: Some(Y1(y1)),
            x2: Some(X2(x2)),
            y2: Some(Y2(y2)),
        }
    }
}

impl ForeignObjectOptions {
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
        ForeignObjectOptions {
            x: Some(X(x)),
            y: Some(Y(y)),
            width: Some(Width(Length::user(width))),
            height: Some(Height(Length::user(height))),
        }
    }
}

/// Presentation attributes shared by all SVG graphics. Combine with a shape's own options as a
/// tuple: `Rect::with(&mut doc, &(RectOptions::at(0.0, 0.0, 4.0, 4.0), Presentation::filled(paint)))`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Presentation {
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
    pub stroke_width: Option<StrokeWidth>,
    pub stroke_linecap: Option<StrokeLinecap>,
    pub stroke_linejoin: Option<StrokeLinejoin>,
    pub stroke_dasharray: Option<StrokeDasharray>,
    pub opacity: Option<Opacity>,
    pub fill_opacity: Option<FillOpacity>,
    pub stroke_opacity: Option<StrokeOpacity>,
    pub fill_rule: Option<FillRule>,
    pub transform: Option<Transform>,
}

impl Presentation {
    /// A thin unfilled outline.
    pub fn hairline(stroke: impl Into<Paint>) -> Self {
        Presentation {
            fill: Some(Fill(Paint::None)),
            stroke: Some(Stroke(stroke.into())),
            stroke_width: Some(StrokeWidth(Length::user(1.0))),
            ..Default::default()
        }
    }

    /// An unfilled outline drawn with dashes of length `dash`.
    pub fn dashed(stroke: impl Into<Paint>, dash: f64) -> Self {
        Presentation {
            fill: Some(Fill(Paint::None)),
            stroke: Some(Stroke(stroke.into())),
            stroke_dasharray: Some(StrokeDasharray(vec![Length::user(dash)])),
            ..Default::default()
        }
    }

    /// A filled shape without outline.
    pub fn filled(fill: impl Into<Paint>) -> Self {
        Presentation {
            fill: Some(Fill(fill.into())),
            stroke: Some(Stroke(Paint::None)),
            ..Default::default()
        }
    }
}

impl<T: SvgGraphic> TagOptions<T> for Presentation {
    fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        push_attribute(&mut attrs, &self.fill);
        push_attribute(&mut attrs, &self.stroke);
        push_attribute(&mut attrs, &self.stroke_width);
        push_attribute(&mut attrs, &self.stroke_linecap);
        push_attribute(&mut attrs, &self.stroke_linejoin);
        push_attribute(&mut attrs, &self.stroke_dasharray);
        push_attribute(&mut attrs, &self.opacity);
        push_attribute(&mut attrs, &self.fill_opacity);
        push_attribute(&mut attrs, &self.stroke_opacity);
        push_attribute(&mut attrs, &self.fill_rule);
        push_attribute(&mut attrs, &self.transform);
        attrs
    }
}
