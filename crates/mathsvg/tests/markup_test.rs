use insta::assert_snapshot;
use mathsvg::attribute::{
    Color, Length, MathVariant, Notation, Paint, PathData, StrokeLinecap, StrokeWidth, Transform,
    TransformOp, Width,
};
use mathsvg::options::{
    CircleOptions, EncloseOptions, LineOptions, PathOptions, Presentation, RectOptions,
    SpaceOptions, TableOptions, TokenOptions,
};
use mathsvg::tags::{
    Circle, Defs, Line, Math, Menclose, Mi, Mn, Mo, Mspace, Mtable, Mtd, Mtr, Path, Rect, Svg,
    Title,
};
use mathsvg::{Canvas, Composite, Document, MarkupConfig, MathBlock, PrettyPrint};

#[test]
fn matrix() {
    let mut doc = Document::default();
    let table = Mtable::with(&mut doc, &TableOptions::matrix());
    for row_values in [[1, 0], [0, 1]] {
        let row = Mtr::new(&mut doc);
        for value in row_values {
            let cell = Mtd::new(&mut doc);
            let n = Mn::new(&mut doc, value);
            cell.add(&mut doc, &n).unwrap();
            row.add(&mut doc, &cell).unwrap();
        }
        table.add(&mut doc, &row).unwrap();
    }
    assert_snapshot!(
        table.to_markup(&doc).unwrap(),
        @r#"<mtable columnalign="center" columnspacing="1em"><mtr><mtd><mn>1</mn></mtd><mtd><mn>0</mn></mtd></mtr><mtr><mtd><mn>0</mn></mtd><mtd><mn>1</mn></mtd></mtr></mtable>"#
    );
}

#[test]
fn tokens_and_space() {
    let mut doc = Document::default();
    let math = Math::new(&mut doc);
    let bold = TokenOptions {
        math_variant: Some(MathVariant::Bold),
        ..Default::default()
    };
    let v = Mi::with(&mut doc, "v", &bold);
    let space = Mspace::with(
        &mut doc,
        &SpaceOptions {
            width: Some(Width(Length::THIN)),
            ..Default::default()
        },
    );
    let lt = Mo::new(&mut doc, "<");
    let boxed = Menclose::with(&mut doc, &EncloseOptions::boxed());
    let n = Mn::new(&mut doc, 0);
    boxed.add(&mut doc, &n).unwrap();
    boxed
        .set(&mut doc, Notation::BOX | Notation::HORIZONTALSTRIKE)
        .unwrap();
    for child in [v.id(), space.id(), lt.id(), boxed.id()] {
        math.add(&mut doc, child).unwrap();
    }
    assert_snapshot!(
        math.to_markup(&doc).unwrap(),
        @r#"<math><mi mathvariant="bold">v</mi><mspace width="0.1667em"/><mo>&lt;</mo><menclose notation="box horizontalstrike"><mn>0</mn></menclose></math>"#
    );
}

#[test]
fn pretty_block_with_namespace() {
    let mut doc = Document::new(MarkupConfig {
        pretty_print: PrettyPrint::Auto,
        xml_namespace: true,
        ..Default::default()
    });
    let block = MathBlock::block(&mut doc).unwrap();
    let x = Mi::new(&mut doc, "x");
    block.add(&mut doc, &x).unwrap();
    assert_snapshot!(block.to_markup(&doc).unwrap(), @r#"
    <math xmlns="http://www.w3.org/1998/Math/MathML" display="block">
        <mrow>
            <mi>x</mi>
        </mrow>
    </math>
    "#);
}

#[test]
fn drawing() {
    let mut doc = Document::new(MarkupConfig {
        pretty_print: PrettyPrint::Always,
        ..Default::default()
    });
    let canvas = Canvas::new(&mut doc, 100.0, 60.0).unwrap();
    canvas
        .group()
        .set(&mut doc, Transform(vec![TransformOp::Translate(10.0, 10.0)]))
        .unwrap();

    let frame = Rect::with(
        &mut doc,
        &(
            RectOptions::at(0.0, 0.0, 80.0, 40.0),
            Presentation::hairline(Color::BLACK),
        ),
    );
    let title = Title::new(&mut doc, "Frame");
    frame.add(&mut doc, &title).unwrap();
    let dot = Circle::with(
        &mut doc,
        &(
            CircleOptions::at(40.0, 20.0, 2.5),
            Presentation::filled(Paint::Url("accent".into())),
        ),
    );
    let rule = Line::with(
        &mut doc,
        &(
            LineOptions::between((0.0, 20.0), (80.0, 20.0)),
            Presentation::dashed(Color::named("gray"), 4.0),
        ),
    );
    rule.set(&mut doc, StrokeLinecap::Round).unwrap();
    let arrow = Path::with(
        &mut doc,
        &PathOptions {
            d: Some(PathData::new().move_to(70.0, 15.0).line_to(80.0, 20.0).line_to(70.0, 25.0)),
        },
    );
    for child in [frame.id(), dot.id(), rule.id(), arrow.id()] {
        canvas.add(&mut doc, child).unwrap();
    }

    assert_snapshot!(canvas.to_markup(&doc).unwrap(), @r##"
    <svg width="100" height="60" viewBox="0 0 100 60">
        <g transform="translate(10 10)">
            <rect x="0" y="0" width="80" height="40" fill="none" stroke="#000000" stroke-width="1">
                <title>Frame</title>
            </rect>
            <circle cx="40" cy="20" r="2.5" fill="url(#accent)" stroke="none"></circle>
            <line x1="0" y1="20" x2="80" y2="20" fill="none" stroke="gray" stroke-dasharray="4" stroke-linecap="round"></line>
            <path d="M70 15 L80 20 L70 25"></path>
        </g>
    </svg>
    "##);
}

#[test]
fn defs_are_not_visible() {
    let mut doc = Document::default();
    let svg = Svg::new(&mut doc);
    let defs = Defs::new(&mut doc);
    let shape = Circle::with(&mut doc, &CircleOptions::at(1.0, 1.0, 1.0));
    shape.set_id(&mut doc, "dot").unwrap();
    defs.add(&mut doc, &shape).unwrap();
    svg.add(&mut doc, &defs).unwrap();
    svg.mount(&mut doc).unwrap();
    assert!(svg.is_visible(&doc));
    assert!(!shape.is_visible(&doc));
    assert_eq!(doc.get_element_by_id("dot"), Some(shape.id()));
}

#[test]
fn non_finite_lengths() {
    let mut doc = Document::default();
    let space = Mspace::with(
        &mut doc,
        &SpaceOptions {
            width: Some(Width(Length::em(f64::NAN))),
            ..Default::default()
        },
    );
    assert_snapshot!(space.to_markup(&doc).unwrap(), @r#"<mspace width="0"/>"#);

    let frame = Rect::new(&mut doc);
    frame
        .set(&mut doc, StrokeWidth(Length::user(f64::INFINITY)))
        .unwrap();
    assert_snapshot!(frame.to_markup(&doc).unwrap(), @r#"<rect stroke-width="0"></rect>"#);
}
