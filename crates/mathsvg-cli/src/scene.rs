//! TOML scene files.
//!
//! A scene describes one element tree under `[root]`, followed by an optional list of `[[edit]]`
//! steps that rearrange it with the container operations:
//!
//! ```toml
//! [root]
//! tag = "mrow"
//! ref = "row"
//! children = [
//!     { tag = "mi", text = "A", ref = "a" },
//!     { tag = "mi", text = "B" },
//! ]
//!
//! [[edit]]
//! op = "move"
//! parent = "row"
//! child = "a"
//! index = 1
//! ```
use std::fmt;
use std::ops::Range;

use mathsvg::{Document, Error, MarkupConfig, NodeId};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use toml::Spanned;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    root: SceneNode,
    #[serde(default)]
    edit: Vec<Edit>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneNode {
    tag: Spanned<String>,
    #[serde(default)]
    text: Option<Spanned<String>>,
    #[serde(default, rename = "ref")]
    name: Option<Spanned<String>>,
    #[serde(default)]
    attributes: toml::Table,
    /// Whitespace-separated class names.
    #[serde(default)]
    class: Option<String>,
    #[serde(default)]
    style: toml::Table,
    #[serde(default)]
    hidden: bool,
    #[serde(default)]
    children: Vec<SceneNode>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Edit {
    op: Spanned<Op>,
    parent: Spanned<String>,
    #[serde(default)]
    child: Option<Spanned<String>>,
    #[serde(default)]
    index: Option<usize>,
    #[serde(default)]
    node: Option<SceneNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum Op {
    Append,
    Insert,
    Move,
    Remove,
    Clear,
}

#[derive(Debug)]
pub enum SceneError {
    Parse(toml::de::Error),
    UnknownTag {
        span: Range<usize>,
    },
    DuplicateRef {
        span: Range<usize>,
        first: Range<usize>,
    },
    UnknownRef {
        span: Range<usize>,
    },
    MissingField {
        span: Range<usize>,
        field: &'static str,
    },
    UnexpectedField {
        span: Range<usize>,
        field: &'static str,
    },
    InvalidValue {
        span: Range<usize>,
        key: String,
    },
    Build {
        span: Range<usize>,
        error: Error,
    },
}

impl SceneError {
    fn span(&self) -> Range<usize> {
        match self {
            SceneError::Parse(err) => err.span().unwrap_or(0..0),
            SceneError::UnknownTag { span }
            | SceneError::DuplicateRef { span, .. }
            | SceneError::UnknownRef { span }
            | SceneError::MissingField { span, .. }
            | SceneError::UnexpectedField { span, .. }
            | SceneError::InvalidValue { span, .. }
            | SceneError::Build { span, .. } => span.clone(),
        }
    }

    fn label(&self) -> String {
        match self {
            SceneError::Parse(_) => "invalid scene".into(),
            SceneError::UnknownTag { .. } => "unsupported tag".into(),
            SceneError::DuplicateRef { .. } => "defined again here".into(),
            SceneError::UnknownRef { .. } => "no node has this ref".into(),
            SceneError::MissingField { field, .. } => format!("this step needs `{field}`"),
            SceneError::UnexpectedField { field, .. } => {
                format!("this step does not use `{field}`")
            }
            SceneError::InvalidValue { .. } => "on this element".into(),
            SceneError::Build { error, .. } => {
                if let Error::Arity(violation) = error {
                    format!("expected {}", violation.expected)
                } else {
                    "while building this".into()
                }
            }
        }
    }

    /// Convert this error into an [`ariadne::Report`] for pretty-printing.
    pub fn to_report<'name>(
        &self,
        source_name: &'name str,
        with_color: bool,
    ) -> ariadne::Report<'static, (&'name str, Range<usize>)> {
        use ariadne::{Label, Report, ReportKind};

        let span = self.span();
        let mut config = ariadne::Config::default().with_index_type(ariadne::IndexType::Byte);
        if !with_color {
            config = config.with_color(false);
        }
        let mut report = Report::build(ReportKind::Error, (source_name, span.start..span.start))
            .with_config(config)
            .with_message(self.to_string())
            .with_label(Label::new((source_name, span)).with_message(self.label()));
        if let SceneError::DuplicateRef { first, .. } = self {
            report = report
                .with_label(Label::new((source_name, first.clone())).with_message("first defined here"));
        }
        report.finish()
    }
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Parse(err) => write!(f, "{}", err.message()),
            SceneError::UnknownTag { .. } => write!(f, "unknown tag"),
            SceneError::DuplicateRef { .. } => write!(f, "duplicate ref"),
            SceneError::UnknownRef { .. } => write!(f, "unknown ref"),
            SceneError::MissingField { field, .. } => write!(f, "missing field `{field}`"),
            SceneError::UnexpectedField { field, .. } => write!(f, "unexpected field `{field}`"),
            SceneError::InvalidValue { key, .. } => {
                write!(f, "value of \"{key}\" must be a string, number, boolean or array")
            }
            SceneError::Build { error, .. } => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for SceneError {}

impl From<toml::de::Error> for SceneError {
    fn from(err: toml::de::Error) -> Self {
        SceneError::Parse(err)
    }
}

/// Parses a scene and renders it with the given markup configuration.
pub fn render(source: &str, config: MarkupConfig) -> Result<String, SceneError> {
    let scene: Scene = toml::from_str(source)?;
    scene.render(config)
}

impl Scene {
    pub fn render(self, config: MarkupConfig) -> Result<String, SceneError> {
        let enforce_arity = config.enforce_arity;
        let mut builder = Builder {
            doc: Document::new(config),
            refs: FxHashMap::default(),
            spans: FxHashMap::default(),
        };
        let root_span = self.root.tag.span();
        let root = builder.build(self.root)?;
        builder
            .doc
            .mount(root)
            .map_err(|error| SceneError::Build {
                span: root_span.clone(),
                error,
            })?;
        for edit in self.edit {
            builder.apply(edit)?;
        }
        if enforce_arity {
            let violations = builder.doc.validate(root).map_err(|error| SceneError::Build {
                span: root_span.clone(),
                error,
            })?;
            if let Some(violation) = violations.into_iter().next() {
                return Err(SceneError::Build {
                    span: builder.span_of(violation.node, &root_span),
                    error: Error::Arity(violation),
                });
            }
        }
        builder
            .doc
            .to_markup(root)
            .map_err(|error| SceneError::Build {
                span: root_span,
                error,
            })
    }
}

struct Builder {
    doc: Document,
    /// Node refs and the span of their definition.
    refs: FxHashMap<String, (NodeId, Range<usize>)>,
    /// Span of the `tag` key of every node built from the scene.
    spans: FxHashMap<NodeId, Range<usize>>,
}

impl Builder {
    fn span_of(&self, id: NodeId, fallback: &Range<usize>) -> Range<usize> {
        self.spans.get(&id).cloned().unwrap_or_else(|| fallback.clone())
    }

    fn build(&mut self, node: SceneNode) -> Result<NodeId, SceneError> {
        let span = node.tag.span();
        let at = |error: Error| SceneError::Build {
            span: span.clone(),
            error,
        };
        let id = match self.doc.create_by_name(node.tag.get_ref()) {
            Ok(id) => id,
            Err(Error::UnknownTag(_)) => return Err(SceneError::UnknownTag { span: span.clone() }),
            Err(error) => return Err(at(error)),
        };
        self.spans.insert(id, span.clone());

        if let Some(name) = node.name {
            let name_span = name.span();
            let name = name.into_inner();
            if let Some((_, first)) = self.refs.get(&name) {
                return Err(SceneError::DuplicateRef {
                    span: name_span,
                    first: first.clone(),
                });
            }
            self.refs.insert(name, (id, name_span));
        }
        if let Some(text) = node.text {
            let text_span = text.span();
            self.doc
                .surface_mut()
                .set_text(id, text.into_inner())
                .map_err(|error| SceneError::Build {
                    span: text_span,
                    error: error.into(),
                })?;
        }
        for (key, value) in &node.attributes {
            let value = attribute_value(value).ok_or_else(|| SceneError::InvalidValue {
                span: span.clone(),
                key: key.clone(),
            })?;
            self.doc
                .surface_mut()
                .set_attribute(id, key, value)
                .map_err(|error| at(error.into()))?;
        }
        if let Some(class) = &node.class {
            for class in class.split_whitespace() {
                self.doc
                    .surface_mut()
                    .add_class(id, class)
                    .map_err(|error| at(error.into()))?;
            }
        }
        for (prop, value) in &node.style {
            let value = attribute_value(value).ok_or_else(|| SceneError::InvalidValue {
                span: span.clone(),
                key: prop.clone(),
            })?;
            self.doc
                .surface_mut()
                .set_style(id, prop, &value)
                .map_err(|error| at(error.into()))?;
        }
        if node.hidden {
            self.doc
                .surface_mut()
                .set_style(id, "display", "none")
                .map_err(|error| at(error.into()))?;
        }
        for child in node.children {
            let child_span = child.tag.span();
            let child = self.build(child)?;
            self.doc
                .append(id, child)
                .map_err(|error| SceneError::Build {
                    span: child_span,
                    error,
                })?;
        }
        Ok(id)
    }

    fn resolve(&self, name: &Spanned<String>) -> Result<NodeId, SceneError> {
        match self.refs.get(name.get_ref()) {
            Some((id, _)) => Ok(*id),
            None => Err(SceneError::UnknownRef { span: name.span() }),
        }
    }

    fn apply(&mut self, edit: Edit) -> Result<(), SceneError> {
        let op = *edit.op.get_ref();
        let op_span = edit.op.span();
        let missing = |field| SceneError::MissingField {
            span: op_span.clone(),
            field,
        };
        let unexpected = |field| SceneError::UnexpectedField {
            span: op_span.clone(),
            field,
        };
        let (takes_child, takes_node, takes_index) = match op {
            Op::Append => (true, true, false),
            Op::Insert => (true, true, true),
            Op::Move => (true, false, true),
            Op::Remove => (true, false, false),
            Op::Clear => (false, false, false),
        };
        if edit.child.is_some() && !takes_child {
            return Err(unexpected("child"));
        }
        // A step inserts either an existing node or a new one, never both.
        if edit.node.is_some() && (!takes_node || edit.child.is_some()) {
            return Err(unexpected("node"));
        }
        if edit.index.is_some() && !takes_index {
            return Err(unexpected("index"));
        }
        let parent = self.resolve(&edit.parent)?;
        debug!(?op, parent = %parent, "applying edit");
        let result = match op {
            Op::Append | Op::Insert => {
                let child = match (edit.child, edit.node) {
                    (Some(name), _) => self.resolve(&name)?,
                    (None, Some(node)) => self.build(node)?,
                    (None, None) => return Err(missing("child")),
                };
                if op == Op::Append {
                    self.doc.append(parent, child).map(drop)
                } else {
                    let index = edit.index.ok_or_else(|| missing("index"))?;
                    self.doc.insert_at(parent, index, child).map(drop)
                }
            }
            Op::Move => {
                let name = edit.child.ok_or_else(|| missing("child"))?;
                let child = self.resolve(&name)?;
                let index = edit.index.ok_or_else(|| missing("index"))?;
                self.doc.move_to(parent, child, index)
            }
            Op::Remove => {
                let name = edit.child.ok_or_else(|| missing("child"))?;
                let child = self.resolve(&name)?;
                self.doc.remove_child(parent, child).map(drop)
            }
            Op::Clear => self.doc.clear(parent).map(drop),
        };
        result.map_err(|error| SceneError::Build {
            span: op_span,
            error,
        })
    }
}

fn attribute_value(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Float(f) => Some(f.to_string()),
        toml::Value::Boolean(b) => Some(b.to_string()),
        toml::Value::Array(items) => items
            .iter()
            .map(attribute_value)
            .collect::<Option<Vec<_>>>()
            .map(|parts| parts.join(" ")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use mathsvg::PrettyPrint;

    use super::*;

    fn report(source: &str, err: &SceneError) -> String {
        let mut buf = Vec::new();
        err.to_report("scene.toml", false)
            .write(("scene.toml", ariadne::Source::from(source)), &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn edit_steps() {
        let source = r#"
[root]
tag = "mrow"
ref = "row"
children = [
    { tag = "mi", text = "A", ref = "a" },
    { tag = "mi", text = "B" },
]

[[edit]]
op = "move"
parent = "row"
child = "a"
index = 1

[[edit]]
op = "insert"
parent = "row"
index = 1
node = { tag = "mi", text = "C" }

[[edit]]
op = "remove"
parent = "row"
child = "a"

[[edit]]
op = "remove"
parent = "row"
child = "a"
"#;
        let markup = render(source, MarkupConfig::default()).unwrap();
        assert_snapshot!(markup, @"<mrow><mi>B</mi><mi>C</mi></mrow>");
    }

    #[test]
    fn attributes_classes_and_styles() {
        let source = r#"
[root]
tag = "svg"
attributes = { width = 20, height = 10.5, viewBox = [0, 0, 20, 10.5] }

[[root.children]]
tag = "circle"
class = "dot  accent"
attributes = { cx = 5, cy = 5, r = 2 }
style = { fill = "red" }

[[root.children]]
tag = "text"
text = "a < b"
hidden = true
"#;
        let markup = render(source, MarkupConfig::default()).unwrap();
        assert_snapshot!(
            markup,
            @r#"<svg width="20" height="10.5" viewBox="0 0 20 10.5"><circle cx="5" cy="5" r="2" class="dot accent" style="fill: red;"></circle><text style="display: none;">a &lt; b</text></svg>"#
        );
    }

    #[test]
    fn pretty_block() {
        let source = r#"
[root]
tag = "math"
attributes = { display = "block" }
children = [{ tag = "mn", text = "1" }]
"#;
        let config = MarkupConfig {
            pretty_print: PrettyPrint::Auto,
            ..Default::default()
        };
        assert_snapshot!(render(source, config).unwrap(), @r#"
        <math display="block">
            <mn>1</mn>
        </math>
        "#);
    }

    #[test]
    fn clear_and_append_existing() {
        let source = r#"
[root]
tag = "mrow"
ref = "row"
children = [
    { tag = "mrow", ref = "inner", children = [{ tag = "mi", text = "x", ref = "x" }] },
]

[[edit]]
op = "append"
parent = "row"
child = "x"

[[edit]]
op = "clear"
parent = "inner"
"#;
        let markup = render(source, MarkupConfig::default()).unwrap();
        assert_snapshot!(markup, @"<mrow><mrow></mrow><mi>x</mi></mrow>");
    }

    #[test]
    fn unknown_tag() {
        let source = "[root]\ntag = \"blink\"\n";
        let err = render(source, MarkupConfig::default()).unwrap_err();
        assert!(matches!(err, SceneError::UnknownTag { ref span } if &source[span.clone()] == "\"blink\""));
        let output = report(source, &err);
        assert!(output.contains("unknown tag"));
        assert!(output.contains("unsupported tag"));
    }

    #[test]
    fn duplicate_ref() {
        let source = r#"
[root]
tag = "mrow"
ref = "x"
children = [{ tag = "mi", ref = "x" }]
"#;
        let err = render(source, MarkupConfig::default()).unwrap_err();
        let SceneError::DuplicateRef { span, first } = &err else {
            panic!("unexpected error: {err}");
        };
        assert!(first.start < span.start);
        let output = report(source, &err);
        assert!(output.contains("first defined here"));
    }

    #[test]
    fn unknown_ref_and_missing_field() {
        let base = "[root]\ntag = \"mrow\"\nref = \"row\"\n";
        let source = format!("{base}[[edit]]\nop = \"clear\"\nparent = \"nope\"\n");
        let err = render(&source, MarkupConfig::default()).unwrap_err();
        assert!(matches!(err, SceneError::UnknownRef { ref span } if &source[span.clone()] == "\"nope\""));

        let source = format!("{base}[[edit]]\nop = \"move\"\nparent = \"row\"\n");
        let err = render(&source, MarkupConfig::default()).unwrap_err();
        assert!(matches!(err, SceneError::MissingField { field: "child", .. }));
    }

    #[test]
    fn unused_fields_are_reported() {
        let base = r#"
[root]
tag = "mrow"
ref = "row"
children = [{ tag = "mi", ref = "x" }]

[[edit]]
parent = "row"
"#;
        let cases = [
            (r#"op = "append"
child = "x"
index = 0"#, "index"),
            (r#"op = "move"
child = "x"
index = 0
node = { tag = "mn" }"#, "node"),
            (r#"op = "remove"
child = "x"
index = 0"#, "index"),
            (r#"op = "clear"
child = "x""#, "child"),
            (r#"op = "append"
child = "x"
node = { tag = "mn" }"#, "node"),
        ];
        for (step, field) in cases {
            let source = format!("{base}{step}\n");
            let err = render(&source, MarkupConfig::default()).unwrap_err();
            let SceneError::UnexpectedField { span, field: found } = &err else {
                panic!("unexpected error: {err}");
            };
            assert_eq!(*found, field);
            assert!(source[span.clone()].starts_with('"'));
            assert_eq!(err.to_string(), format!("unexpected field `{field}`"));
        }
    }

    #[test]
    fn out_of_range_insert() {
        let source = r#"
[root]
tag = "mrow"
ref = "row"

[[edit]]
op = "insert"
parent = "row"
index = 1
node = { tag = "mi", text = "x" }
"#;
        let err = render(source, MarkupConfig::default()).unwrap_err();
        let SceneError::Build { span, error } = &err else {
            panic!("unexpected error: {err}");
        };
        assert!(error.is_range_error());
        assert_eq!(&source[span.clone()], "\"insert\"");
        assert!(report(source, &err).contains("index 1 is out of range for 0 children"));
    }

    #[test]
    fn text_on_container() {
        let source = "[root]\ntag = \"mrow\"\ntext = \"x\"\n";
        let err = render(source, MarkupConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "<mrow> cannot hold text content");
    }

    #[test]
    fn enforced_arity_points_at_node() {
        let source = r#"
[root]
tag = "math"
children = [{ tag = "mfrac", children = [{ tag = "mn", text = "1" }] }]
"#;
        assert!(render(source, MarkupConfig::default()).is_ok());
        let config = MarkupConfig {
            enforce_arity: true,
            ..Default::default()
        };
        let err = render(source, config).unwrap_err();
        let SceneError::Build { span, error } = &err else {
            panic!("unexpected error: {err}");
        };
        assert!(matches!(error, Error::Arity(_)));
        assert_eq!(&source[span.clone()], "\"mfrac\"");
        assert!(report(source, &err).contains("expected exactly 2 children"));
    }

    #[test]
    fn parse_error() {
        let source = "[root]\ntag = \"mi\"\ncolour = 1\n";
        let err = render(source, MarkupConfig::default()).unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
        assert!(err.span().end > 0);
    }
}
