use super::Attribute;
use super::value::write_number;

/// One command of an SVG path, in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    HorizontalTo(f64),
    VerticalTo(f64),
    CubicTo {
        c1: (f64, f64),
        c2: (f64, f64),
        end: (f64, f64),
    },
    QuadTo {
        control: (f64, f64),
        end: (f64, f64),
    },
    ArcTo {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: (f64, f64),
    },
    Close,
}

/// The `d` attribute of `<path>`, built up command by command.
///
/// ```rust
/// use mathsvg::attribute::{Attribute, PathData};
///
/// let d = PathData::new().move_to(0.0, 0.0).line_to(10.0, 0.0).vertical_to(5.0).close();
/// assert_eq!(d.value(), "M0 0 L10 0 V5 Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn push(mut self, command: PathCommand) -> Self {
        self.commands.push(command);
        self
    }

    pub fn move_to(self, x: f64, y: f64) -> Self {
        self.push(PathCommand::MoveTo(x, y))
    }

    pub fn line_to(self, x: f64, y: f64) -> Self {
        self.push(PathCommand::LineTo(x, y))
    }

    pub fn horizontal_to(self, x: f64) -> Self {
        self.push(PathCommand::HorizontalTo(x))
    }

    pub fn vertical_to(self, y: f64) -> Self {
        self.push(PathCommand::VerticalTo(y))
    }

    pub fn cubic_to(self, c1: (f64, f64), c2: (f64, f64), end: (f64, f64)) -> Self {
        self.push(PathCommand::CubicTo { c1, c2, end })
    }

    pub fn quad_to(self, control: (f64, f64), end: (f64, f64)) -> Self {
        self.push(PathCommand::QuadTo { control, end })
    }

    pub fn arc_to(
        self,
        (rx, ry): (f64, f64),
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: (f64, f64),
    ) -> Self {
        self.push(PathCommand::ArcTo {
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
            end,
        })
    }

    pub fn close(self) -> Self {
        self.push(PathCommand::Close)
    }

    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn write_pair(out: &mut String, (x, y): (f64, f64)) {
    write_number(out, x);
    out.push(' ');
    write_number(out, y);
}

fn write_flag(out: &mut String, flag: bool) {
    out.push(if flag { '1' } else { '0' });
}

impl Attribute for PathData {
    const NAME: &'static str = "d";

    fn write_value(&self, out: &mut String) {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            match *command {
                PathCommand::MoveTo(x, y) => {
                    out.push('M');
                    write_pair(out, (x, y));
                }
                PathCommand::LineTo(x, y) => {
                    out.push('L');
                    write_pair(out, (x, y));
                }
                PathCommand::HorizontalTo(x) => {
                    out.push('H');
                    write_number(out, x);
                }
                PathCommand::VerticalTo(y) => {
                    out.push('V');
                    write_number(out, y);
                }
                PathCommand::CubicTo { c1, c2, end } => {
                    out.push('C');
                    write_pair(out, c1);
                    out.push(' ');
                    write_pair(out, c2);
                    out.push(' ');
                    write_pair(out, end);
                }
                PathCommand::QuadTo { control, end } => {
                    out.push('Q');
                    write_pair(out, control);
                    out.push(' ');
                    write_pair(out, end);
                }
                PathCommand::ArcTo {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    end,
                } => {
                    out.push('A');
                    write_pair(out, (rx, ry));
                    out.push(' ');
                    write_number(out, rotation);
                    out.push(' ');
                    write_flag(out, large_arc);
                    out.push(' ');
                    write_flag(out, sweep);
                    out.push(' ');
                    write_pair(out, end);
                }
                PathCommand::Close => out.push('Z'),
            }
        }
    }
}
