//! Value types shared by MathML and SVG attributes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum_macros::IntoStaticStr;

/// Something that can be written as (part of) an attribute value.
pub trait AttrValue {
    fn write(&self, out: &mut String);
}

/// Writes `value` without a trailing `.0` for integral values.
///
/// NaN and the infinities have no representation in markup; they are written as `0`.
pub(crate) fn write_number(out: &mut String, value: f64) {
    if !value.is_finite() {
        out.push('0');
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        // `-0.0` also ends up here and is written as `0`.
        out.push_str(&(value as i64).to_string());
    } else {
        let mut buffer = dtoa::Buffer::new();
        out.push_str(buffer.format(value));
    }
}

impl AttrValue for f64 {
    fn write(&self, out: &mut String) {
        write_number(out, *self);
    }
}

impl AttrValue for u32 {
    fn write(&self, out: &mut String) {
        out.push_str(&self.to_string());
    }
}

impl AttrValue for bool {
    fn write(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

impl AttrValue for String {
    fn write(&self, out: &mut String) {
        out.push_str(self);
    }
}

/// Space separated list.
impl<T: AttrValue> AttrValue for Vec<T> {
    fn write(&self, out: &mut String) {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            item.write(out);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LengthUnit {
    #[strum(serialize = "")]
    User,
    #[strum(serialize = "px")]
    Px,
    #[strum(serialize = "pt")]
    Pt,
    #[strum(serialize = "em")]
    Em,
    #[strum(serialize = "ex")]
    Ex,
    #[strum(serialize = "rem")]
    Rem,
    #[strum(serialize = "%")]
    Percent,
}

/// A number with a unit, as used by `width`, `lspace`, `stroke-width` and friends.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    /// 3/18 of an em.
    pub const THIN: Length = Length::em(0.1667);
    /// 4/18 of an em.
    pub const MEDIUM: Length = Length::em(0.2222);
    /// 5/18 of an em.
    pub const THICK: Length = Length::em(0.2778);
    pub const QUAD: Length = Length::em(1.0);

    #[inline]
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Length { value, unit }
    }

    #[inline]
    pub const fn zero() -> Self {
        Length::new(0.0, LengthUnit::User)
    }

    #[inline]
    pub const fn em(value: f64) -> Self {
        Length::new(value, LengthUnit::Em)
    }

    #[inline]
    pub const fn ex(value: f64) -> Self {
        Length::new(value, LengthUnit::Ex)
    }

    #[inline]
    pub const fn px(value: f64) -> Self {
        Length::new(value, LengthUnit::Px)
    }

    #[inline]
    pub const fn pt(value: f64) -> Self {
        Length::new(value, LengthUnit::Pt)
    }

    #[inline]
    pub const fn rem(value: f64) -> Self {
        Length::new(value, LengthUnit::Rem)
    }

    #[inline]
    pub const fn percent(value: f64) -> Self {
        Length::new(value, LengthUnit::Percent)
    }

    /// Unitless SVG user units.
    #[inline]
    pub const fn user(value: f64) -> Self {
        Length::new(value, LengthUnit::User)
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Length::user(value)
    }
}

impl AttrValue for Length {
    fn write(&self, out: &mut String) {
        write_number(out, self.value);
        // A zero length needs no unit, and neither does a non-finite one written as zero.
        if self.value != 0.0 && self.value.is_finite() {
            out.push_str(<&str>::from(self.unit));
        }
    }
}

fn append_u8_as_hex(output: &mut String, b: u8) {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
    output.push(char::from(DIGITS[usize::from(b >> 4)]));
    output.push(char::from(DIGITS[usize::from(b & 0x0F)]));
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Rgb(u8, u8, u8),
    /// A CSS color keyword such as `red`.
    Named(String),
    CurrentColor,
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);

    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }
}

impl AttrValue for Color {
    fn write(&self, out: &mut String) {
        match self {
            Color::Rgb(r, g, b) => {
                out.push('#');
                append_u8_as_hex(out, *r);
                append_u8_as_hex(out, *g);
                append_u8_as_hex(out, *b);
            }
            Color::Named(name) => out.push_str(name),
            Color::CurrentColor => out.push_str("currentcolor"),
        }
    }
}

/// SVG paint server for `fill` and `stroke`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Paint {
    None,
    Color(Color),
    /// Reference to a gradient or pattern by element id.
    Url(String),
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Color(color)
    }
}

impl AttrValue for Paint {
    fn write(&self, out: &mut String) {
        match self {
            Paint::None => out.push_str("none"),
            Paint::Color(color) => color.write(out),
            Paint::Url(id) => {
                out.push_str("url(#");
                out.push_str(id);
                out.push(')');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(value: &impl AttrValue) -> String {
        let mut out = String::new();
        value.write(&mut out);
        out
    }

    #[test]
    fn numbers() {
        assert_eq!(written(&1.0), "1");
        assert_eq!(written(&-0.0), "0");
        assert_eq!(written(&-2.5), "-2.5");
        assert_eq!(written(&0.1667), "0.1667");
        assert_eq!(written(&12u32), "12");
    }

    #[test]
    fn non_finite_numbers_are_zero() {
        assert_eq!(written(&f64::NAN), "0");
        assert_eq!(written(&f64::INFINITY), "0");
        assert_eq!(written(&Length::em(f64::NAN)), "0");
        assert_eq!(written(&Length::user(f64::NEG_INFINITY)), "0");
        assert_eq!(written(&vec![1.5, f64::NAN]), "1.5 0");
    }

    #[test]
    fn lengths() {
        assert_eq!(written(&Length::THIN), "0.1667em");
        assert_eq!(written(&Length::percent(100.0)), "100%");
        assert_eq!(written(&Length::user(4.0)), "4");
        assert_eq!(written(&Length::rem(0.0)), "0");
        assert_eq!(written(&vec![Length::em(1.0), Length::px(2.0)]), "1em 2px");
    }

    #[test]
    fn colors() {
        assert_eq!(written(&Color::Rgb(0, 0x7F, 0xFF)), "#007FFF");
        assert_eq!(written(&Color::named("red")), "red");
        assert_eq!(written(&Paint::Url("grad".into())), "url(#grad)");
        assert_eq!(written(&Paint::None), "none");
        assert_eq!(written(&Paint::from(Color::CurrentColor)), "currentcolor");
    }
}
