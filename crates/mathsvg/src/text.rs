use crate::attribute::AttrValue;

/// Text of a token element. Numbers convert to their shortest decimal form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextContent(pub(crate) String);

impl TextContent {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for TextContent {
    fn from(text: &str) -> Self {
        TextContent(text.to_string())
    }
}

impl From<String> for TextContent {
    fn from(text: String) -> Self {
        TextContent(text)
    }
}

impl From<char> for TextContent {
    fn from(c: char) -> Self {
        TextContent(c.to_string())
    }
}

impl From<f64> for TextContent {
    fn from(value: f64) -> Self {
        let mut text = String::new();
        value.write(&mut text);
        TextContent(text)
    }
}

macro_rules! integer_text {
    ($($int:ty),*) => {$(
        impl From<$int> for TextContent {
            fn from(value: $int) -> Self {
                TextContent(value.to_string())
            }
        }
    )*};
}

integer_text!(i32, i64, u8, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand() {
        assert_eq!(TextContent::from("x").as_str(), "x");
        assert_eq!(TextContent::from('∑').as_str(), "∑");
        assert_eq!(TextContent::from(42).as_str(), "42");
        assert_eq!(TextContent::from(2.0).as_str(), "2");
        assert_eq!(TextContent::from(0.25).as_str(), "0.25");
    }
}
