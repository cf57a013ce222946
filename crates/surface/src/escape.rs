/// Escapes `&`, `<` and `>` in `input` for use as element content and appends the result.
///
/// Uses `memchr` to skip quickly over runs without special characters.
pub fn escape_content(output: &mut String, input: &str) {
    let mut rest = input;
    while let Some(index) = memchr::memchr3(b'&', b'<', b'>', rest.as_bytes()) {
        // The special characters are ASCII, so `index` is a char boundary.
        let (before, after) = rest.split_at(index);
        output.push_str(before);
        output.push_str(match after.as_bytes().first() {
            Some(b'&') => "&amp;",
            Some(b'<') => "&lt;",
            _ => "&gt;",
        });
        rest = &after[1..];
    }
    output.push_str(rest);
}

/// Escapes `input` for use inside a double-quoted attribute value and appends the result.
///
/// Attribute values are short, so this is a plain character loop.
pub fn escape_attribute(output: &mut String, input: &str) {
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '<' => output.push_str("&lt;"),
            _ => output.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let mut output = String::new();
        escape_content(&mut output, "");
        assert_eq!(output, "");
    }

    #[test]
    fn test_no_special_characters() {
        let mut output = String::new();
        escape_content(&mut output, "x + y");
        assert_eq!(output, "x + y");
    }

    #[test]
    fn test_operators() {
        let mut output = String::new();
        escape_content(&mut output, "a<b>c&d");
        assert_eq!(output, "a&lt;b&gt;c&amp;d");
    }

    #[test]
    fn test_consecutive_and_edges() {
        let mut output = String::new();
        escape_content(&mut output, "&<>");
        assert_eq!(output, "&amp;&lt;&gt;");
        output.clear();
        escape_content(&mut output, "<x&");
        assert_eq!(output, "&lt;x&amp;");
    }

    #[test]
    fn test_multibyte() {
        let mut output = String::new();
        escape_content(&mut output, "α ≤ β & γ");
        assert_eq!(output, "α ≤ β &amp; γ");
    }

    #[test]
    fn test_appends() {
        let mut output = "prefix: ".to_string();
        escape_content(&mut output, "<");
        assert_eq!(output, "prefix: &lt;");
    }

    #[test]
    fn test_attribute() {
        let mut output = String::new();
        escape_attribute(&mut output, r#"say "a<b" & go"#);
        assert_eq!(output, "say &quot;a&lt;b&quot; &amp; go");
    }
}
