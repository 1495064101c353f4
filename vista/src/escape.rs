//! HTML special character escaping.
//!
//! [`escape`] converts `&`, `<`, `>` and, depending on [`Flags`], quotes into HTML entities.
//! Input is a `&str`, so invalid code unit sequences cannot occur and [`Flags::IGNORE`] and
//! [`Flags::SUBSTITUTE`] are accepted without effect.
use crate::{Error, Result};

bitflags::bitflags! {
    /// Escape behavior flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u32 {
        /// Convert double quotes, leave single quotes.
        const COMPAT = 0b0000_0010;
        /// Convert both double and single quotes.
        const QUOTES = 0b0000_0011;
        /// Leave both quotes.
        const NOQUOTES = 0;
        const IGNORE = 0b0000_0100;
        const SUBSTITUTE = 0b0000_1000;
        /// Single quote becomes `&#039;`.
        const HTML401 = 0;
        /// Single quote becomes `&apos;`.
        const XML1 = 0b0001_0000;
        /// Single quote becomes `&apos;`.
        const XHTML = 0b0010_0000;
        /// Single quote becomes `&apos;`.
        const HTML5 = 0b0011_0000;
    }
}

const SINGLE_QUOTE: u32 = 0b0000_0001;
const DOUBLE_QUOTE: u32 = 0b0000_0010;
const DOCTYPE: u32 = 0b0011_0000;

impl Default for Flags {
    fn default() -> Self {
        Flags::QUOTES | Flags::SUBSTITUTE | Flags::HTML401
    }
}

/// Escape HTML special characters.
///
/// Only `UTF-8` is supported as `encoding`, an empty string means the same. When `double_encode`
/// is `false`, existing entities such as `&amp;`, `&#38;` or `&#x26;` are kept as is.
pub fn escape(value: &str, flags: Flags, encoding: &str, double_encode: bool) -> Result<String> {
    if !is_utf8(encoding) {
        return Err(Error::InvalidArgument(format!("unsupported encoding `{encoding}`")));
    }

    let mut out = String::with_capacity(value.len());
    escape_into(&mut out, value, flags, double_encode);
    Ok(out)
}

/// Escape with the default flags, `UTF-8` and double encoding.
pub fn e(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    escape_into(&mut out, value, Flags::default(), true);
    out
}

pub(crate) fn escape_into(out: &mut String, value: &str, flags: Flags, double_encode: bool) {
    let bits = flags.bits();
    let single = if bits & DOCTYPE == Flags::HTML401.bits() { "&#039;" } else { "&apos;" };
    let mut latest = 0;

    for (i, ch) in value.char_indices() {
        let escaped = match ch {
            '&' if !double_encode && is_entity(&value[i + 1..]) => continue,
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' if bits & DOUBLE_QUOTE != 0 => "&quot;",
            '\'' if bits & SINGLE_QUOTE != 0 => single,
            _ => continue,
        };

        out.push_str(&value[latest..i]);
        out.push_str(escaped);
        latest = i + 1;
    }

    out.push_str(&value[latest..]);
}

fn is_utf8(encoding: &str) -> bool {
    encoding.is_empty()
        || encoding.eq_ignore_ascii_case("utf-8")
        || encoding.eq_ignore_ascii_case("utf8")
}

/// `rest` is the input right after `&`.
fn is_entity(rest: &str) -> bool {
    let Some(end) = rest.find(';') else {
        return false;
    };
    let name = &rest[..end];

    if let Some(num) = name.strip_prefix('#') {
        return match num.strip_prefix(['x', 'X']) {
            Some(hex) => !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()),
            None => !num.is_empty() && num.chars().all(|c| c.is_ascii_digit()),
        };
    }

    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_flags() {
        assert_eq!(
            e(r#"<p class="a">Tom & 'Jerry'</p>"#),
            "&lt;p class=&quot;a&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/p&gt;"
        );
        assert_eq!(e("plain ünïcode"), "plain ünïcode");
    }

    #[test]
    fn quote_flags() {
        let input = r#""'"#;
        assert_eq!(escape(input, Flags::COMPAT, "UTF-8", true).unwrap(), "&quot;'");
        assert_eq!(escape(input, Flags::NOQUOTES, "UTF-8", true).unwrap(), r#""'"#);
        assert_eq!(escape(input, Flags::QUOTES | Flags::HTML5, "UTF-8", true).unwrap(), "&quot;&apos;");
        assert_eq!(escape(input, Flags::QUOTES | Flags::XML1, "utf8", true).unwrap(), "&quot;&apos;");
    }

    #[test]
    fn double_encode() {
        let input = "&amp; &#38; &#x26; &bogus &#x; & done";
        assert_eq!(
            escape(input, Flags::default(), "UTF-8", false).unwrap(),
            "&amp; &#38; &#x26; &amp;bogus &amp;#x; &amp; done"
        );
        assert_eq!(
            escape("&amp;", Flags::default(), "UTF-8", true).unwrap(),
            "&amp;amp;"
        );
    }

    #[test]
    fn unsupported_encoding() {
        let err = escape("x", Flags::default(), "ISO-8859-1", true).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
