//! URL path-segment encoding and XML escaping.

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encode text for use as a single URL path segment.
///
/// Characters allowed in a path segment by RFC 3986 (unreserved,
/// sub-delims, `:` and `@`) pass through unchanged. Every other byte of
/// the UTF-8 encoding, including space, `/`, `?`, `#` and `%`, becomes
/// `%XX` with upper-case hex.
///
/// # Examples
///
/// ```
/// use evidebus::sitemap::encode_path_segment;
///
/// assert_eq!(encode_path_segment("SULTHAN BATHERY"), "SULTHAN%20BATHERY");
/// assert_eq!(encode_path_segment("A&B"), "A&B");
/// assert_eq!(encode_path_segment("A/B"), "A%2FB");
/// ```
pub fn encode_path_segment(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        if is_segment_char(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0F) as usize] as char);
        }
    }
    out
}

fn is_segment_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'.'
                | b'_'
                | b'~'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
                | b':'
                | b'@'
        )
}

/// Escape the five XML-reserved characters.
///
/// # Examples
///
/// ```
/// use evidebus::sitemap::escape_xml;
///
/// assert_eq!(escape_xml(r#"a&b<c>"d'"#), "a&amp;b&lt;c&gt;&quot;d&apos;");
/// ```
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreserved_pass_through() {
        assert_eq!(encode_path_segment("KOZHIKODE"), "KOZHIKODE");
        assert_eq!(encode_path_segment("a-b.c_d~e"), "a-b.c_d~e");
    }

    #[test]
    fn sub_delims_pass_through() {
        assert_eq!(encode_path_segment("!$&'()*+,;=:@"), "!$&'()*+,;=:@");
    }

    #[test]
    fn reserved_are_encoded() {
        assert_eq!(encode_path_segment("a b"), "a%20b");
        assert_eq!(encode_path_segment("a/b?c#d"), "a%2Fb%3Fc%23d");
        assert_eq!(encode_path_segment("100%"), "100%25");
        assert_eq!(encode_path_segment("<x>\""), "%3Cx%3E%22");
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        assert_eq!(encode_path_segment("é"), "%C3%A9");
        assert_eq!(encode_path_segment("കൊച്ചി").len(), "കൊച്ചി".len() * 3);
    }

    #[test]
    fn empty_input() {
        assert_eq!(encode_path_segment(""), "");
        assert_eq!(escape_xml(""), "");
    }

    #[test]
    fn escape_leaves_plain_text() {
        assert_eq!(escape_xml("https://evidebus.com/board/X"), "https://evidebus.com/board/X");
    }

    #[test]
    fn escape_all_five() {
        assert_eq!(escape_xml("&"), "&amp;");
        assert_eq!(escape_xml("<"), "&lt;");
        assert_eq!(escape_xml(">"), "&gt;");
        assert_eq!(escape_xml("\""), "&quot;");
        assert_eq!(escape_xml("'"), "&apos;");
    }

    #[test]
    fn escape_does_not_double_up() {
        assert_eq!(escape_xml("%26"), "%26");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Encoded output never contains a segment separator or space.
        #[test]
        fn encoded_is_single_segment(s in ".{0,30}") {
            let encoded = encode_path_segment(&s);
            prop_assert!(!encoded.contains('/'));
            prop_assert!(!encoded.contains(' '));
            prop_assert!(encoded.is_ascii());
        }

        /// Escaped output never contains a markup character.
        #[test]
        fn escaped_has_no_markup(s in ".{0,30}") {
            let escaped = escape_xml(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
            prop_assert!(!escaped.contains('\''));
        }
    }
}
