//!Encoding utilities
//!
//!Percent-encoder used to place URI references and attribute values into `Link` header.
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode, percent_decode_str};

use std::borrow::Cow;

///Characters that can be used in URI without escaping, as defined in https://tools.ietf.org/html/rfc3986#section-2.3
pub const UNRESERVED: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";
///URI delimiters, as defined in https://tools.ietf.org/html/rfc3986#section-2.2
pub const DELIMITERS: &str = ":/?#[]@!$&'()*+,;=";
///Characters that can appear in URI reference literally.
pub const ALL_ALLOWED: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~:/?#[]@!$&'()*+,;=";
///Valid characters of percent-encoded octet.
pub const HEX_DIGITS: &str = "0123456789ABCDEFabcdef";

///Everything except [UNRESERVED](constant.UNRESERVED.html)
pub const UNRESERVED_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

///Everything except [ALL_ALLOWED](constant.ALL_ALLOWED.html)
pub const ALL_ALLOWED_ENCODE_SET: &AsciiSet = &UNRESERVED_ENCODE_SET.remove(b':').remove(b'/').remove(b'?').remove(b'#')
                                                                    .remove(b'[').remove(b']').remove(b'@').remove(b'!')
                                                                    .remove(b'$').remove(b'&').remove(b'\'').remove(b'(')
                                                                    .remove(b')').remove(b'*').remove(b'+').remove(b',')
                                                                    .remove(b';').remove(b'=');

///Class of attribute values.
pub const UNRESERVED_CLASS: CharClass = CharClass::new(UNRESERVED, UNRESERVED_ENCODE_SET);
///Class of URI references.
pub const ALL_ALLOWED_CLASS: CharClass = CharClass::new(ALL_ALLOWED, ALL_ALLOWED_ENCODE_SET);

///Set of characters that are allowed to be written without escaping.
///
///Lookup table is built at compile time.
pub struct CharClass {
    chars: &'static str,
    table: [bool; 256],
    encode_set: &'static AsciiSet,
}

impl CharClass {
    ///Creates new class out of allowed characters.
    ///
    ///`encode_set` must contain every ASCII character that is not part of `chars`,
    ///it is used to escape forbidden bytes.
    pub const fn new(chars: &'static str, encode_set: &'static AsciiSet) -> Self {
        let bytes = chars.as_bytes();
        let mut table = [false; 256];
        let mut idx = 0;

        while idx < bytes.len() {
            table[bytes[idx] as usize] = true;
            idx += 1;
        }

        Self {
            chars,
            table,
            encode_set,
        }
    }

    #[inline]
    ///Returns allowed characters.
    pub fn chars(&self) -> &'static str {
        self.chars
    }

    #[inline]
    ///Returns set of ASCII characters that must be escaped.
    pub fn encode_set(&self) -> &'static AsciiSet {
        self.encode_set
    }

    #[inline]
    ///Returns whether byte can be written as it is.
    pub fn contains(&self, byte: u8) -> bool {
        self.table[byte as usize]
    }

    #[inline]
    ///Returns whether every byte of `text` can be written as it is.
    pub fn contains_all(&self, text: &str) -> bool {
        text.bytes().all(|byte| self.contains(byte))
    }
}

#[inline]
fn is_hex_digit(byte: u8) -> bool {
    HEX_DIGITS.as_bytes().contains(&byte)
}

///Returns whether `text` looks like it is already percent encoded.
///
///All characters must belong to `class` or be `%`, and each `%` must be
///followed by two hex digits.
pub fn is_escaped(text: &str, class: &CharClass) -> bool {
    if !text.bytes().all(|byte| byte == b'%' || class.contains(byte)) {
        return false;
    }

    text.split('%').skip(1).all(|token| match token.as_bytes() {
        [first, second, ..] => is_hex_digit(*first) && is_hex_digit(*second),
        _ => false,
    })
}

///Percent decodes `text`, replacing invalid UTF-8 sequences.
pub fn decode(text: &str) -> Cow<'_, str> {
    percent_decode_str(text).decode_utf8_lossy()
}

#[derive(Clone, Copy)]
///Percent encoder of link's components.
pub struct Encoder {
    class: &'static CharClass,
    check_escaped: bool,
}

impl Encoder {
    ///Creates new encoder.
    ///
    ///- `is_value` restricts allowed characters to [UNRESERVED](constant.UNRESERVED.html).
    ///Otherwise URI delimiters are allowed too.
    ///- `check_escaped` makes already escaped input to be returned as it is.
    pub fn new(is_value: bool, check_escaped: bool) -> Self {
        let class = match is_value {
            true => &UNRESERVED_CLASS,
            false => &ALL_ALLOWED_CLASS,
        };

        Self {
            class,
            check_escaped,
        }
    }

    #[inline]
    ///Encoder for URI references: link target, anchor and relation URIs.
    pub fn target() -> Self {
        Self::new(false, true)
    }

    #[inline]
    ///Encoder for attribute values, such as `title*`
    pub fn value() -> Self {
        Self::new(true, true)
    }

    #[inline]
    ///Returns character class of encoder.
    pub fn class(&self) -> &'static CharClass {
        self.class
    }

    ///Encodes `text`.
    ///
    ///Text is borrowed back when no escaping is required.
    ///Otherwise each byte outside of allowed characters becomes `%XX`
    pub fn encode<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.class.contains_all(text) {
            return Cow::Borrowed(text);
        }

        if self.check_escaped && is_escaped(text, self.class) {
            return Cow::Borrowed(text);
        }

        utf8_percent_encode(text, self.class.encode_set).into()
    }
}
