//! Byte-level UTF-8 character cursor.
//!
//! Works on raw bytes rather than `str` so that malformed input can still be
//! walked. Any byte that is not a valid leading byte is treated as a
//! one-byte character.

/// Returns true if `byte` begins a character (is not a continuation byte).
#[inline]
pub fn is_char_start(byte: u8) -> bool {
    (byte & 0xC0) != 0x80
}

/// Returns true if `byte` is plain ASCII.
#[inline]
pub fn is_ascii(byte: u8) -> bool {
    byte < 0x80
}

/// Encoded length of the character whose leading byte is `lead`.
#[inline]
pub fn char_len(lead: u8) -> usize {
    if lead & 0x80 == 0 {
        1
    } else if lead & 0xE0 == 0xC0 {
        2
    } else if lead & 0xF0 == 0xE0 {
        3
    } else if lead & 0xF8 == 0xF0 {
        4
    } else {
        1
    }
}

/// Number of characters in `bytes`.
pub fn char_count(bytes: &[u8]) -> usize {
    Utf8Chars::new(bytes).count()
}

/// Iterator over the byte span of each character.
///
/// A leading byte that promises more bytes than remain yields the truncated
/// tail as its last span.
#[derive(Debug, Clone)]
pub struct Utf8Chars<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Utf8Chars<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Byte offset of the next character to be yielded.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Bytes not yet yielded.
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

impl<'a> Iterator for Utf8Chars<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.bytes[self.pos..];
        let lead = *rest.first()?;
        let len = char_len(lead).min(rest.len());
        self.pos += len;
        Some(&rest[..len])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() - self.pos;
        (remaining.div_ceil(4), Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_classes() {
        assert_eq!(char_len(b'a'), 1);
        assert_eq!(char_len("é".as_bytes()[0]), 2);
        assert_eq!(char_len("中".as_bytes()[0]), 3);
        assert_eq!(char_len("😀".as_bytes()[0]), 4);
    }

    #[test]
    fn test_char_len_malformed_lead_is_one() {
        // Continuation byte and 0xF8..=0xFF are not valid leads.
        assert_eq!(char_len(0x80), 1);
        assert_eq!(char_len(0xBF), 1);
        assert_eq!(char_len(0xF8), 1);
        assert_eq!(char_len(0xFF), 1);
    }

    #[test]
    fn test_is_char_start() {
        let bytes = "a中".as_bytes();
        assert!(is_char_start(bytes[0]));
        assert!(is_char_start(bytes[1]));
        assert!(!is_char_start(bytes[2]));
        assert!(!is_char_start(bytes[3]));
    }

    #[test]
    fn test_char_count_mixed() {
        assert_eq!(char_count(b""), 0);
        assert_eq!(char_count(b"abc"), 3);
        assert_eq!(char_count("Hello 世界".as_bytes()), 8);
        assert_eq!(char_count("😀x".as_bytes()), 2);
    }

    #[test]
    fn test_spans_follow_boundaries() {
        let spans: Vec<&[u8]> = Utf8Chars::new("a世b".as_bytes()).collect();
        assert_eq!(spans, vec![&b"a"[..], "世".as_bytes(), &b"b"[..]]);
    }

    #[test]
    fn test_truncated_sequence_is_clamped() {
        // Leading byte of a 3-byte character with only one continuation byte.
        let bytes = [b'x', 0xE4, 0xB8];
        let spans: Vec<&[u8]> = Utf8Chars::new(&bytes).collect();
        assert_eq!(spans, vec![&[b'x'][..], &[0xE4, 0xB8][..]]);
    }

    #[test]
    fn test_stray_continuation_bytes_are_single_chars() {
        let bytes = [0x80, 0x81, b'a'];
        assert_eq!(char_count(&bytes), 3);
    }

    #[test]
    fn test_offset_tracks_position() {
        let mut chars = Utf8Chars::new("中a".as_bytes());
        assert_eq!(chars.offset(), 0);
        chars.next();
        assert_eq!(chars.offset(), 3);
        assert_eq!(chars.as_bytes(), b"a");
    }
}
