//! Shared text shaping and truncation policies for compact UI surfaces.

use core::str;

pub const COMPACT_MAX_WORDS: usize = 7;
pub const COMPACT_MAX_CHARS: usize = 34;

pub fn preview_compact<'a>(source: &str, out: &'a mut [u8]) -> &'a str {
    preview_limited(source, out, COMPACT_MAX_WORDS, COMPACT_MAX_CHARS)
}

pub fn preview_limited<'a>(
    source: &str,
    out: &'a mut [u8],
    max_words: usize,
    max_chars: usize,
) -> &'a str {
    if out.is_empty() {
        return "";
    }

    let mut len = 0usize;
    let mut char_count = 0usize;
    let mut truncated = false;

    for (word_count, word) in source.split_whitespace().enumerate() {
        if word_count >= max_words {
            truncated = true;
            break;
        }

        if word_count > 0 {
            if len + 1 > out.len() || char_count >= max_chars {
                truncated = true;
                break;
            }
            out[len] = b' ';
            len += 1;
            char_count += 1;
        }

        for ch in word.chars() {
            let mut utf8 = [0u8; 4];
            let encoded = ch.encode_utf8(&mut utf8).as_bytes();
            if char_count >= max_chars || len + encoded.len() > out.len() {
                truncated = true;
                break;
            }

            out[len..len + encoded.len()].copy_from_slice(encoded);
            len += encoded.len();
            char_count += 1;
        }

        if truncated {
            break;
        }
    }

    if len == 0 {
        return "";
    }

    if truncated && len + 3 <= out.len() {
        out[len..len + 3].copy_from_slice(b"...");
        len += 3;
    }

    str::from_utf8(&out[..len]).unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_titles_pass_through() {
        let mut buf = [0u8; 64];
        assert_eq!(preview_compact("Problem Solving", &mut buf), "Problem Solving");
    }

    #[test]
    fn long_titles_truncate_with_ellipsis() {
        let mut buf = [0u8; 64];
        let shaped = preview_compact(
            "Developing comprehension through carefully staged listening and reading tasks",
            &mut buf,
        );
        assert!(shaped.ends_with("..."));
        assert!(shaped.len() <= COMPACT_MAX_CHARS + 3 * 4);
    }

    #[test]
    fn empty_buffer_yields_empty_preview() {
        let mut buf = [0u8; 0];
        assert_eq!(preview_limited("anything", &mut buf, 3, 10), "");
    }
}
