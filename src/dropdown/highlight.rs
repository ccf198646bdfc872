//! Search substring highlighting for item descriptions

use egui::text::{LayoutJob, TextFormat};
use std::ops::Range;

/// Byte range of the first case-insensitive occurrence of `needle` in `haystack`.
///
/// Characters are compared through their lowercase expansions, and a match
/// always starts and ends on a character boundary of `haystack`. An empty
/// needle never matches.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }
    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();

    haystack.char_indices().find_map(|(start, _)| {
        match_len_at(&haystack[start..], &needle).map(|len| start..start + len)
    })
}

fn match_len_at(rest: &str, needle: &[char]) -> Option<usize> {
    let mut pending = needle.iter();
    for (offset, ch) in rest.char_indices() {
        for lower in ch.to_lowercase() {
            if pending.next() != Some(&lower) {
                return None;
            }
        }
        if pending.len() == 0 {
            return Some(offset + ch.len_utf8());
        }
    }
    None
}

/// A description split around the search match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight<'a> {
    /// No description: nothing is rendered
    Absent,
    /// Description rendered unmodified
    Plain(&'a str),
    Split {
        before: &'a str,
        matched: &'a str,
        after: &'a str,
    },
}

impl<'a> Highlight<'a> {
    pub fn new(text: Option<&'a str>, search_substring: &str) -> Self {
        let text = match text {
            Some(text) if !text.is_empty() => text,
            _ => return Self::Absent,
        };

        match find_ignore_case(text, search_substring) {
            Some(range) => Self::Split {
                before: &text[..range.start],
                matched: &text[range.clone()],
                after: &text[range.end..],
            },
            None => Self::Plain(text),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Append the parts to `job`, using `emphasis` for the matched part
    pub fn append_to(&self, job: &mut LayoutJob, normal: &TextFormat, emphasis: &TextFormat) {
        match self {
            Self::Absent => {}
            Self::Plain(text) => job.append(text, 0.0, normal.clone()),
            Self::Split { before, matched, after } => {
                if !before.is_empty() {
                    job.append(before, 0.0, normal.clone());
                }
                job.append(matched, 0.0, emphasis.clone());
                if !after.is_empty() {
                    job.append(after, 0.0, normal.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_is_case_insensitive() {
        assert_eq!(
            Highlight::new(Some("Hello World"), "world"),
            Highlight::Split {
                before: "Hello ",
                matched: "World",
                after: "",
            }
        );
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(
            Highlight::new(Some("abc ABC abc"), "Bc"),
            Highlight::Split {
                before: "a",
                matched: "bc",
                after: " ABC abc",
            }
        );
    }

    #[test]
    fn test_empty_substring_is_plain() {
        assert_eq!(
            Highlight::new(Some("Hello World"), ""),
            Highlight::Plain("Hello World")
        );
    }

    #[test]
    fn test_no_match_is_plain() {
        assert_eq!(
            Highlight::new(Some("Hello World"), "xyz"),
            Highlight::Plain("Hello World")
        );
    }

    #[test]
    fn test_absent_text_renders_nothing() {
        assert!(Highlight::new(None, "world").is_absent());
        assert!(Highlight::new(None, "").is_absent());
        assert!(Highlight::new(Some(""), "x").is_absent());
    }

    #[test]
    fn test_needle_longer_than_text() {
        assert_eq!(
            Highlight::new(Some("Hi"), "Hint"),
            Highlight::Plain("Hi")
        );
    }

    #[test]
    fn test_multibyte_match_keeps_char_boundaries() {
        let range = find_ignore_case("Größe ÄNDERN", "änd").unwrap();
        assert_eq!(&"Größe ÄNDERN"[range], "ÄND");
    }

    #[test]
    fn test_partial_lowercase_expansion_does_not_match() {
        // 'İ' lowercases to "i̇" (two chars); a bare "i" must not split it
        assert_eq!(find_ignore_case("İ", "i"), None);
        assert!(find_ignore_case("İx", "i\u{307}x").is_some());
    }

    #[test]
    fn test_append_to_emphasizes_match_only() {
        let normal = TextFormat::default();
        let emphasis = TextFormat {
            color: egui::Color32::RED,
            ..Default::default()
        };
        let mut job = LayoutJob::default();
        Highlight::new(Some("Hello World"), "world").append_to(&mut job, &normal, &emphasis);

        assert_eq!(job.text, "Hello World");
        assert_eq!(job.sections.len(), 2);
        assert_eq!(&job.text[job.sections[1].byte_range.clone()], "World");
        assert_eq!(job.sections[1].format.color, egui::Color32::RED);
    }
}
