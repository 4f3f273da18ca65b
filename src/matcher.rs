//! Match engine
//!
//! Scans one string with one token's pattern and splits it into an
//! alternating sequence of plain-text and marked-match fragments.
//! Matching is left to right and non-overlapping; concatenating the
//! fragment text always reconstructs the input exactly.

use regex::{Regex, RegexBuilder};

use crate::node::{Element, Node, MARK_TAG};

/// A piece of a scanned string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A run of unmatched text
    Text(String),
    /// A matched substring with its ordered class list
    Mark { classes: Vec<String>, text: String },
}

impl Fragment {
    /// The text carried by this fragment
    pub fn text(&self) -> &str {
        match self {
            Fragment::Text(text) => text,
            Fragment::Mark { text, .. } => text,
        }
    }

    /// Whether this fragment is a marked match
    pub fn is_mark(&self) -> bool {
        matches!(self, Fragment::Mark { .. })
    }
}

impl From<Fragment> for Node {
    /// Plain text becomes a text leaf; a mark becomes a [`MARK_TAG`]
    /// element carrying the class list and wrapping the matched text
    fn from(fragment: Fragment) -> Node {
        match fragment {
            Fragment::Text(text) => Node::Text(text),
            Fragment::Mark { classes, text } => Node::Element(Element {
                tag: MARK_TAG.to_string(),
                classes,
                children: vec![Node::Text(text)],
            }),
        }
    }
}

/// Compile a pattern for scanning
///
/// Multi-line mode is always on, so `^` and `$` anchor at line
/// boundaries. A malformed pattern compiles to `None` and its match
/// set is treated as empty: invalid patterns never abort a rewrite,
/// they just highlight nothing.
fn compile(pattern: &str, case_sensitive: bool) -> Option<Regex> {
    RegexBuilder::new(pattern)
        .multi_line(true)
        .case_insensitive(!case_sensitive)
        .build()
        .ok()
}

/// Scan `text` with one pattern and split it into fragments
///
/// Every match becomes a `Mark` carrying `classes`; the unmatched
/// runs between matches become `Text` fragments. Match positions come
/// straight from the regex iterator, so marks always land on the
/// occurrence the search found. Empty runs are not emitted and
/// zero-length matches are skipped. If the pattern does not compile
/// or matches nowhere, the result is the input as a single `Text`
/// fragment.
pub fn match_token(
    text: &str,
    pattern: &str,
    classes: &[String],
    case_sensitive: bool,
) -> Vec<Fragment> {
    let regex = match compile(pattern, case_sensitive) {
        Some(regex) => regex,
        None => return vec![Fragment::Text(text.to_string())],
    };

    let mut fragments = Vec::new();
    let mut cursor = 0;

    for found in regex.find_iter(text) {
        if found.start() == found.end() {
            continue;
        }
        if found.start() > cursor {
            fragments.push(Fragment::Text(text[cursor..found.start()].to_string()));
        }
        fragments.push(Fragment::Mark {
            classes: classes.to_vec(),
            text: found.as_str().to_string(),
        });
        cursor = found.end();
    }

    if fragments.is_empty() {
        return vec![Fragment::Text(text.to_string())];
    }
    if cursor < text.len() {
        fragments.push(Fragment::Text(text[cursor..].to_string()));
    }
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn concat(fragments: &[Fragment]) -> String {
        fragments.iter().map(Fragment::text).collect()
    }

    #[test]
    fn test_no_match_returns_input() {
        let fragments = match_token("foo", "buzz", &classes(&["highlight"]), false);
        assert_eq!(fragments, vec![Fragment::Text("foo".to_string())]);
    }

    #[test]
    fn test_whole_string_match_is_single_mark() {
        let fragments = match_token("buZZ", "buzz", &classes(&["highlight"]), false);
        assert_eq!(
            fragments,
            vec![Fragment::Mark {
                classes: classes(&["highlight"]),
                text: "buZZ".to_string(),
            }]
        );
    }

    #[test]
    fn test_interleaved_fragments() {
        let fragments = match_token("a fizz b fizz c", "fizz", &classes(&["hit"]), false);
        assert_eq!(fragments.len(), 5);
        assert_eq!(fragments[0], Fragment::Text("a ".to_string()));
        assert!(fragments[1].is_mark());
        assert_eq!(fragments[2], Fragment::Text(" b ".to_string()));
        assert!(fragments[3].is_mark());
        assert_eq!(fragments[4], Fragment::Text(" c".to_string()));
    }

    #[test]
    fn test_case_sensitivity() {
        let fragments = match_token("buZZ", "buzz", &classes(&["highlight"]), true);
        assert_eq!(fragments, vec![Fragment::Text("buZZ".to_string())]);

        let fragments = match_token("buZZ", "buzz", &classes(&["highlight"]), false);
        assert!(fragments[0].is_mark());
    }

    #[test]
    fn test_regex_anchor() {
        let fragments = match_token("Bar", "^b", &classes(&["highlight"]), false);
        assert_eq!(
            fragments,
            vec![
                Fragment::Mark {
                    classes: classes(&["highlight"]),
                    text: "B".to_string(),
                },
                Fragment::Text("ar".to_string()),
            ]
        );
    }

    #[test]
    fn test_multiline_anchor_marks_true_position() {
        // "a" occurs at byte 1 but only the line-start "a" at byte 3
        // matches ^a; the mark must land there, not on the earlier
        // occurrence of the same substring.
        let fragments = match_token("ba\nax", "^a", &classes(&["highlight"]), false);
        assert_eq!(
            fragments,
            vec![
                Fragment::Text("ba\n".to_string()),
                Fragment::Mark {
                    classes: classes(&["highlight"]),
                    text: "a".to_string(),
                },
                Fragment::Text("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_pattern_matches_nothing() {
        let fragments = match_token("some text", "([", &classes(&["highlight"]), false);
        assert_eq!(fragments, vec![Fragment::Text("some text".to_string())]);
    }

    #[test]
    fn test_zero_length_matches_skipped() {
        let fragments = match_token("abc", "x*", &classes(&["highlight"]), false);
        assert_eq!(fragments, vec![Fragment::Text("abc".to_string())]);
    }

    #[test]
    fn test_content_preservation() {
        let inputs = ["", "buzz", "a fizz b fizz", "ba\nax", "no hits here"];
        for input in inputs {
            let fragments = match_token(input, "fizz|^a", &classes(&["h"]), false);
            assert_eq!(concat(&fragments), input);
        }
    }

    #[test]
    fn test_classes_attached_in_order() {
        let fragments = match_token("buzz", "buzz", &classes(&["special", "all-special"]), false);
        match &fragments[0] {
            Fragment::Mark { classes, .. } => {
                assert_eq!(classes, &["special".to_string(), "all-special".to_string()]);
            }
            other => panic!("expected mark, got {:?}", other),
        }
    }

    #[test]
    fn test_mark_into_node() {
        let node: Node = Fragment::Mark {
            classes: classes(&["highlight"]),
            text: "hit".to_string(),
        }
        .into();
        match node {
            Node::Element(element) => {
                assert_eq!(element.tag, MARK_TAG);
                assert_eq!(element.classes, classes(&["highlight"]));
                assert_eq!(element.children, vec![Node::text("hit")]);
            }
            other => panic!("expected element, got {:?}", other),
        }
    }
}
