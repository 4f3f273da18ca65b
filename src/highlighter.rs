//! Highlighter
//!
//! Binds a token list to global options and rewrites document trees:
//! every text leaf is scanned token by token, and matched substrings
//! are wrapped in `mark` elements carrying the tokens' class names.

use crate::matcher::{match_token, Fragment};
use crate::node::{Element, Node};
use crate::token::Token;

/// A reusable tree rewriter: a token list plus global defaults
///
/// `with_class` appends a class name to every match produced under
/// this highlighter; `case_sensitive(true)` forces case-sensitive
/// matching for every token (otherwise each token's own flag
/// applies). A highlighter is immutable once built and can be applied
/// to any number of trees.
#[derive(Debug, Clone)]
pub struct Highlighter {
    tokens: Vec<Token>,
    class: Option<String>,
    case_sensitive: bool,
}

impl Highlighter {
    /// Create a highlighter over `tokens` with no global options
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            class: None,
            case_sensitive: false,
        }
    }

    /// Builder: add a class name to every match under this highlighter
    ///
    /// The global class is ordered after each token's own class.
    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    /// Builder: force case-sensitive matching for every token
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Rewrite one leaf's text into a fragment sequence
    ///
    /// Tokens apply in list order. Each token scans only the plain
    /// text left by its predecessors: fragments already marked by an
    /// earlier token pass through untouched, so a later token never
    /// matches inside an existing highlight.
    pub fn rewrite_text(&self, text: &str) -> Vec<Fragment> {
        let mut fragments = vec![Fragment::Text(text.to_string())];

        for token in &self.tokens {
            let classes = self.class_list(token);
            let case_sensitive = self.case_sensitive || token.is_case_sensitive();

            fragments = fragments
                .into_iter()
                .flat_map(|fragment| match fragment {
                    Fragment::Text(text) => {
                        match_token(&text, token.pattern(), &classes, case_sensitive)
                    }
                    mark => vec![mark],
                })
                .collect();
        }

        fragments
    }

    /// Rewrite every text leaf under `container`
    ///
    /// The returned element shares the container's shape exactly:
    /// only text leaves are replaced, each by the node sequence its
    /// fragments splice into.
    pub fn apply(&self, container: &Element) -> Element {
        container.map_text(&|text| self.highlight_text(text))
    }

    /// Rewrite a single node, returning the spliced node sequence
    pub fn apply_node(&self, node: &Node) -> Vec<Node> {
        node.map_text(&|text| self.highlight_text(text))
    }

    fn highlight_text(&self, text: &str) -> Vec<Node> {
        self.rewrite_text(text).into_iter().map(Node::from).collect()
    }

    /// Class list for one token's matches: the token's own class
    /// first, then the global class when set
    fn class_list(&self, token: &Token) -> Vec<String> {
        match &self.class {
            Some(class) => vec![token.class().to_string(), class.clone()],
            None => vec![token.class().to_string()],
        }
    }
}

/// Highlight every occurrence of `pattern` under `container` with the
/// default token options
pub fn highlight(container: &Element, pattern: &str) -> Element {
    Highlighter::new(vec![Token::new(pattern)]).apply(container)
}
