//! marktree: token-based text highlighting for document trees
//!
//! Builds a new tree in which every substring matched by a set of
//! search tokens is wrapped in a `mark` element carrying the tokens'
//! class names, while all non-text structure passes through
//! unchanged. Matching is left to right and non-overlapping, tokens
//! apply in sequence (later tokens never rescan earlier marks), and a
//! pattern that fails to compile simply highlights nothing.
//!
//! ```
//! use marktree::{highlight, Element};
//!
//! let doc = Element::new("p").with_text("fizz buzz");
//! let lit = highlight(&doc, "buzz");
//!
//! // "fizz " followed by <mark class="highlight">buzz</mark>
//! assert_eq!(lit.children.len(), 2);
//! assert_eq!(lit.text_content(), "fizz buzz");
//! ```

mod config;
mod error;
mod highlighter;
mod matcher;
mod node;
mod token;

pub use error::{HighlightError, Result};
pub use highlighter::{highlight, Highlighter};
pub use matcher::{match_token, Fragment};
pub use node::{Element, Node, Value, MARK_TAG};
pub use token::{Token, TokenBuilder, DEFAULT_CLASS};
