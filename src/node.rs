//! Document tree model
//!
//! A document is a tree of nodes: text leaves, structural elements,
//! and opaque non-text leaves. The highlighter rewrites text leaves
//! only; every other node keeps its shape and position.

/// Tag used for the marker elements wrapped around matched text
pub const MARK_TAG: &str = "mark";

/// A node in a document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A text leaf, the only node kind the highlighter rewrites
    Text(String),
    /// A structural element holding an ordered list of children
    Element(Element),
    /// A non-text leaf, carried through rewrites untouched
    Value(Value),
}

/// Non-text leaf content (numbers and the like from host documents)
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// A structural element: tag, class list, children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Element tag (e.g. "ul", "li", "mark")
    pub tag: String,
    /// Ordered class names on this element
    pub classes: Vec<String>,
    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no classes or children
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: add a class name
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Builder: append a child node
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Builder: append a text-leaf child
    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    /// Map every text leaf beneath this element through `transform`,
    /// splicing the returned nodes in place of the leaf
    ///
    /// The element itself and all non-text descendants keep their
    /// shape and order. The input is not mutated.
    pub fn map_text<F>(&self, transform: &F) -> Element
    where
        F: Fn(&str) -> Vec<Node>,
    {
        Element {
            tag: self.tag.clone(),
            classes: self.classes.clone(),
            children: self
                .children
                .iter()
                .flat_map(|child| child.map_text(transform))
                .collect(),
        }
    }

    /// Concatenated text of every text leaf beneath this element
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl Node {
    /// Create a text leaf
    pub fn text(text: &str) -> Self {
        Node::Text(text.to_string())
    }

    /// Map every text leaf through `transform`, splicing the returned
    /// nodes in place; non-text leaves are cloned through untouched
    pub fn map_text<F>(&self, transform: &F) -> Vec<Node>
    where
        F: Fn(&str) -> Vec<Node>,
    {
        match self {
            Node::Text(text) => transform(text),
            Node::Element(element) => vec![Node::Element(element.map_text(transform))],
            Node::Value(_) => vec![self.clone()],
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Node::Value(_) => {}
        }
    }
}
