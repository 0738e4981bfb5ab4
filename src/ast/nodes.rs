use std::fmt;

use regex::Regex;

use crate::registry::{Converter, Extractor, Predicate};

/// Compiled selector tree.
///
/// Nodes hold direct references into the registry tables, so a tree that
/// exists has already passed name resolution. Trees are immutable once the
/// parser returns them.
#[derive(Debug, Clone)]
pub enum Node {
    /// Disjunction of two or more children, in source order
    ///
    /// # Example
    /// ```text
    /// private | protected | package
    /// ```
    Or(Vec<Node>),

    /// Conjunction of two or more children, in source order
    ///
    /// # Example
    /// ```text
    /// private & final
    /// ```
    And(Vec<Node>),

    /// Negation
    ///
    /// # Example
    /// ```text
    /// !static
    /// ```
    Not(Box<Node>),

    /// Evaluate `child` against the subject produced by `converter`
    ///
    /// # Example
    /// ```text
    /// declaringClass -> (interface | abstract)
    /// ```
    Converted {
        converter: &'static Converter,
        child: Box<Node>,
    },

    /// Named predicate, including the literals `true`, `false` and `null`
    Terminal(&'static Predicate),

    /// Pattern search over the text produced by `extractor`
    ///
    /// # Example
    /// ```text
    /// simpleName ~ /^Test/
    /// ```
    Regex {
        extractor: &'static Extractor,
        pattern: Regex,
    },
}

impl Node {
    /// Build a disjunction. Duplicate children are dropped (first occurrence
    /// wins) and a single remaining child is returned as is.
    pub fn or(children: Vec<Node>) -> Node {
        match <[Node; 1]>::try_from(dedup(children)) {
            Ok([only]) => only,
            Err(children) => Node::Or(children),
        }
    }

    /// Build a conjunction; see [`Node::or`].
    pub fn and(children: Vec<Node>) -> Node {
        match <[Node; 1]>::try_from(dedup(children)) {
            Ok([only]) => only,
            Err(children) => Node::And(children),
        }
    }

    pub fn not(child: Node) -> Node {
        Node::Not(Box::new(child))
    }

    pub fn converted(converter: &'static Converter, child: Node) -> Node {
        Node::Converted {
            converter,
            child: Box::new(child),
        }
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Node::Or(children) | Node::And(children) => {
                1 + children.iter().map(Node::node_count).sum::<usize>()
            }
            Node::Not(child) | Node::Converted { child, .. } => 1 + child.node_count(),
            Node::Terminal(_) | Node::Regex { .. } => 1,
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Node::Converted { .. } => 0,
            Node::Or(_) => 1,
            Node::And(_) => 2,
            Node::Not(_) => 3,
            Node::Terminal(_) | Node::Regex { .. } => 4,
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        if self.precedence() < min {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

fn dedup(children: Vec<Node>) -> Vec<Node> {
    let mut unique: Vec<Node> = Vec::with_capacity(children.len());
    for child in children {
        if !unique.contains(&child) {
            unique.push(child);
        }
    }
    unique
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Or(a), Node::Or(b)) | (Node::And(a), Node::And(b)) => a == b,
            (Node::Not(a), Node::Not(b)) => a == b,
            (
                Node::Converted {
                    converter: c1,
                    child: a,
                },
                Node::Converted {
                    converter: c2,
                    child: b,
                },
            ) => c1.name == c2.name && a == b,
            (Node::Terminal(a), Node::Terminal(b)) => a.name == b.name,
            (
                Node::Regex {
                    extractor: e1,
                    pattern: p1,
                },
                Node::Regex {
                    extractor: e2,
                    pattern: p2,
                },
            ) => e1.name == e2.name && p1.as_str() == p2.as_str(),
            _ => false,
        }
    }
}

impl Eq for Node {}

/// Renders the tree back to expression syntax. The output compiles to an
/// equal tree.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Or(children) | Node::And(children) => {
                let (separator, min) = match self {
                    Node::Or(_) => (" | ", 2),
                    _ => (" & ", 3),
                };
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(separator)?;
                    }
                    child.fmt_operand(f, min)?;
                }
                Ok(())
            }
            Node::Not(child) => {
                f.write_str("!")?;
                child.fmt_operand(f, 4)
            }
            Node::Converted { converter, child } => write!(f, "{} -> {child}", converter.name),
            Node::Terminal(predicate) => f.write_str(predicate.name),
            Node::Regex { extractor, pattern } => write!(
                f,
                "{} ~ /{}/",
                extractor.name,
                pattern.as_str().replace('/', "\\/")
            ),
        }
    }
}
