use thiserror::Error;
use tree_sitter::{Node, Parser, Tree};

/// Why a source file could not be turned into a usable syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("failed to load the Python grammar: {0}")]
    Grammar(String),

    #[error("parser produced no syntax tree")]
    NoTree,

    /// Positions are 1-based.
    #[error("invalid syntax at line {line}, column {column}")]
    Syntax { line: usize, column: usize },
}

/// A successfully parsed Python source.
///
/// Owns both the text and the tree, since node text is read back from the
/// source bytes during extraction.
pub struct ParsedPython {
    pub source: String,
    pub tree: Tree,
}

impl ParsedPython {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }
}

/// Parse Python source text into a syntax tree.
///
/// tree-sitter recovers from syntax errors instead of failing, so any tree
/// carrying an error or missing node is rejected as `ParseError::Syntax`.
pub fn parse_python_source(source: impl Into<String>) -> Result<ParsedPython, ParseError> {
    let mut source = source.into();
    if source.starts_with('\u{feff}') {
        source.remove(0);
    }

    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| ParseError::Grammar(e.to_string()))?;

    let tree = parser.parse(&source, None).ok_or(ParseError::NoTree)?;

    if tree.root_node().has_error() {
        let (line, column) = first_error_position(tree.root_node());
        return Err(ParseError::Syntax { line, column });
    }

    Ok(ParsedPython { source, tree })
}

/// Locate the first error or missing node in document order.
fn first_error_position(root: Node<'_>) -> (usize, usize) {
    let mut cursor = root.walk();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let point = node.start_position();
            return (point.row + 1, point.column + 1);
        }
        if node.has_error() {
            let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
            // Reverse so the leftmost child is visited first.
            stack.extend(children.into_iter().rev());
        }
    }

    let point = root.start_position();
    (point.row + 1, point.column + 1)
}
