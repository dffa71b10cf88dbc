//! Syntax tree visitor recognizing environment variable reads.
//!
//! Every node is tested independently against the idiom catalog. The idioms
//! are mutually exclusive by shape, so a node matches at most one of them:
//!
//! | Idiom                         | Node        |
//! |-------------------------------|-------------|
//! | `os.getenv("KEY", ...)`       | `call`      |
//! | `os.environ.get("KEY", ...)`  | `call`      |
//! | `environ.get("KEY", ...)`     | `call`      |
//! | `os.environ["KEY"]`           | `subscript` |
//! | `environ["KEY"]`              | `subscript` |
//!
//! Matching is by spelling only; which spellings count comes from
//! [`EnvBindings`].

use tree_sitter::Node;

use super::FoundSet;
use super::bindings::{ENVIRON_MEMBER, EnvBindings};
use super::literal::string_constant;

const GETENV_ATTR: &str = "getenv";
const GET_ATTR: &str = "get";

/// Collects literal environment variable names from one syntax tree.
pub struct EnvVarVisitor<'a> {
    source: &'a [u8],
    bindings: &'a EnvBindings,

    // Results
    pub found: FoundSet,
}

impl<'a> EnvVarVisitor<'a> {
    pub fn new(source: &'a [u8], bindings: &'a EnvBindings) -> Self {
        Self {
            source,
            bindings,
            found: FoundSet::new(),
        }
    }

    /// Visit every node below (and including) `root`.
    pub fn visit_tree(&mut self, root: Node<'_>) {
        let mut cursor = root.walk();
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            match node.kind() {
                "call" => self.visit_call(node),
                "subscript" => self.visit_subscript(node),
                _ => {}
            }
            stack.extend(node.named_children(&mut cursor));
        }
    }

    fn visit_call(&mut self, call: Node<'_>) {
        let Some(function) = call.child_by_field_name("function").map(unwrap_parens) else {
            return;
        };
        if function.kind() != "attribute" {
            return;
        }
        let (Some(object), Some(attr)) = (
            function.child_by_field_name("object").map(unwrap_parens),
            function
                .child_by_field_name("attribute")
                .and_then(|n| self.text(n)),
        ) else {
            return;
        };

        let matched = match attr {
            // os.getenv(KEY)
            GETENV_ATTR => self.is_namespace(object),
            // os.environ.get(KEY) / environ.get(KEY)
            GET_ATTR => self.is_environ_member(object) || self.is_environ_alias(object),
            _ => false,
        };
        if !matched {
            return;
        }

        if let Some(key) = call
            .child_by_field_name("arguments")
            .and_then(first_positional_argument)
        {
            self.add_key(key);
        }
    }

    fn visit_subscript(&mut self, subscript: Node<'_>) {
        let Some(value) = subscript.child_by_field_name("value").map(unwrap_parens) else {
            return;
        };
        // os.environ[KEY] / environ[KEY]
        if !(self.is_environ_member(value) || self.is_environ_alias(value)) {
            return;
        }
        if let Some(key) = single_subscript_key(subscript) {
            self.add_key(key);
        }
    }

    fn add_key(&mut self, key: Node<'_>) {
        let key = unwrap_parens(key);
        if let Some(name) = string_constant(key, self.source)
            && !name.is_empty()
        {
            self.found.insert(name);
        }
    }

    /// `os`
    fn is_namespace(&self, node: Node<'_>) -> bool {
        node.kind() == "identifier"
            && self
                .text(node)
                .is_some_and(|name| self.bindings.is_namespace(name))
    }

    /// `environ`
    fn is_environ_alias(&self, node: Node<'_>) -> bool {
        node.kind() == "identifier"
            && self
                .text(node)
                .is_some_and(|name| self.bindings.is_environ_alias(name))
    }

    /// `os.environ`
    fn is_environ_member(&self, node: Node<'_>) -> bool {
        if node.kind() != "attribute" {
            return false;
        }
        let object = node.child_by_field_name("object").map(unwrap_parens);
        let attr = node
            .child_by_field_name("attribute")
            .and_then(|n| self.text(n));
        attr == Some(ENVIRON_MEMBER) && object.is_some_and(|object| self.is_namespace(object))
    }

    fn text(&self, node: Node<'_>) -> Option<&'a str> {
        node.utf8_text(self.source).ok()
    }
}

/// Strip redundant parentheses: `((x))` -> `x`.
fn unwrap_parens(mut node: Node<'_>) -> Node<'_> {
    while node.kind() == "parenthesized_expression" {
        let mut cursor = node.walk();
        let inner = node
            .named_children(&mut cursor)
            .find(|child| child.kind() != "comment");
        match inner {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

/// First positional argument of a call, if it can be a key at all.
///
/// Keyword arguments and `**` splats are not positional; a leading `*`
/// splat means the first positional value is unknown.
fn first_positional_argument(arguments: Node<'_>) -> Option<Node<'_>> {
    if arguments.kind() != "argument_list" {
        // Bare generator argument: `f(x for x in y)`
        return None;
    }
    let mut cursor = arguments.walk();
    let first = arguments
        .named_children(&mut cursor)
        .find(|arg| !matches!(arg.kind(), "comment" | "keyword_argument" | "dictionary_splat"))?;
    (first.kind() != "list_splat").then_some(first)
}

/// The key of `value[key]`, or `None` for tuple and slice keys.
fn single_subscript_key(subscript: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = subscript.walk();
    let has_comma = subscript
        .children(&mut cursor)
        .any(|child| child.kind() == ",");
    if has_comma {
        return None;
    }
    let mut keys = subscript.children_by_field_name("subscript", &mut cursor);
    let key = keys.next()?;
    if keys.next().is_some() || key.kind() == "slice" {
        return None;
    }
    Some(key)
}
