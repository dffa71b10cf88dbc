//! Names under which the environment module and its `environ` mapping are reachable.
//!
//! In `Names` mode the conventional spellings are taken at face value. In
//! `Imports` mode a first pass over the file's import statements records
//! which identifiers actually came from the module, one level deep:
//!
//! ```python
//! import os                     # namespace: os
//! import os.path                # namespace: os
//! import os as o                # namespace: o
//! from os import environ        # environ alias: environ
//! from os import environ as e   # environ alias: e
//! from os import *              # environ alias: environ
//! ```

use std::collections::HashSet;

use tree_sitter::Node;

use super::BindingMode;

/// Module providing environment access.
pub const ENV_MODULE: &str = "os";

/// Mapping attribute of [`ENV_MODULE`] holding the process environment.
pub const ENVIRON_MEMBER: &str = "environ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvBindings {
    /// Identifiers bound to the module itself.
    pub namespaces: HashSet<String>,
    /// Identifiers bound directly to the `environ` mapping.
    pub environ_aliases: HashSet<String>,
}

impl EnvBindings {
    /// The conventional spellings `os` and `environ`, without checking imports.
    pub fn conventional() -> Self {
        Self {
            namespaces: HashSet::from([ENV_MODULE.to_string()]),
            environ_aliases: HashSet::from([ENVIRON_MEMBER.to_string()]),
        }
    }

    /// Build bindings for a parsed file according to `mode`.
    pub fn for_mode(mode: BindingMode, root: Node<'_>, source: &[u8]) -> Self {
        match mode {
            BindingMode::Names => Self::conventional(),
            BindingMode::Imports => Self::from_imports(root, source),
        }
    }

    /// Collect bindings from every import statement in the tree, at any depth.
    pub fn from_imports(root: Node<'_>, source: &[u8]) -> Self {
        let mut bindings = Self::default();
        let mut cursor = root.walk();
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            match node.kind() {
                "import_statement" => bindings.collect_import(node, source),
                "import_from_statement" => bindings.collect_import_from(node, source),
                _ => stack.extend(node.named_children(&mut cursor)),
            }
        }

        bindings
    }

    pub fn is_namespace(&self, name: &str) -> bool {
        self.namespaces.contains(name)
    }

    pub fn is_environ_alias(&self, name: &str) -> bool {
        self.environ_aliases.contains(name)
    }

    /// `import os`, `import os.path`, `import os as o`
    fn collect_import(&mut self, node: Node<'_>, source: &[u8]) {
        let mut cursor = node.walk();
        for name in node.children_by_field_name("name", &mut cursor) {
            match name.kind() {
                "dotted_name" => {
                    // `import os.path` still binds `os` itself.
                    if first_segment(name, source) == Some(ENV_MODULE) {
                        self.namespaces.insert(ENV_MODULE.to_string());
                    }
                }
                "aliased_import" => {
                    let module = name.child_by_field_name("name").and_then(|n| text(n, source));
                    let alias = name.child_by_field_name("alias").and_then(|n| text(n, source));
                    if let (Some(ENV_MODULE), Some(alias)) = (module, alias) {
                        self.namespaces.insert(alias.to_string());
                    }
                }
                _ => {}
            }
        }
    }

    /// `from os import environ`, `from os import environ as e`, `from os import *`
    fn collect_import_from(&mut self, node: Node<'_>, source: &[u8]) {
        let module = node
            .child_by_field_name("module_name")
            .filter(|n| n.kind() == "dotted_name")
            .and_then(|n| text(n, source));
        if module != Some(ENV_MODULE) {
            return;
        }

        let mut cursor = node.walk();
        if node
            .named_children(&mut cursor)
            .any(|child| child.kind() == "wildcard_import")
        {
            self.environ_aliases.insert(ENVIRON_MEMBER.to_string());
        }

        for name in node.children_by_field_name("name", &mut cursor) {
            let (member, alias) = match name.kind() {
                "dotted_name" => (text(name, source), text(name, source)),
                "aliased_import" => (
                    name.child_by_field_name("name").and_then(|n| text(n, source)),
                    name.child_by_field_name("alias").and_then(|n| text(n, source)),
                ),
                _ => continue,
            };
            if let (Some(ENVIRON_MEMBER), Some(alias)) = (member, alias) {
                self.environ_aliases.insert(alias.to_string());
            }
        }
    }
}

fn text<'s>(node: Node<'_>, source: &'s [u8]) -> Option<&'s str> {
    node.utf8_text(source).ok()
}

fn first_segment<'s>(dotted: Node<'_>, source: &'s [u8]) -> Option<&'s str> {
    let mut cursor = dotted.walk();
    let first = dotted.named_children(&mut cursor).next()?;
    text(first, source)
}
