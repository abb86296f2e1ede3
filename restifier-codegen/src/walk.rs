//! The recursive traversal at the heart of the generator.
//!
//! One algorithm walks a nested object tree for every kind of output. What
//! varies between outputs lives in an [`EmissionPolicy`]: how a node opens,
//! how leaf fields and child references render, and whether declarations are
//! closed at all. The model and DTO emitters and the import scanner are all
//! policies over this single walk.

use restifier_schema::{Field, Node};

use crate::{Error, Result};

/// Traversal mode.
///
/// Code mode closes every declaration before its children's declarations
/// begin; import collection builds an unstructured set and never closes
/// anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Code,
    Imports,
}

/// What a policy decided at a node boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStep {
    /// Render this node and descend into its children
    Descend,
    /// Drop the node and its entire subtree from this policy's output
    Prune,
}

/// Per-traversal accumulator.
///
/// Every recursive call owns a fresh accumulator; parents absorb each
/// child's complete result after their own output.
pub trait Accumulate: Default {
    fn absorb(&mut self, child: Self);
}

impl Accumulate for String {
    fn absorb(&mut self, child: Self) {
        self.push_str(&child);
    }
}

/// One emission behavior over a nested object tree.
///
/// A policy bundles the four strategies the walk needs: opening a node,
/// rendering a leaf field, rendering a reference to a child, and the name
/// transform applied to emitted identifiers. Implementations write into the
/// accumulator they are handed; a policy that returns [`NodeStep::Prune`]
/// from [`open_node`](Self::open_node) must leave the accumulator untouched,
/// since the subtree's contribution is discarded wholesale.
pub trait EmissionPolicy {
    /// Accumulator built by one traversal under this policy.
    type Output: Accumulate;

    /// Traversal mode; decides whether declarations are closed.
    fn mode(&self) -> Mode;

    /// Open one node's declaration, or prune its subtree.
    fn open_node(&self, node: &Node, out: &mut Self::Output) -> Result<NodeStep>;

    /// Render one leaf member of the current node.
    fn format_field(&self, field: &Field, out: &mut Self::Output) -> Result<()>;

    /// Render the member line referencing a child inside its parent.
    ///
    /// This is a reference to the child's synthesized type, not the child's
    /// own body; the body follows as its own declaration.
    fn format_child_ref(&self, child: &Node, out: &mut Self::Output) -> Result<()>;

    /// Close the current declaration. Only consulted in [`Mode::Code`].
    fn close_node(&self, _node: &Node, _out: &mut Self::Output) {}

    /// Case transform applied to emitted identifiers.
    fn transform_name(&self, raw: &str) -> String {
        raw.to_string()
    }
}

/// Walk a tree under one policy and return its complete output.
///
/// Declarations flatten in pre-order: a node's own output comes first, then
/// each child's full subtree in declaration order. Fails without partial
/// output when the root is absent.
pub fn traverse<P: EmissionPolicy>(root: Option<&Node>, policy: &P) -> Result<P::Output> {
    let node = root.ok_or(Error::MissingNode)?;
    walk_node(node, policy)
}

fn walk_node<P: EmissionPolicy>(node: &Node, policy: &P) -> Result<P::Output> {
    let mut out = P::Output::default();

    if policy.open_node(node, &mut out)? == NodeStep::Prune {
        return Ok(P::Output::default());
    }

    for field in &node.fields {
        policy.format_field(field, &mut out)?;
    }
    for child in &node.children {
        policy.format_child_ref(child, &mut out)?;
    }

    if policy.mode() == Mode::Code {
        policy.close_node(node, &mut out);
    }

    for child in &node.children {
        out.absorb(walk_node(child, policy)?);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Text policy that traces the walk, pruning hidden nodes.
    struct Outline {
        mode: Mode,
    }

    impl EmissionPolicy for Outline {
        type Output = String;

        fn mode(&self) -> Mode {
            self.mode
        }

        fn open_node(&self, node: &Node, out: &mut String) -> Result<NodeStep> {
            if node.hidden {
                return Ok(NodeStep::Prune);
            }
            out.push_str(&format!("begin {}\n", node.name));
            Ok(NodeStep::Descend)
        }

        fn format_field(&self, field: &Field, out: &mut String) -> Result<()> {
            if field.ty == "boom" {
                return Err(Error::UnknownType {
                    token: field.ty.clone(),
                    context: format!("field '{}'", field.name),
                });
            }
            out.push_str(&format!("field {}\n", field.name));
            Ok(())
        }

        fn format_child_ref(&self, child: &Node, out: &mut String) -> Result<()> {
            out.push_str(&format!("ref {}\n", child.name));
            Ok(())
        }

        fn close_node(&self, node: &Node, out: &mut String) {
            out.push_str(&format!("end {}\n", node.name));
        }
    }

    fn field(name: &str, ty: &str) -> Field {
        Field {
            name: name.to_string(),
            ty: ty.to_string(),
            hidden: false,
        }
    }

    fn node(name: &str, hidden: bool, fields: &[&str], children: Vec<Node>) -> Node {
        Node {
            name: name.to_string(),
            hidden,
            fields: fields.iter().map(|f| field(f, "string")).collect(),
            children,
        }
    }

    #[test]
    fn test_pre_order_flattening() {
        let tree = node(
            "meta",
            false,
            &["note"],
            vec![
                node("audit", false, &["editor"], vec![node("stamp", false, &[], vec![])]),
                node("labels", false, &[], vec![]),
            ],
        );

        let out = traverse(Some(&tree), &Outline { mode: Mode::Code }).unwrap();

        assert_eq!(
            out,
            "begin meta\nfield note\nref audit\nref labels\nend meta\n\
             begin audit\nfield editor\nref stamp\nend audit\n\
             begin stamp\nend stamp\n\
             begin labels\nend labels\n"
        );
    }

    #[test]
    fn test_pruned_subtree_contributes_nothing() {
        let tree = node(
            "meta",
            false,
            &[],
            vec![node(
                "audit",
                true,
                &["editor"],
                vec![node("stamp", false, &[], vec![])],
            )],
        );

        let out = traverse(Some(&tree), &Outline { mode: Mode::Code }).unwrap();

        // The parent still references the child; whether that reference is
        // wanted is the policy's call, not the walk's.
        assert_eq!(out, "begin meta\nref audit\nend meta\n");
    }

    #[test]
    fn test_hidden_root_yields_empty_output() {
        let tree = node("meta", true, &["note"], vec![]);

        let out = traverse(Some(&tree), &Outline { mode: Mode::Code }).unwrap();

        assert_eq!(out, "");
    }

    #[test]
    fn test_imports_mode_never_closes() {
        let tree = node("meta", false, &["note"], vec![node("audit", false, &[], vec![])]);

        let out = traverse(Some(&tree), &Outline { mode: Mode::Imports }).unwrap();

        assert_eq!(out, "begin meta\nfield note\nref audit\nbegin audit\n");
    }

    #[test]
    fn test_missing_root_fails() {
        let err = traverse(None, &Outline { mode: Mode::Code }).unwrap_err();
        assert_eq!(err, Error::MissingNode);
    }

    #[test]
    fn test_traversal_is_deterministic() {
        let tree = node(
            "meta",
            false,
            &["a", "b"],
            vec![node("inner", false, &["c"], vec![])],
        );
        let policy = Outline { mode: Mode::Code };

        let first = traverse(Some(&tree), &policy).unwrap();
        let second = traverse(Some(&tree), &policy).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_field_error_propagates() {
        let mut tree = node("meta", false, &[], vec![]);
        tree.fields.push(field("bad", "boom"));

        let err = traverse(Some(&tree), &Outline { mode: Mode::Code }).unwrap_err();

        assert!(matches!(err, Error::UnknownType { .. }));
    }
}
