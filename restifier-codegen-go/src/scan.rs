//! Imports-mode policy: collects the import set of a nested tree.

use restifier_codegen::{EmissionPolicy, ImportSet, Mode, NodeStep, Result, TypeTable};
use restifier_schema::{Field, Node};

use crate::emit::scalar_for;

/// Collects every import the declarations for a tree can need.
///
/// Hidden flags are ignored: the scan covers the full subtree, so the set
/// is a property of the tree rather than of any one rendering of it.
pub struct ImportScanner<'a> {
    types: &'a TypeTable,
}

impl<'a> ImportScanner<'a> {
    pub fn new(types: &'a TypeTable) -> Self {
        Self { types }
    }
}

impl EmissionPolicy for ImportScanner<'_> {
    type Output = ImportSet;

    fn mode(&self) -> Mode {
        Mode::Imports
    }

    fn open_node(&self, _node: &Node, _out: &mut ImportSet) -> Result<NodeStep> {
        Ok(NodeStep::Descend)
    }

    fn format_field(&self, field: &Field, out: &mut ImportSet) -> Result<()> {
        if let Some(import) = scalar_for(self.types, field)?.import {
            out.add(import);
        }
        Ok(())
    }

    fn format_child_ref(&self, _child: &Node, _out: &mut ImportSet) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use restifier_codegen::traverse;
    use restifier_schema::{Field, Node};

    use super::*;
    use crate::types::builtin_types;

    fn field(name: &str, ty: &str) -> Field {
        Field {
            name: name.into(),
            ty: ty.into(),
            hidden: false,
        }
    }

    #[test]
    fn deduplicates_across_levels() {
        let tree = Node {
            name: "meta".into(),
            hidden: false,
            fields: vec![field("created", "timestamp")],
            children: vec![Node {
                name: "audit".into(),
                hidden: false,
                fields: vec![field("touched", "datetime")],
                children: vec![],
            }],
        };

        let types = builtin_types();
        let imports = traverse(Some(&tree), &ImportScanner::new(&types)).unwrap();
        assert_eq!(imports.sorted(), vec!["time"]);
    }

    #[test]
    fn hidden_subtrees_still_contribute() {
        let tree = Node {
            name: "meta".into(),
            hidden: true,
            fields: vec![field("touched", "timestamp")],
            children: vec![],
        };

        let types = builtin_types();
        let imports = traverse(Some(&tree), &ImportScanner::new(&types)).unwrap();
        assert!(imports.contains("time"));
    }

    #[test]
    fn importless_trees_yield_the_empty_set() {
        let tree = Node {
            name: "meta".into(),
            hidden: false,
            fields: vec![field("note", "string"), field("count", "int")],
            children: vec![],
        };

        let types = builtin_types();
        let imports = traverse(Some(&tree), &ImportScanner::new(&types)).unwrap();
        assert!(imports.is_empty());
    }
}
