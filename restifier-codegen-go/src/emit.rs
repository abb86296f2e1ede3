//! Code-mode emission policies for nested object declarations.

use restifier_codegen::{
    EmissionPolicy, Error, Mode, NodeStep, Resolution, Result, TargetType, TypeTable,
};
use restifier_core::to_pascal_case;
use restifier_schema::{Field, Node};

use crate::naming::object_type_name;

/// Append one struct member line.
pub(crate) fn member(out: &mut String, member: &str, go_type: &str, tag: &str, raw: &str) {
    out.push_str(&format!("\t{member} {go_type} `{tag}:\"{raw}\"`\n"));
}

/// Resolve a leaf field's token to its scalar target type.
///
/// The structured token is rejected here: objects nest through child nodes,
/// never through leaf fields.
pub(crate) fn scalar_for(types: &TypeTable, field: &Field) -> Result<TargetType> {
    match types.resolve(&field.ty, &format!("field '{}'", field.name))? {
        Resolution::Scalar(ty) => Ok(ty),
        Resolution::Object => Err(Error::ObjectField {
            field: field.name.clone(),
        }),
    }
}

/// Renders model declarations: every node, field and child reference in the
/// tree, hidden or not.
pub struct ModelEmitter<'a> {
    table: &'a str,
    types: &'a TypeTable,
}

impl<'a> ModelEmitter<'a> {
    pub fn new(table: &'a str, types: &'a TypeTable) -> Self {
        Self { table, types }
    }
}

impl EmissionPolicy for ModelEmitter<'_> {
    type Output = String;

    fn mode(&self) -> Mode {
        Mode::Code
    }

    fn open_node(&self, node: &Node, out: &mut String) -> Result<NodeStep> {
        out.push_str(&format!(
            "type {} struct {{\n",
            object_type_name(self.table, &node.name)
        ));
        Ok(NodeStep::Descend)
    }

    fn format_field(&self, field: &Field, out: &mut String) -> Result<()> {
        let ty = scalar_for(self.types, field)?;
        member(out, &self.transform_name(&field.name), &ty.name, "json", &field.name);
        Ok(())
    }

    fn format_child_ref(&self, child: &Node, out: &mut String) -> Result<()> {
        member(
            out,
            &self.transform_name(&child.name),
            &object_type_name(self.table, &child.name),
            "json",
            &child.name,
        );
        Ok(())
    }

    fn close_node(&self, _node: &Node, out: &mut String) {
        out.push_str("}\n\n");
    }

    fn transform_name(&self, raw: &str) -> String {
        to_pascal_case(raw)
    }
}

/// Renders DTO declarations: the model layout with hidden parts removed.
///
/// A hidden node prunes its whole subtree; hidden fields and hidden child
/// references are dropped from their parent before their tokens are ever
/// resolved.
pub struct DtoEmitter<'a> {
    table: &'a str,
    types: &'a TypeTable,
}

impl<'a> DtoEmitter<'a> {
    pub fn new(table: &'a str, types: &'a TypeTable) -> Self {
        Self { table, types }
    }
}

impl EmissionPolicy for DtoEmitter<'_> {
    type Output = String;

    fn mode(&self) -> Mode {
        Mode::Code
    }

    fn open_node(&self, node: &Node, out: &mut String) -> Result<NodeStep> {
        if node.hidden {
            return Ok(NodeStep::Prune);
        }
        out.push_str(&format!(
            "type {} struct {{\n",
            object_type_name(self.table, &node.name)
        ));
        Ok(NodeStep::Descend)
    }

    fn format_field(&self, field: &Field, out: &mut String) -> Result<()> {
        if field.hidden {
            return Ok(());
        }
        let ty = scalar_for(self.types, field)?;
        member(out, &self.transform_name(&field.name), &ty.name, "json", &field.name);
        Ok(())
    }

    fn format_child_ref(&self, child: &Node, out: &mut String) -> Result<()> {
        if child.hidden {
            return Ok(());
        }
        member(
            out,
            &self.transform_name(&child.name),
            &object_type_name(self.table, &child.name),
            "json",
            &child.name,
        );
        Ok(())
    }

    fn close_node(&self, _node: &Node, out: &mut String) {
        out.push_str("}\n\n");
    }

    fn transform_name(&self, raw: &str) -> String {
        to_pascal_case(raw)
    }
}

#[cfg(test)]
mod tests {
    use restifier_codegen::traverse;

    use super::*;
    use crate::types::builtin_types;

    fn meta_node() -> Node {
        Node {
            name: "meta".into(),
            hidden: false,
            fields: vec![
                Field {
                    name: "note".into(),
                    ty: "string".into(),
                    hidden: false,
                },
                Field {
                    name: "internal_ref".into(),
                    ty: "string".into(),
                    hidden: true,
                },
            ],
            children: vec![Node {
                name: "audit".into(),
                hidden: true,
                fields: vec![Field {
                    name: "touched_at".into(),
                    ty: "timestamp".into(),
                    hidden: false,
                }],
                children: vec![],
            }],
        }
    }

    #[test]
    fn model_renders_every_member() {
        let types = builtin_types();
        let emitter = ModelEmitter::new("invoice", &types);

        let out = traverse(Some(&meta_node()), &emitter).unwrap();
        assert_eq!(
            out,
            "type Invoice_MetaOBJ struct {\n\
             \tNote string `json:\"note\"`\n\
             \tInternalRef string `json:\"internal_ref\"`\n\
             \tAudit Invoice_AuditOBJ `json:\"audit\"`\n\
             }\n\n\
             type Invoice_AuditOBJ struct {\n\
             \tTouchedAt time.Time `json:\"touched_at\"`\n\
             }\n\n"
        );
    }

    #[test]
    fn dto_prunes_hidden_members_and_subtrees() {
        let types = builtin_types();
        let emitter = DtoEmitter::new("invoice", &types);

        let out = traverse(Some(&meta_node()), &emitter).unwrap();
        assert_eq!(
            out,
            "type Invoice_MetaOBJ struct {\n\tNote string `json:\"note\"`\n}\n\n"
        );
    }

    #[test]
    fn dto_of_hidden_root_is_empty() {
        let mut node = meta_node();
        node.hidden = true;

        let types = builtin_types();
        let out = traverse(Some(&node), &DtoEmitter::new("invoice", &types)).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn unknown_field_token_fails() {
        let mut node = meta_node();
        node.fields[0].ty = "uuid".into();

        let types = builtin_types();
        let err = traverse(Some(&node), &ModelEmitter::new("invoice", &types)).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownType {
                token: "uuid".into(),
                context: "field 'note'".into(),
            }
        );
    }

    #[test]
    fn object_token_on_a_field_fails() {
        let mut node = meta_node();
        node.fields[0].ty = "json".into();

        let types = builtin_types();
        let err = traverse(Some(&node), &ModelEmitter::new("invoice", &types)).unwrap_err();
        assert_eq!(err, Error::ObjectField { field: "note".into() });
    }
}
