use crate::ast::*;
use crate::error::Result;
use bumpalo::collections::Vec;

/// Trait for a folder that is called back while an AST is rebuilt node by node.
///
/// A Folder traverses a GraphQL AST top-to-bottom, depth-first, and produces an entirely new
/// copy of the AST inside the same arena, replacing nodes with whatever the folder's callbacks
/// return. The input AST remains untouched, so a folder expresses the "replace with value"
/// action of a traversal without ever mutating the tree being read.
///
/// All callbacks have a default implementation that returns the input node unchanged, so an
/// empty folder makes a plain copy. The [`Folder::selection`] and [`Folder::definition`]
/// callbacks return an `Option` and may return `None` to drop the node from the new tree,
/// which expresses the "delete" action. Callbacks return a [Result] and may error to stop
/// the fold.
///
/// This pattern is applicable to any AST node that implements the [`FoldNode`] trait.
pub trait Folder<'a> {
    fn operation(
        &mut self,
        _ctx: &'a ASTContext,
        operation: OperationDefinition<'a>,
    ) -> Result<OperationDefinition<'a>> {
        Ok(operation)
    }

    fn fragment(
        &mut self,
        _ctx: &'a ASTContext,
        fragment: FragmentDefinition<'a>,
    ) -> Result<FragmentDefinition<'a>> {
        Ok(fragment)
    }

    /// Folds a definition after its contents were folded; `None` drops it from the document.
    fn definition(
        &mut self,
        _ctx: &'a ASTContext,
        definition: Definition<'a>,
    ) -> Result<Option<Definition<'a>>> {
        Ok(Some(definition))
    }

    /// Folds a selection after its contents were folded; `None` drops it from the
    /// selection set.
    fn selection(
        &mut self,
        _ctx: &'a ASTContext,
        selection: Selection<'a>,
    ) -> Result<Option<Selection<'a>>> {
        Ok(Some(selection))
    }

    fn field(&mut self, _ctx: &'a ASTContext, field: Field<'a>) -> Result<Field<'a>> {
        Ok(field)
    }

    fn fragment_spread(
        &mut self,
        _ctx: &'a ASTContext,
        spread: FragmentSpread<'a>,
    ) -> Result<FragmentSpread<'a>> {
        Ok(spread)
    }

    fn inline_fragment(
        &mut self,
        _ctx: &'a ASTContext,
        inline_fragment: InlineFragment<'a>,
    ) -> Result<InlineFragment<'a>> {
        Ok(inline_fragment)
    }

    fn variable_definition(
        &mut self,
        _ctx: &'a ASTContext,
        var_def: VariableDefinition<'a>,
    ) -> Result<VariableDefinition<'a>> {
        Ok(var_def)
    }

    fn directive(&mut self, _ctx: &'a ASTContext, directive: Directive<'a>) -> Result<Directive<'a>> {
        Ok(directive)
    }

    fn argument(&mut self, _ctx: &'a ASTContext, argument: Argument<'a>) -> Result<Argument<'a>> {
        Ok(argument)
    }

    fn value(&mut self, _ctx: &'a ASTContext, value: Value<'a>) -> Result<Value<'a>> {
        Ok(value)
    }

    fn named_type(&mut self, _ctx: &'a ASTContext, named_type: NamedType<'a>) -> Result<NamedType<'a>> {
        Ok(named_type)
    }
}

/// Trait for folding an AST node into a new, transformed copy of itself using a [Folder].
pub trait FoldNode<'a>: Sized {
    /// Folds a new AST node from this node using the given folder and allocates it on the
    /// AST context's arena.
    fn fold<F: Folder<'a>>(&'a self, ctx: &'a ASTContext, folder: &mut F) -> Result<&'a Self>;
}

fn fold_arguments<'a, F: Folder<'a>>(
    arguments: &'a Arguments<'a>,
    ctx: &'a ASTContext,
    folder: &mut F,
) -> Result<Arguments<'a>> {
    let mut children = Vec::new_in(&ctx.arena);
    for argument in arguments.children.iter() {
        let value = folder.value(ctx, argument.value.clone())?;
        children.push(folder.argument(
            ctx,
            Argument {
                name: argument.name,
                value,
                location: argument.location,
            },
        )?);
    }
    Ok(Arguments { children })
}

fn fold_directives<'a, F: Folder<'a>>(
    directives: &'a Directives<'a>,
    ctx: &'a ASTContext,
    folder: &mut F,
) -> Result<Directives<'a>> {
    let mut children = Vec::new_in(&ctx.arena);
    for directive in directives.children.iter() {
        let arguments = fold_arguments(&directive.arguments, ctx, folder)?;
        children.push(folder.directive(
            ctx,
            Directive {
                name: directive.name,
                arguments,
                location: directive.location,
            },
        )?);
    }
    Ok(Directives { children })
}

fn fold_selection_set<'a, F: Folder<'a>>(
    selection_set: &'a SelectionSet<'a>,
    ctx: &'a ASTContext,
    folder: &mut F,
) -> Result<SelectionSet<'a>> {
    let mut selections = Vec::new_in(&ctx.arena);
    for selection in selection_set.selections.iter() {
        let folded = match selection {
            Selection::Field(field) => Selection::Field(fold_field(field, ctx, folder)?),
            Selection::FragmentSpread(spread) => {
                let name = folder.named_type(ctx, spread.name)?;
                let directives = fold_directives(&spread.directives, ctx, folder)?;
                Selection::FragmentSpread(folder.fragment_spread(
                    ctx,
                    FragmentSpread {
                        name,
                        directives,
                        location: spread.location,
                    },
                )?)
            }
            Selection::InlineFragment(inline_fragment) => {
                let type_condition = match inline_fragment.type_condition {
                    Some(type_condition) => Some(folder.named_type(ctx, type_condition)?),
                    None => None,
                };
                let directives = fold_directives(&inline_fragment.directives, ctx, folder)?;
                let selection_set =
                    fold_selection_set(&inline_fragment.selection_set, ctx, folder)?;
                Selection::InlineFragment(folder.inline_fragment(
                    ctx,
                    InlineFragment {
                        type_condition,
                        directives,
                        selection_set,
                        location: inline_fragment.location,
                    },
                )?)
            }
        };
        if let Some(selection) = folder.selection(ctx, folded)? {
            selections.push(selection);
        }
    }
    Ok(SelectionSet {
        selections,
        location: selection_set.location,
    })
}

fn fold_field<'a, F: Folder<'a>>(
    field: &'a Field<'a>,
    ctx: &'a ASTContext,
    folder: &mut F,
) -> Result<Field<'a>> {
    let arguments = fold_arguments(&field.arguments, ctx, folder)?;
    let directives = fold_directives(&field.directives, ctx, folder)?;
    let selection_set = fold_selection_set(&field.selection_set, ctx, folder)?;
    folder.field(
        ctx,
        Field {
            alias: field.alias,
            name: field.name,
            arguments,
            directives,
            selection_set,
            location: field.location,
        },
    )
}

fn fold_variable_definitions<'a, F: Folder<'a>>(
    var_defs: &'a VariableDefinitions<'a>,
    ctx: &'a ASTContext,
    folder: &mut F,
) -> Result<VariableDefinitions<'a>> {
    let mut children = Vec::new_in(&ctx.arena);
    for var_def in var_defs.children.iter() {
        let default_value = match &var_def.default_value {
            Some(value) => Some(folder.value(ctx, value.clone())?),
            None => None,
        };
        let directives = fold_directives(&var_def.directives, ctx, folder)?;
        children.push(folder.variable_definition(
            ctx,
            VariableDefinition {
                variable: var_def.variable,
                of_type: var_def.of_type,
                default_value,
                directives,
                location: var_def.location,
            },
        )?);
    }
    Ok(VariableDefinitions { children })
}

impl<'a> FoldNode<'a> for Document<'a> {
    fn fold<F: Folder<'a>>(&'a self, ctx: &'a ASTContext, folder: &mut F) -> Result<&'a Self> {
        let mut definitions = Vec::new_in(&ctx.arena);
        for definition in self.definitions.iter() {
            let folded = match definition {
                Definition::Operation(operation) => {
                    let variable_definitions = fold_variable_definitions(
                        &operation.variable_definitions,
                        ctx,
                        folder,
                    )?;
                    let directives = fold_directives(&operation.directives, ctx, folder)?;
                    let selection_set =
                        fold_selection_set(&operation.selection_set, ctx, folder)?;
                    let operation = folder.operation(
                        ctx,
                        OperationDefinition {
                            operation: operation.operation,
                            name: operation.name,
                            variable_definitions,
                            directives,
                            selection_set,
                            location: operation.location,
                        },
                    )?;
                    Definition::Operation(operation)
                }
                Definition::Fragment(fragment) => {
                    let name = folder.named_type(ctx, fragment.name)?;
                    let type_condition = folder.named_type(ctx, fragment.type_condition)?;
                    let directives = fold_directives(&fragment.directives, ctx, folder)?;
                    let selection_set = fold_selection_set(&fragment.selection_set, ctx, folder)?;
                    let fragment = folder.fragment(
                        ctx,
                        FragmentDefinition {
                            name,
                            type_condition,
                            directives,
                            selection_set,
                            location: fragment.location,
                        },
                    )?;
                    Definition::Fragment(fragment)
                }
            };
            if let Some(definition) = folder.definition(ctx, folded)? {
                definitions.push(definition);
            }
        }
        Ok(ctx.alloc(Document {
            definitions,
            size_hint: self.size_hint,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ParseNode, PrintNode};

    #[derive(Default)]
    struct RenameFields {}

    impl<'a> Folder<'a> for RenameFields {
        fn field(&mut self, _ctx: &'a ASTContext, field: Field<'a>) -> Result<Field<'a>> {
            Ok(Field {
                name: "oomph",
                ..field
            })
        }
    }

    #[test]
    fn identity_fold_copies() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, "query ($v: Int = 2) { a(x: $v) @skip(if: true) { b } }")
            .unwrap();
        struct Identity {}
        impl<'a> Folder<'a> for Identity {}
        let folded = ast.fold(&ctx, &mut Identity {}).unwrap();
        assert_eq!(folded.print(), ast.print());
        assert!(!std::ptr::eq(folded, ast));
    }

    #[test]
    fn replaces_nodes_without_mutating_the_input() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, "{ a { b } }").unwrap();
        let folded = ast.fold(&ctx, &mut RenameFields::default()).unwrap();
        assert_eq!(folded.print(), "{\n  oomph {\n    oomph\n  }\n}");
        assert_eq!(ast.print(), "{\n  a {\n    b\n  }\n}");
    }

    #[test]
    fn deletes_selections() {
        struct DropSpreads {}
        impl<'a> Folder<'a> for DropSpreads {
            fn selection(
                &mut self,
                _ctx: &'a ASTContext,
                selection: Selection<'a>,
            ) -> Result<Option<Selection<'a>>> {
                Ok(match selection {
                    Selection::FragmentSpread(_) => None,
                    other => Some(other),
                })
            }
        }

        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, "{ a ...F b }").unwrap();
        let folded = ast.fold(&ctx, &mut DropSpreads {}).unwrap();
        assert_eq!(folded.print(), "{\n  a\n  b\n}");
    }
}
