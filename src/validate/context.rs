use bumpalo::Bump;
use hashbrown::HashMap;

use super::error::{NodeRef, ValidationError};
use super::type_info::{TypeInfo, TypeInfoVisitor, WithTypeInfo};
use crate::ast::*;
use crate::error::{Error, ErrorType, Result};
use crate::schema::{Schema, SchemaDirective, SchemaField, SchemaInputField, SchemaType, TypeRef};
use crate::visit::{FragmentMap, VisitFlow, VisitInfo, VisitNode, Visitor};

/// A single Variable usage somewhere in an operation or fragment: the variable node paired
/// with the input type expected at that position.
#[derive(Debug, Clone, Copy)]
pub struct VariableUsage<'a> {
    pub variable: &'a Variable<'a>,
    pub expected_type: Option<&'a TypeRef<'a>>,
}

/// The shared state of one validation run over one document.
///
/// The context owns the accumulated error list, a by-name fragment index built once at
/// construction, the live [`TypeInfo`] that the traversal keeps in sync, and memoized
/// variable-usage collections. Rules only ever read from the context and append errors;
/// neither the document nor the schema is ever mutated.
pub struct ValidationContext<'a> {
    pub arena: &'a Bump,
    schema: &'a Schema<'a>,
    document: &'a Document<'a>,
    fragments: &'a FragmentMap<'a>,
    pub(crate) type_info: TypeInfo<'a>,
    errors: Vec<ValidationError<'a>>,
    usage_cache: HashMap<usize, Vec<VariableUsage<'a>>>,
    recursive_usage_cache: HashMap<usize, Vec<VariableUsage<'a>>>,
}

impl<'a> ValidationContext<'a> {
    /// Create a new `ValidationContext` for one validation of `document` against `schema`.
    pub fn new(ctx: &'a ASTContext, schema: &'a Schema<'a>, document: &'a Document<'a>) -> Self {
        ValidationContext {
            arena: &ctx.arena,
            schema,
            document,
            fragments: ctx.alloc(document.fragments(ctx)),
            type_info: TypeInfo::new(),
            errors: Vec::new(),
            usage_cache: HashMap::new(),
            recursive_usage_cache: HashMap::new(),
        }
    }

    #[inline]
    pub fn schema(&self) -> &'a Schema<'a> {
        self.schema
    }

    #[inline]
    pub fn document(&self) -> &'a Document<'a> {
        self.document
    }

    /// The document's fragment index, keyed by fragment name.
    #[inline]
    pub fn fragments(&self) -> &'a FragmentMap<'a> {
        self.fragments
    }

    /// Looks up a fragment definition by name.
    #[inline]
    pub fn fragment(&self, name: &str) -> Option<&'a FragmentDefinition<'a>> {
        self.fragments.get(name).copied()
    }

    /// The type of the current position. See [`TypeInfo::current_type`].
    #[inline]
    pub fn current_type(&self) -> Option<&'a TypeRef<'a>> {
        self.type_info.current_type()
    }

    /// The named type enclosing the current selection. See [`TypeInfo::parent_type`].
    #[inline]
    pub fn parent_type(&self) -> Option<SchemaType<'a>> {
        self.type_info.parent_type()
    }

    /// The expected input type at the current position. See [`TypeInfo::input_type`].
    #[inline]
    pub fn input_type(&self) -> Option<&'a TypeRef<'a>> {
        self.type_info.input_type()
    }

    /// The definition of the currently visited field. See [`TypeInfo::field_def`].
    #[inline]
    pub fn field_def(&self) -> Option<&'a SchemaField<'a>> {
        self.type_info.field_def()
    }

    /// The definition of the currently visited directive. See [`TypeInfo::directive`].
    #[inline]
    pub fn directive(&self) -> Option<&'a SchemaDirective<'a>> {
        self.type_info.directive()
    }

    /// The definition of the currently visited argument. See [`TypeInfo::argument`].
    #[inline]
    pub fn argument_def(&self) -> Option<&'a SchemaInputField<'a>> {
        self.type_info.argument()
    }

    /// Record a rule violation against the given offending nodes.
    ///
    /// This is the only side effect a validation rule may have.
    pub fn report_error<S: AsRef<str>>(&mut self, message: S, nodes: Vec<NodeRef<'a>>) {
        let message = self.arena.alloc_str(message.as_ref());
        self.errors.push(ValidationError::new(message, nodes));
    }

    /// The rule violations recorded so far, in the order they were reported.
    pub fn errors(&self) -> &[ValidationError<'a>] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError<'a>> {
        self.errors
    }

    /// Convert the context into a result which carries an error if validation has failed on
    /// the current document.
    pub fn to_result(self) -> Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            let mut context = String::new();
            let mut is_first = true;
            for error in self.errors {
                if is_first {
                    is_first = false;
                } else {
                    context.push('\n');
                }
                context.push_str("- ");
                context.push_str(error.message);
            }
            Err(Error::new_with_context(
                "Document failed validation".to_string(),
                None,
                context,
                Some(ErrorType::GraphQL),
            ))
        }
    }

    /// Errors when the traversal left the type-info stack unbalanced, which indicates a
    /// defect in the engine rather than in the document.
    pub(crate) fn check_balanced(&self) -> Result<()> {
        if self.type_info.is_balanced() {
            Ok(())
        } else {
            Err(Error::new(
                "Type information stack was left unbalanced after traversal",
                Some(ErrorType::Internal),
            ))
        }
    }

    /// Every usage of a Variable value within `node`'s own selections, arguments, and
    /// directives, paired with the input type expected at that position. Fragment spreads
    /// are not followed. Results are memoized per node.
    pub fn variable_usages(
        &mut self,
        node: UsageSite<'a>,
    ) -> Vec<VariableUsage<'a>> {
        let key = node.key();
        if let Some(usages) = self.usage_cache.get(&key) {
            return usages.clone();
        }
        let mut usage_ctx = UsageContext {
            schema: self.schema,
            arena: self.arena,
            type_info: TypeInfo::new(),
            usages: Vec::new(),
        };
        let mut visitor = TypeInfoVisitor::new(UsageCollector {});
        match node {
            UsageSite::Operation(operation) => {
                operation.visit(&mut usage_ctx, &mut visitor);
            }
            UsageSite::Fragment(fragment) => {
                fragment.visit(&mut usage_ctx, &mut visitor);
            }
        }
        self.usage_cache.insert(key, usage_ctx.usages.clone());
        usage_ctx.usages
    }

    /// The union of [`ValidationContext::variable_usages`] for the operation and for every
    /// fragment transitively reachable from it through fragment spreads. Memoized per
    /// operation.
    pub fn recursive_variable_usages(
        &mut self,
        operation: &'a OperationDefinition<'a>,
    ) -> Vec<VariableUsage<'a>> {
        let key = operation as *const OperationDefinition<'a> as usize;
        if let Some(usages) = self.recursive_usage_cache.get(&key) {
            return usages.clone();
        }

        let mut usages = self.variable_usages(UsageSite::Operation(operation));
        let mut reached: Vec<&'a str> = Vec::new();
        let mut queue: Vec<&'a str> = Vec::new();
        gather_spread_names(&operation.selection_set, &mut queue);
        while let Some(name) = queue.pop() {
            if reached.contains(&name) {
                continue;
            }
            reached.push(name);
            if let Some(fragment) = self.fragment(name) {
                usages.extend(self.variable_usages(UsageSite::Fragment(fragment)));
                gather_spread_names(&fragment.selection_set, &mut queue);
            }
        }

        self.recursive_usage_cache.insert(key, usages.clone());
        usages
    }
}

/// A node variable usages can be collected from.
#[derive(Clone, Copy)]
pub enum UsageSite<'a> {
    Operation(&'a OperationDefinition<'a>),
    Fragment(&'a FragmentDefinition<'a>),
}

impl<'a> UsageSite<'a> {
    fn key(&self) -> usize {
        match self {
            UsageSite::Operation(operation) => {
                *operation as *const OperationDefinition<'a> as usize
            }
            UsageSite::Fragment(fragment) => *fragment as *const FragmentDefinition<'a> as usize,
        }
    }
}

impl<'a> WithTypeInfo<'a> for ValidationContext<'a> {
    #[inline]
    fn schema(&self) -> &'a Schema<'a> {
        self.schema
    }

    #[inline]
    fn arena(&self) -> &'a Bump {
        self.arena
    }

    #[inline]
    fn type_info(&mut self) -> &mut TypeInfo<'a> {
        &mut self.type_info
    }
}

/// Collects the names of all fragments spread directly within a selection set.
pub(crate) fn gather_spread_names<'a>(
    selection_set: &'a SelectionSet<'a>,
    out: &mut Vec<&'a str>,
) {
    for selection in selection_set.selections.iter() {
        match selection {
            Selection::FragmentSpread(spread) => out.push(spread.name.name),
            Selection::Field(field) => gather_spread_names(&field.selection_set, out),
            Selection::InlineFragment(inline_fragment) => {
                gather_spread_names(&inline_fragment.selection_set, out)
            }
        }
    }
}

struct UsageContext<'a> {
    schema: &'a Schema<'a>,
    arena: &'a Bump,
    type_info: TypeInfo<'a>,
    usages: Vec<VariableUsage<'a>>,
}

impl<'a> WithTypeInfo<'a> for UsageContext<'a> {
    #[inline]
    fn schema(&self) -> &'a Schema<'a> {
        self.schema
    }

    #[inline]
    fn arena(&self) -> &'a Bump {
        self.arena
    }

    #[inline]
    fn type_info(&mut self) -> &mut TypeInfo<'a> {
        &mut self.type_info
    }
}

struct UsageCollector {}

impl<'a> Visitor<'a, UsageContext<'a>> for UsageCollector {
    fn enter_variable(
        &mut self,
        ctx: &mut UsageContext<'a>,
        variable: &'a Variable<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let expected_type = ctx.type_info.input_type();
        ctx.usages.push(VariableUsage {
            variable,
            expected_type,
        });
        VisitFlow::Next
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::test_schema;
    use super::*;
    use crate::ast::ParseNode;

    #[test]
    fn variable_usages_pair_expected_types() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "query ($atOtherHomes: Boolean) { dog { isHousetrained(atOtherHomes: $atOtherHomes) } }",
        )
        .unwrap();
        let mut validation = ValidationContext::new(&ctx, schema, document);
        let operation = document.definitions[0].operation().unwrap();

        let usages = validation.variable_usages(UsageSite::Operation(operation));
        assert_eq!(usages.len(), 1);
        assert_eq!(usages[0].variable.name, "atOtherHomes");
        assert_eq!(usages[0].expected_type.unwrap().to_string(), "Boolean");
    }

    #[test]
    fn recursive_variable_usages_follow_spreads() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "query ($x: Boolean) { dog { ...FragA } }
             fragment FragA on Dog { ...FragB }
             fragment FragB on Dog { isHousetrained(atOtherHomes: $x) }",
        )
        .unwrap();
        let mut validation = ValidationContext::new(&ctx, schema, document);
        let operation = document.definitions[0].operation().unwrap();

        let usages = validation.recursive_variable_usages(operation);
        assert_eq!(usages.len(), 1);
        assert_eq!(usages[0].variable.name, "x");
        assert_eq!(usages[0].expected_type.unwrap().to_string(), "Boolean");

        // The memoized collection is stable across calls
        let again = validation.recursive_variable_usages(operation);
        assert_eq!(again.len(), 1);
    }

    #[test]
    fn fragment_index_is_built_once() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "{ dog { ...F } } fragment F on Dog { name }",
        )
        .unwrap();
        let validation = ValidationContext::new(&ctx, schema, document);
        assert!(validation.fragment("F").is_some());
        assert!(validation.fragment("G").is_none());
    }
}
