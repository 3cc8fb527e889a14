use super::context::ValidationContext;
use super::error::ValidationError;
use super::rules::*;
use super::type_info::TypeInfoVisitor;
use crate::ast::{ASTContext, DefaultIn, Document};
use crate::error::Result;
use crate::schema::Schema;
use crate::visit::{ComposedVisitor, VisitNode, Visitor};

/// Trait for a `ValidationRule` that checks a GraphQL document against a schema using a
/// visitor.
///
/// A rule always implements a visitor and accepts the [`ValidationContext`] structure as its
/// passed context. Whatever per-document state a rule needs lives on the rule struct itself
/// and is created fresh through [`DefaultIn`] for every validation, so no state leaks from
/// one document to the next.
///
/// Rules that inspect variable usages through fragment spreads set
/// [`ValidationRule::VISITS_SPREAD_FRAGMENTS`] and are traversed in the engine's
/// fragment-spread expansion mode.
pub trait ValidationRule<'a>: Visitor<'a, ValidationContext<'a>> + DefaultIn<'a> {
    /// Whether this rule's traversal descends from fragment spreads into the spread
    /// fragments' definitions.
    const VISITS_SPREAD_FRAGMENTS: bool = false;

    /// Run this `ValidationRule` against the given document and return a result which errors
    /// if the rule fails on the document.
    fn validate(
        ctx: &'a ASTContext,
        schema: &'a Schema<'a>,
        document: &'a Document<'a>,
    ) -> Result<()> {
        let mut validation = ValidationContext::new(ctx, schema, document);
        Self::run(&mut validation, document);
        validation.to_result()
    }

    /// Run this `ValidationRule` against the given document and return the violations it
    /// reported.
    fn errors(
        ctx: &'a ASTContext,
        schema: &'a Schema<'a>,
        document: &'a Document<'a>,
    ) -> Vec<ValidationError<'a>> {
        let mut validation = ValidationContext::new(ctx, schema, document);
        Self::run(&mut validation, document);
        validation.into_errors()
    }

    /// Runs this rule on an existing context; used by [`validate`] to fuse rules into
    /// shared passes.
    fn run(validation: &mut ValidationContext<'a>, document: &'a Document<'a>) {
        let mut visitor = TypeInfoVisitor::new(Self::default_in(validation.arena));
        if Self::VISITS_SPREAD_FRAGMENTS {
            let fragments = validation.fragments();
            document.visit_with_fragments(validation, &mut visitor, fragments);
        } else {
            document.visit(validation, &mut visitor);
        }
    }
}

impl<'a, A, B> DefaultIn<'a> for ComposedVisitor<'a, ValidationContext<'a>, A, B>
where
    A: ValidationRule<'a>,
    B: ValidationRule<'a>,
{
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        ComposedVisitor::new(A::default_in(arena), B::default_in(arena))
    }
}

impl<'a, A, B> ValidationRule<'a> for ComposedVisitor<'a, ValidationContext<'a>, A, B>
where
    A: ValidationRule<'a>,
    B: ValidationRule<'a>,
{
    const VISITS_SPREAD_FRAGMENTS: bool =
        A::VISITS_SPREAD_FRAGMENTS || B::VISITS_SPREAD_FRAGMENTS;
}

/// Validates a document against a schema with the full specified rule set and returns every
/// rule violation found, in the order the rules reported them.
///
/// Validation never stops at the first violation; all rules run to completion so the caller
/// sees as many errors as possible. A document that produces an empty list may safely be
/// executed.
///
/// Most rules run fused into a single traversal. The rules that analyze variable usages
/// across fragment boundaries run in a second traversal in fragment-spread expansion mode.
/// An `Err` is only returned for a defect in the traversal engine itself, never for a
/// problem with the document.
pub fn validate<'a>(
    ctx: &'a ASTContext,
    schema: &'a Schema<'a>,
    document: &'a Document<'a>,
) -> Result<Vec<ValidationError<'a>>> {
    let arena = &ctx.arena;
    let mut validation = ValidationContext::new(ctx, schema, document);

    let rules = ArgumentsOfCorrectType::default_in(arena)
        .compose(DefaultValuesOfCorrectType::default_in(arena))
        .compose(FieldsOnCorrectType::default_in(arena))
        .compose(FragmentsOnCompositeTypes::default_in(arena))
        .compose(KnownArgumentNames::default_in(arena))
        .compose(KnownDirectives::default_in(arena))
        .compose(KnownFragmentNames::default_in(arena))
        .compose(KnownTypeNames::default_in(arena))
        .compose(LoneAnonymousOperation::default_in(arena))
        .compose(NoFragmentCycles::default_in(arena))
        .compose(NoUnusedFragments::default_in(arena))
        .compose(OverlappingFieldsCanBeMerged::default_in(arena))
        .compose(PossibleFragmentSpreads::default_in(arena))
        .compose(ProvidedNonNullArguments::default_in(arena))
        .compose(ScalarLeafs::default_in(arena))
        .compose(UniqueArgumentNames::default_in(arena))
        .compose(UniqueFragmentNames::default_in(arena))
        .compose(UniqueInputFieldNames::default_in(arena))
        .compose(UniqueOperationNames::default_in(arena))
        .compose(UniqueVariableNames::default_in(arena))
        .compose(VariablesAreInputTypes::default_in(arena));
    let mut visitor = TypeInfoVisitor::new(rules);
    document.visit(&mut validation, &mut visitor);
    validation.check_balanced()?;

    let spread_rules = NoUndefinedVariables::default_in(arena)
        .compose(NoUnusedVariables::default_in(arena))
        .compose(VariablesInAllowedPosition::default_in(arena));
    let mut visitor = TypeInfoVisitor::new(spread_rules);
    let fragments = validation.fragments();
    document.visit_with_fragments(&mut validation, &mut visitor, fragments);
    validation.check_balanced()?;

    Ok(validation.into_errors())
}
