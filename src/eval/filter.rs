/*!
Evaluator case analysis for filter predicates (spec §4.5).

Every arm takes the single-element context by reference and returns a fresh
[`NodeSet`]: truthy is the context unchanged, falsy is empty. Because
nothing here is mutated in place, filter purity (invariant 1: a filter
leaves the caller's context as it found it) holds structurally — there is
no context to restore, since none was ever overwritten.
*/

use crate::ast::{Filter, RelativePath};
use crate::dom;
use crate::error::Error;
use crate::eval::path::evaluate_relative;
use crate::node_set::NodeSet;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

pub fn evaluate_filter(f: &Filter, context: &NodeSet) -> Result<NodeSet, Error> {
    let truthy = match f {
        Filter::Exists(rp) => !evaluate_relative(rp, context)?.is_empty(),

        Filter::ValueEq(left, right) => {
            let left_result = evaluate_relative(left, context)?;
            let right_result = evaluate_relative(right, context)?;
            any_pair(&left_result, &right_result, dom::structural_equal)
        }

        Filter::IdentityEq(left, right) => {
            let left_result = evaluate_relative(left, context)?;
            let right_result = evaluate_relative(right, context)?;
            any_pair(&left_result, &right_result, dom::same_identity)
        }

        Filter::Paren(inner) => !evaluate_filter(inner, context)?.is_empty(),

        Filter::And(left, right) => {
            !evaluate_filter(left, context)?.is_empty() && !evaluate_filter(right, context)?.is_empty()
        }

        Filter::Or(left, right) => {
            !evaluate_filter(left, context)?.is_empty() || !evaluate_filter(right, context)?.is_empty()
        }

        Filter::Not(inner) => evaluate_filter(inner, context)?.is_empty(),
    };

    Ok(if truthy {
        context.clone()
    } else {
        NodeSet::new()
    })
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn any_pair(
    left: &NodeSet,
    right: &NodeSet,
    matches: impl Fn(&xml_dom::level2::RefNode, &xml_dom::level2::RefNode) -> bool,
) -> bool {
    left.iter().any(|x| right.iter().any(|y| matches(x, y)))
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
