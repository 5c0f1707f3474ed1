/*!
Evaluator case analysis for absolute and relative paths (spec §4.3/§4.4).
*/

use crate::ast::{AbsolutePath, RelativePath};
use crate::dom;
use crate::error::Error;
use crate::eval::filter::evaluate_filter;
use crate::node_set::NodeSet;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Evaluates a top-level, document-rooted query and returns its
/// deduplicated result.
pub fn evaluate_xpath(ast: &AbsolutePath) -> Result<NodeSet, Error> {
    let result = match ast {
        AbsolutePath::Doc(file) => NodeSet::from(dom::load(file)?),
        AbsolutePath::Children(file, rp) => {
            let context = NodeSet::from(dom::load(file)?);
            evaluate_relative(rp, &context)?.unique()
        }
        AbsolutePath::Descendants(file, rp) => {
            let context = NodeSet::from(dom::load(file)?).descendants_or_self();
            evaluate_relative(rp, &context)?.unique()
        }
    };
    log::debug!("absolute path evaluated to {} node(s)", result.len());
    Ok(result)
}

/// Evaluates a relative path against an already-established context,
/// without deduplicating (callers that need a dedup point — `/`, `//`, or
/// the top-level absolute path — apply [`NodeSet::unique`] themselves).
pub fn evaluate_relative(rp: &RelativePath, context: &NodeSet) -> Result<NodeSet, Error> {
    match rp {
        RelativePath::Tag(name) => Ok(context
            .iter()
            .flat_map(dom::children)
            .filter(|child| &dom::tag(child) == name)
            .collect()),

        RelativePath::Wildcard => Ok(context.iter().flat_map(dom::children).collect()),

        RelativePath::Current => Ok(context.clone()),

        RelativePath::Parent => Ok(context.iter().filter_map(dom::parent).collect()),

        RelativePath::Text => Ok(context.iter().flat_map(dom::text_nodes).collect()),

        RelativePath::Attribute(name) => {
            if name.is_empty() {
                let message = "attribute step with empty name".to_string();
                log::warn!("{}", message);
                return Err(Error::Eval(message));
            }
            Ok(context
                .iter()
                .filter_map(|node| dom::attribute(node, name))
                .collect())
        }

        RelativePath::Paren(inner) => evaluate_relative(inner, context),

        RelativePath::Step(left, right) => {
            let left_result = evaluate_relative(left, context)?;
            let mut accumulated = NodeSet::new();
            for node in left_result.iter() {
                let singleton = NodeSet::from(node.clone());
                accumulated.extend(evaluate_relative(right, &singleton)?);
            }
            Ok(accumulated.unique())
        }

        RelativePath::StepAll(left, right) => {
            let left_result = evaluate_relative(left, context)?.descendants_or_self();
            evaluate_relative(right, &left_result).map(|set| set.unique())
        }

        RelativePath::Filter(rp, f) => {
            let candidates = evaluate_relative(rp, context)?;
            let mut kept = NodeSet::new();
            for node in candidates.iter() {
                let singleton = NodeSet::from(node.clone());
                if !evaluate_filter(f, &singleton)?.is_empty() {
                    kept.push(node.clone());
                }
            }
            Ok(kept)
        }

        RelativePath::Pair(left, right) => {
            let mut result = evaluate_relative(left, context)?;
            result.extend(evaluate_relative(right, context)?);
            Ok(result)
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
