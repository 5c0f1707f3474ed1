/*!
Walks the `pest` parse tree produced against `xquery.pest` and builds the
AST types in [`crate::ast`].
*/

use crate::ast::{AbsolutePath, Filter, RelativePath};
use crate::error::Error;
use crate::parse::pest_parser::Rule;
use pest::iterators::Pair;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

pub fn absolute_path(pair: Pair<Rule>) -> Result<AbsolutePath, Error> {
    let mut inner = pair.into_inner();
    let file = doc_call(inner.next().expect("absolute_path always starts with doc_call"))?;

    match inner.next() {
        None => Ok(AbsolutePath::doc(&file)),
        Some(op_pair) => {
            let descends = op_pair.as_str() == "//";
            let rp_pair = inner
                .next()
                .expect("abs_op is always followed by a relative_path");
            let rp = relative_path(rp_pair)?;
            Ok(if descends {
                AbsolutePath::descendants(&file, rp)
            } else {
                AbsolutePath::children(&file, rp)
            })
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn doc_call(pair: Pair<Rule>) -> Result<String, Error> {
    let literal = pair
        .into_inner()
        .next()
        .expect("doc_call always carries a string_literal");
    let raw = literal.as_str();
    Ok(raw[1..raw.len() - 1].to_string())
}

fn relative_path(pair: Pair<Rule>) -> Result<RelativePath, Error> {
    let inner = pair
        .into_inner()
        .next()
        .expect("relative_path always wraps a pair_expr");
    pair_expr(inner)
}

fn pair_expr(pair: Pair<Rule>) -> Result<RelativePath, Error> {
    let mut parts = pair.into_inner().map(step_expr);
    let mut result = parts
        .next()
        .expect("pair_expr always has at least one step_expr")?;
    for next in parts {
        result = result.pair(next?);
    }
    Ok(result)
}

fn step_expr(pair: Pair<Rule>) -> Result<RelativePath, Error> {
    let mut inner = pair.into_inner();
    let mut result = filtered_term(
        inner
            .next()
            .expect("step_expr always has at least one filtered_term"),
    )?;
    while let Some(op_pair) = inner.next() {
        let descends = op_pair.as_str() == "//";
        let next_term = filtered_term(
            inner
                .next()
                .expect("step_op is always followed by a filtered_term"),
        )?;
        result = if descends {
            result.step_all(next_term)
        } else {
            result.step(next_term)
        };
    }
    Ok(result)
}

fn filtered_term(pair: Pair<Rule>) -> Result<RelativePath, Error> {
    let mut inner = pair.into_inner();
    let mut result = primary_term(
        inner
            .next()
            .expect("filtered_term always has a primary_term"),
    )?;
    for predicate_pair in inner {
        let filter_expr_pair = predicate_pair
            .into_inner()
            .next()
            .expect("predicate always wraps a filter_expr");
        result = result.filter(filter_expr(filter_expr_pair)?);
    }
    Ok(result)
}

fn primary_term(pair: Pair<Rule>) -> Result<RelativePath, Error> {
    let inner = pair
        .into_inner()
        .next()
        .expect("primary_term always matches exactly one alternative");
    match inner.as_rule() {
        Rule::relative_path => Ok(relative_path(inner)?.paren()),
        Rule::text_call => Ok(RelativePath::Text),
        Rule::parent_step => Ok(RelativePath::Parent),
        Rule::current_step => Ok(RelativePath::Current),
        Rule::attribute_step => {
            let name = inner
                .into_inner()
                .next()
                .expect("attribute_step always carries an identifier")
                .as_str();
            Ok(RelativePath::attribute(name))
        }
        Rule::wildcard => Ok(RelativePath::Wildcard),
        Rule::identifier => Ok(RelativePath::tag(inner.as_str())),
        other => Err(Error::QueryParse(format!(
            "unexpected primary term rule {other:?}"
        ))),
    }
}

fn filter_expr(pair: Pair<Rule>) -> Result<Filter, Error> {
    let inner = pair
        .into_inner()
        .next()
        .expect("filter_expr always wraps an or_expr");
    or_expr(inner)
}

fn or_expr(pair: Pair<Rule>) -> Result<Filter, Error> {
    let mut parts = pair.into_inner().map(and_expr);
    let mut result = parts
        .next()
        .expect("or_expr always has at least one and_expr")?;
    for next in parts {
        result = result.or(next?);
    }
    Ok(result)
}

fn and_expr(pair: Pair<Rule>) -> Result<Filter, Error> {
    let mut parts = pair.into_inner().map(not_expr);
    let mut result = parts
        .next()
        .expect("and_expr always has at least one not_expr")?;
    for next in parts {
        result = result.and(next?);
    }
    Ok(result)
}

fn not_expr(pair: Pair<Rule>) -> Result<Filter, Error> {
    let inner = pair
        .into_inner()
        .next()
        .expect("not_expr always wraps either a nested not_expr or an atomic_filter");
    match inner.as_rule() {
        Rule::not_expr => Ok(not_expr(inner)?.not()),
        Rule::atomic_filter => atomic_filter(inner),
        other => Err(Error::QueryParse(format!(
            "unexpected not_expr rule {other:?}"
        ))),
    }
}

fn atomic_filter(pair: Pair<Rule>) -> Result<Filter, Error> {
    let inner = pair
        .into_inner()
        .next()
        .expect("atomic_filter always matches exactly one alternative");
    match inner.as_rule() {
        Rule::filter_expr => Ok(filter_expr(inner)?.paren()),
        Rule::comparison => comparison(inner),
        Rule::relative_path => Ok(Filter::exists(relative_path(inner)?)),
        other => Err(Error::QueryParse(format!(
            "unexpected atomic_filter rule {other:?}"
        ))),
    }
}

fn comparison(pair: Pair<Rule>) -> Result<Filter, Error> {
    let mut inner = pair.into_inner();
    let left = relative_path(inner.next().expect("comparison always has a left side"))?;
    let op = inner.next().expect("comparison always has an operator");
    let right = relative_path(inner.next().expect("comparison always has a right side"))?;
    Ok(match op.as_str() {
        "==" | "is" => Filter::identity_eq(left, right),
        _ => Filter::value_eq(left, right),
    })
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::pest_parser::XQueryParser;
    use pest::Parser;

    fn parse_absolute(text: &str) -> AbsolutePath {
        let mut pairs = XQueryParser::parse(Rule::program, text).unwrap();
        let program = pairs.next().unwrap();
        let ap_pair = program
            .into_inner()
            .find(|p| p.as_rule() == Rule::absolute_path)
            .unwrap();
        absolute_path(ap_pair).unwrap()
    }

    #[test]
    fn children_path_builds_nested_steps() {
        let ast = parse_absolute(r#"doc("books.xml")/library/book/title"#);
        assert_eq!(
            ast,
            AbsolutePath::children(
                "books.xml",
                RelativePath::tag("library")
                    .step(RelativePath::tag("book"))
                    .step(RelativePath::tag("title"))
            )
        );
    }

    #[test]
    fn descendants_path_builds_a_single_tag() {
        let ast = parse_absolute(r#"doc("books.xml")//title"#);
        assert_eq!(
            ast,
            AbsolutePath::descendants("books.xml", RelativePath::tag("title"))
        );
    }

    #[test]
    fn filter_with_and_or_not_nests_left_associatively() {
        let ast = parse_absolute(r#"doc("books.xml")//book[title and not @draft]"#);
        let expected_rp = RelativePath::tag("book").filter(
            Filter::exists(RelativePath::tag("title"))
                .and(Filter::exists(RelativePath::attribute("draft")).not()),
        );
        assert_eq!(ast, AbsolutePath::descendants("books.xml", expected_rp));
    }

    #[test]
    fn value_eq_and_identity_eq_operators_are_distinguished() {
        let ast = parse_absolute(r#"doc("books.xml")/library/book[title eq title]"#);
        let expected_rp = RelativePath::tag("library").step(
            RelativePath::tag("book").filter(Filter::value_eq(
                RelativePath::tag("title"),
                RelativePath::tag("title"),
            )),
        );
        assert_eq!(ast, AbsolutePath::children("books.xml", expected_rp));

        let ast_is = parse_absolute(r#"doc("books.xml")/library/book[title is title]"#);
        let expected_is = RelativePath::tag("library").step(
            RelativePath::tag("book").filter(Filter::identity_eq(
                RelativePath::tag("title"),
                RelativePath::tag("title"),
            )),
        );
        assert_eq!(ast_is, AbsolutePath::children("books.xml", expected_is));
    }

    #[test]
    fn pair_and_paren_round_trip() {
        let ast = parse_absolute(r#"doc("books.xml")/library/(book, book/title)"#);
        let expected_rp = RelativePath::tag("library").step(
            RelativePath::tag("book")
                .pair(RelativePath::tag("book").step(RelativePath::tag("title")))
                .paren(),
        );
        assert_eq!(ast, AbsolutePath::children("books.xml", expected_rp));
    }
}
