/*!
Turns XPath query text into the AST the evaluator walks (spec §4.7 /
external interfaces §6 grammar). This layer sits outside the evaluator
proper: callers that already have an `AbsolutePath` (built by hand, or by
an embedding application) never need it.
*/

mod build;
mod pest_parser;

use crate::ast::AbsolutePath;
use crate::error::Error;
use pest::Parser;
use pest_parser::{Rule, XQueryParser};

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Parses `xpath_text` against the §6 grammar and returns the resulting
/// AST. Note that the grammar has no string-literal operand in equality
/// filters — `rp = rp` compares two paths, never a path against a quoted
/// string (see the crate's design notes).
pub fn parse(xpath_text: &str) -> Result<AbsolutePath, Error> {
    let mut parsed = XQueryParser::parse(Rule::program, xpath_text)
        .map_err(|err| Error::QueryParse(err.to_string()))?;
    let program = parsed
        .next()
        .ok_or_else(|| Error::QueryParse("empty parse result".to_string()))?;
    let absolute_path_pair = program
        .into_inner()
        .find(|pair| pair.as_rule() == Rule::absolute_path)
        .ok_or_else(|| Error::QueryParse("no absolute path in parse tree".to_string()))?;
    build::absolute_path(absolute_path_pair)
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::RelativePath;

    #[test]
    fn parses_a_simple_doc_only_query() {
        let ast = parse(r#"doc("books.xml")"#).unwrap();
        assert_eq!(ast, AbsolutePath::doc("books.xml"));
    }

    #[test]
    fn parses_a_wildcard_child_step() {
        let ast = parse(r#"doc("books.xml")/*"#).unwrap();
        assert_eq!(ast, AbsolutePath::children("books.xml", RelativePath::Wildcard));
    }

    #[test]
    fn rejects_unparseable_text() {
        let result = parse("not even close to valid");
        assert!(matches!(result, Err(Error::QueryParse(_))));
    }
}
