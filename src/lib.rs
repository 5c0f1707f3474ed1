/*!
Evaluates a restricted XPath dialect over the [Document Object Model Core,
Level 2](https://www.w3.org/TR/DOM-Level-2-Core), returning ordered,
deduplicated sequences of nodes.

The crate is split the way the evaluation model is split: a [`dom`] adapter
over `xml_dom`'s arena-backed tree, an [`ast`] of path and filter sum types,
a pure-function [`eval`]uator that interprets the AST against a current
[`node_set::NodeSet`], and a [`parse`] layer that turns query text into an
AST so callers don't have to build one by hand.

# Example

```rust,ignore
use xquery_core::ast::{AbsolutePath, RelativePath};
use xquery_core::evaluate_xpath;

let ast = AbsolutePath::children(
    "books.xml",
    RelativePath::tag("library")
        .step(RelativePath::tag("book"))
        .step(RelativePath::tag("title")),
);
let titles = evaluate_xpath(&ast).unwrap();
assert_eq!(titles.len(), 2);
```
*/

#[macro_use]
extern crate pest_derive;

// ------------------------------------------------------------------------------------------------
// Modules
// ------------------------------------------------------------------------------------------------

pub mod ast;
pub mod dom;
pub mod error;
pub mod eval;
pub mod node_set;
pub mod parse;

#[cfg(test)]
mod test_support;

pub use error::Error;
pub use eval::{evaluate_relative, evaluate_xpath};
pub use node_set::NodeSet;
pub use parse::parse;
