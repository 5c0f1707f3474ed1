/*!
The query AST: absolute paths, relative paths, and filter predicates.

Consumers that already have a tree (built by hand, or by the [`crate::parse`]
module) pass an [`AbsolutePath`] to [`crate::evaluate_xpath`]; the
[`RelativePath`] and [`Filter`] variants compose recursively underneath it.

The fluent builder methods below exist for the same reason the teacher's
`LocationPath`/`Step` builders did: constructing an AST by hand (in tests,
or from an embedding application) shouldn't require naming every `Box::new`.
*/

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// A path rooted at a named document.
#[derive(Clone, Debug, PartialEq)]
pub enum AbsolutePath {
    /// `doc(F)` — the loaded document itself, no further navigation.
    Doc(String),
    /// `doc(F) '/' rp` — navigate from the document, deduplicating the result.
    Children(String, RelativePath),
    /// `doc(F) '//' rp` — navigate from every node in the document (self and
    /// descendants), deduplicating the result.
    Descendants(String, RelativePath),
}

/// A path evaluated against an already-established context node-set.
#[derive(Clone, Debug, PartialEq)]
pub enum RelativePath {
    /// `Identifier` — child elements with the given tag name.
    Tag(String),
    /// `*` — all children, whatever their kind.
    Wildcard,
    /// `.` — the context set, unchanged.
    Current,
    /// `..` — the parent of each context node.
    Parent,
    /// `text()` — the direct text children of each context node.
    Text,
    /// `@ Identifier` — the named attribute of each context node, if present.
    Attribute(String),
    /// `'(' rp ')'` — grouping, no semantic effect beyond precedence.
    Paren(Box<RelativePath>),
    /// `rp '/' rp` — re-seed the context to each element of the left result in
    /// turn and evaluate the right side, concatenating and deduplicating.
    Step(Box<RelativePath>, Box<RelativePath>),
    /// `rp '//' rp` — as `Step`, but the left result is first expanded to
    /// itself plus all descendants.
    StepAll(Box<RelativePath>, Box<RelativePath>),
    /// `rp '[' f ']'` — keep only the elements of `rp`'s result for which `f`
    /// is truthy.
    Filter(Box<RelativePath>, Box<Filter>),
    /// `rp ',' rp` — evaluate both sides against the same incoming context
    /// and concatenate, duplicates allowed.
    Pair(Box<RelativePath>, Box<RelativePath>),
}

/// A predicate over a single-element context, truthy or falsy.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// `rp` alone — truthy iff `rp` is non-empty on the context.
    Exists(RelativePath),
    /// `rp '=' rp` / `rp 'eq' rp` — truthy iff some pair of results are
    /// structurally equal (deep subtree equality).
    ValueEq(RelativePath, RelativePath),
    /// `rp '==' rp` / `rp 'is' rp` — truthy iff some pair of results refer to
    /// the same node.
    IdentityEq(RelativePath, RelativePath),
    /// `'(' f ')'` — grouping.
    Paren(Box<Filter>),
    /// `f 'and' f`
    And(Box<Filter>, Box<Filter>),
    /// `f 'or' f`
    Or(Box<Filter>, Box<Filter>),
    /// `'not' f`
    Not(Box<Filter>),
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl AbsolutePath {
    pub fn doc(file: &str) -> Self {
        AbsolutePath::Doc(file.to_string())
    }

    pub fn children(file: &str, rp: RelativePath) -> Self {
        AbsolutePath::Children(file.to_string(), rp)
    }

    pub fn descendants(file: &str, rp: RelativePath) -> Self {
        AbsolutePath::Descendants(file.to_string(), rp)
    }
}

// ------------------------------------------------------------------------------------------------

impl RelativePath {
    pub fn tag(name: &str) -> Self {
        RelativePath::Tag(name.to_string())
    }

    pub fn attribute(name: &str) -> Self {
        RelativePath::Attribute(name.to_string())
    }

    pub fn paren(self) -> Self {
        RelativePath::Paren(Box::new(self))
    }

    /// `self / next`
    pub fn step(self, next: RelativePath) -> Self {
        RelativePath::Step(Box::new(self), Box::new(next))
    }

    /// `self // next`
    pub fn step_all(self, next: RelativePath) -> Self {
        RelativePath::StepAll(Box::new(self), Box::new(next))
    }

    /// `self[f]`
    pub fn filter(self, f: Filter) -> Self {
        RelativePath::Filter(Box::new(self), Box::new(f))
    }

    /// `self , other`
    pub fn pair(self, other: RelativePath) -> Self {
        RelativePath::Pair(Box::new(self), Box::new(other))
    }
}

// ------------------------------------------------------------------------------------------------

impl Filter {
    pub fn exists(rp: RelativePath) -> Self {
        Filter::Exists(rp)
    }

    pub fn value_eq(left: RelativePath, right: RelativePath) -> Self {
        Filter::ValueEq(left, right)
    }

    pub fn identity_eq(left: RelativePath, right: RelativePath) -> Self {
        Filter::IdentityEq(left, right)
    }

    pub fn paren(self) -> Self {
        Filter::Paren(Box::new(self))
    }

    pub fn and(self, other: Filter) -> Self {
        Filter::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Filter) -> Self {
        Filter::Or(Box::new(self), Box::new(other))
    }

    pub fn not(self) -> Self {
        Filter::Not(Box::new(self))
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
