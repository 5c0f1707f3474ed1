/*!
The evaluator: a pair of pure functions that interpret the AST against a
current node-set context.

Neither [`path::evaluate_relative`] nor [`filter::evaluate_filter`] mutate
any shared state — each takes the incoming context by reference and returns
a fresh [`NodeSet`]. This is the "cleaner design" the teacher's own design
notes point at: there is no save/restore discipline to get wrong, because
there is nothing to save or restore. Filter purity (every filter leaves the
caller's context untouched) falls out of the function signature rather than
needing to be maintained by hand.
*/

mod filter;
mod path;

pub use filter::evaluate_filter;
pub use path::{evaluate_relative, evaluate_xpath};
