/*!
The generated token parser for [`crate::xquery.pest`](../../xquery.pest.html).
*/

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

#[derive(Parser)]
#[grammar = "xquery.pest"]
pub struct XQueryParser;
