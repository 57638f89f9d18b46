//! Recursive tree matcher.
//!
//! A pattern node matches a candidate element when its tag, literal
//! attributes and checkers agree, its children can be aligned with the
//! candidate's children, and (if it declares any) at least one of its
//! extraction framers finds text.

mod error;
mod extract;
mod limits;
mod matcher;


pub use error::MatchError;
pub use extract::extract;
pub use limits::MatchLimits;
pub use matcher::Matcher;
