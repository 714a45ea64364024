//! # How bare text becomes a running Krill value
//!
//! User's source code: `let result = (2 + 2) * 2;`

//! ## Scanning
//!
//! Takes in the characters and converts them into tokens: delimiters `(`,
//! `;`, numbers `2`, keywords `let`, identifiers `result` are all tokens.
//! Whitespace is skipped, and a character no rule knows becomes an `Illegal`
//! token rather than a failure. Rejecting it is the parser's business.

//! ## Parsing
//!
//! A Pratt parser builds the tokens into an abstract syntax tree, grouping
//! operands by binding power so `2 + 2 * 2` nests the multiplication under
//! the addition:
//!
//! ``` markdown
//! result (Statement::Let)
//! └── * (Expression::Infix)
//!     ├── + (Expression::Infix)
//!     │   ├── 2 (Expression::IntegerLiteral)
//!     │   └── 2 (Expression::IntegerLiteral)
//!     └── 2 (Expression::IntegerLiteral)
//! ```
//!
//! Only a malformed `let` is a hard parse failure; a token that cannot start
//! an expression silently drops its statement and parsing continues.

//! ## Evaluation
//!
//! A tree-walking interpreter executes the AST right after parsing it: each
//! node evaluates to a runtime `Object`, bindings land in an environment,
//! and failures flow back as `Error` objects through the same channel as
//! every other result. The REPL prints whatever `inspect()` renders.

pub mod cli;
mod environment;
mod error;
mod interpreter;
mod krill;
mod parser;
mod scanner;
mod statement;

pub use error::{KrillError, parser::{ParseError, ParserError}};
pub use krill::Krill;
