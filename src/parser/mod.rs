//! Parser module.
//!
//! The parser here is a deliberately minimal consumer of the token
//! stream: it pulls tokens one at a time and reports each one, stopping
//! at end of input or on the first lexical error. A grammar-driven
//! parser would slot in behind the same `next_token` contract.

pub mod parser;
