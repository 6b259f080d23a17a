//! # `typ65conv` main library
//!
//! This library converts 6502/65c02/65816 source written in Typist's Assembler Notation
//! into the traditional assembler format (fixed opcode column, `$` hex literals, label colons).
//!
//! ## Architecture
//!
//! The conversion is a line-local rewrite.  Every line of source is paired with its line number
//! to form a `notation::WorkItem`, and each item is classified and rewritten without looking
//! at any other line.  This lets the items be fanned out to a pool of worker threads.
//! The results come back in arbitrary order and are sorted by line number before output.
//!
//! * `notation::opcodes` loads the table mapping Typist mnemonics to traditional templates
//! * `notation::classify` has the line predicates (comment, empty, label, directive)
//! * `notation::numbers` rewrites numeric operands
//! * `notation::formatter` places labels and instruction bodies in columns
//! * `notation::converter` is the per-line state machine
//! * `notation::dispatch` is the worker pool
//!
//! ## Known Ambiguity
//!
//! Bare tokens that happen to be valid hex, such as `dead` or `cafe`, are treated as numbers
//! and get a `$` prefix, even if the author intended a symbol.  There is no symbol table
//! that could resolve this.

pub mod notation;
pub mod commands;

pub type DYNERR = Box<dyn std::error::Error>;
pub type STDRESULT = Result<(),Box<dyn std::error::Error>>;
