//! # Typist's Assembler Notation
//!
//! Conversion of Typist's Assembler Notation into the traditional assembler format.
//! Typist's notation encodes the addressing mode in the mnemonic (e.g. `lda.#`, `sta.x`)
//! and allows digit group separators in hex operands (e.g. `00:1000`).
//! The traditional format puts the addressing mode in the operand (`lda #$00`, `sta $1000,x`).
//!
//! The conversion of a line never depends on any other line, so lines can be processed
//! in parallel and in any order.  Directives are passed through, since there are too many
//! dialects to translate them faithfully.

use thiserror::Error;

pub mod settings;
pub mod opcodes;
pub mod classify;
pub mod numbers;
pub mod formatter;
pub mod converter;
pub mod dispatch;

#[cfg(test)]
mod converter_test;

/// Marks the start of a comment, both in Typist's notation and the traditional format
pub const COMMENT: char = ';';
/// First non-space character of any directive
pub const DIRECTIVE: char = '.';
/// Stands in for the operand in an opcode template, e.g., `lda #?`
pub const PLACEHOLDER: char = '?';
/// Prefix of the payload of a line that could not be converted
pub const ERROR_PREFIX: &str = "ERROR -->";
/// Default column where instruction bodies start
pub const DEFAULT_OPCODE_COLUMN: usize = 16;

#[derive(Error,Debug)]
pub enum Error {
    #[error("opcode table not found")]
    TableNotFound,
    #[error("opcode table is malformed: {0}")]
    TableFormat(String),
    #[error("mnemonic list is malformed at line {0}")]
    MnemonicList(usize),
    #[error("unknown addressing mode `{1}` at line {0}")]
    AddressingMode(usize,String),
    #[error("a conversion worker failed")]
    WorkerFailed,
    #[error("expected {0} converted lines, received {1}")]
    LostItems(usize,usize)
}

/// One line of source paired with its 1-based line number.
/// The line number never changes, the payload is replaced by its converted form.
#[derive(Clone,Debug,PartialEq)]
pub struct WorkItem {
    pub line_number: usize,
    pub payload: String
}

impl WorkItem {
    pub fn new(line_number: usize,payload: &str) -> Self {
        Self {
            line_number,
            payload: payload.to_string()
        }
    }
}

/// Tag each line of `source` with its line number, blank lines and comments included.
pub fn work_items(source: &str) -> Vec<WorkItem> {
    source.lines().enumerate().map(|(i,line)| WorkItem::new(i+1,line)).collect()
}

/// The outcome of classifying and rewriting one line
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum LineKind {
    Empty,
    Comment,
    LabelOnly,
    LabelPlusComment,
    Directive,
    Opcode,
    /// Neither a directive nor a known opcode, payload carries `ERROR_PREFIX`
    Unrecognized
}

/// A work item after conversion, along with how it was classified.
#[derive(Clone,Debug,PartialEq)]
pub struct Converted {
    pub item: WorkItem,
    pub kind: LineKind
}

/// Read-only options that every worker sees, fixed for the whole run.
#[derive(Clone,Debug,PartialEq)]
pub struct ConversionOptions {
    /// convert the first word of opcodes and directives to upper case
    pub upper_case_opcodes: bool,
    /// put a colon after every emitted label
    pub append_colon_to_labels: bool,
    /// column where the instruction body starts
    pub opcode_column: usize
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self {
            upper_case_opcodes: false,
            append_colon_to_labels: false,
            opcode_column: DEFAULT_OPCODE_COLUMN
        }
    }
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self::new()
    }
}
