//! Line predicates.
//!
//! These look only at the leading characters of a line.  The converter applies them
//! in the order empty, comment, label, directive, opcode.  Labels are recognized by
//! the absence of indentation, so directives and instructions must always be indented.

use super::opcodes::OpcodeTable;
use super::{COMMENT,DIRECTIVE};

/// line is empty or only white space
pub fn is_empty(line: &str) -> bool {
    line.trim().is_empty()
}

/// first non-space character is the comment marker
pub fn is_comment(line: &str) -> bool {
    line.trim().starts_with(COMMENT)
}

/// first non-space character is a dot, labels are assumed to never start with a dot
pub fn is_directive(line: &str) -> bool {
    line.trim().starts_with(DIRECTIVE)
}

/// line is not indented, meaningful only after empty lines and comments are ruled out
pub fn has_label(line: &str) -> bool {
    match line.chars().next() {
        Some(c) => !c.is_whitespace(),
        None => false
    }
}

/// word is a Typist mnemonic in the table
pub fn is_opcode(word: &str,table: &OpcodeTable) -> bool {
    table.contains(word)
}
