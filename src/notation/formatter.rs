//! Module to format lines in the traditional layout
//!
//! The traditional layout has labels starting in the first column and instruction
//! bodies starting in a fixed opcode column.  The column is part of the
//! `ConversionOptions`, padding is always computed from it.

use super::ConversionOptions;

/// Layout policy for the traditional format
pub struct Columns {
    opcode: usize,
    colon: bool
}

impl Columns {
    pub fn new(opt: &ConversionOptions) -> Self {
        Self {
            opcode: opt.opcode_column,
            colon: opt.append_colon_to_labels
        }
    }
    /// The label as it should be emitted, with a colon if so configured.
    /// A colon that is already there is not doubled.
    pub fn label(&self,label: &str) -> String {
        match self.colon && !label.ends_with(':') {
            true => [label,":"].concat(),
            false => label.to_string()
        }
    }
    /// Instruction body without a label, indented to the opcode column
    pub fn indent(&self,body: &str) -> String {
        [" ".repeat(self.opcode),body.trim().to_string()].concat()
    }
    /// Put the label in the first column and the body in the opcode column.
    /// If the label reaches the opcode column, a single space separates them.
    pub fn align(&self,label: &str,body: &str) -> String {
        let padding = match self.opcode.checked_sub(label.chars().count()) {
            Some(n) if n > 0 => n,
            _ => 1
        };
        [label.to_string()," ".repeat(padding),body.trim().to_string()].concat()
    }
}

/// Replace the label at the start of `line` with `new_label`, keeping the length of the line,
/// so that anything following the label stays in place.  If the new label is not shorter
/// than the whole line, the new label is the result.
pub fn merge_label(line: &str,new_label: &str) -> String {
    if new_label.len() >= line.len() {
        return new_label.to_string();
    }
    let mut split = new_label.len();
    while !line.is_char_boundary(split) {
        split += 1;
    }
    [new_label,&line[split..]].concat()
}

/// Convert the first word to upper case, the rest of the string is unchanged.
pub fn first_to_upper(s: &str) -> String {
    match s.split_whitespace().next() {
        Some(word) => s.replacen(word,&word.to_uppercase(),1),
        None => s.to_string()
    }
}
