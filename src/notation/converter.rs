//! # Line Converter
//!
//! Classify a single line and rewrite it in the traditional format.
//! The outcome of a line depends only on its own text, the opcode table,
//! and the conversion options, all of which are read-only here.
//!
//! Lines go through these states:
//! * empty or comment lines are passed through verbatim
//! * a label alone, or a label followed by a comment, is finished right away
//! * otherwise the label is set aside and the first remaining word decides
//!   between a directive, an opcode, or an error
//! * any label that was set aside is put back in front of the result

use std::sync::Arc;
use log::error;
use super::classify::{is_comment,is_directive,is_empty,has_label,is_opcode};
use super::formatter::{Columns,merge_label,first_to_upper};
use super::numbers::convert_number;
use super::opcodes::OpcodeTable;
use super::{ConversionOptions,Converted,LineKind,WorkItem};
use super::{COMMENT,ERROR_PREFIX,PLACEHOLDER};

/// Split off an inline comment at the first `;` that is not quoted.
/// A quote only counts if its partner closes it before the next white space,
/// as in `';'` or `"a;b"`, otherwise it is an ordinary character (`'a`).
/// The comment text does not include the `;`.
pub fn split_comment(s: &str) -> (&str,Option<&str>) {
    let mut skip_to = 0;
    for (i,c) in s.char_indices() {
        if i < skip_to {
            continue;
        }
        match c {
            COMMENT => return (&s[0..i],Some(&s[i+1..])),
            '"' | '\'' => {
                let rest = &s[i+1..];
                let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                if let Some(len) = rest[..word_end].find(c) {
                    skip_to = i + 1 + len + 1;
                }
            },
            _ => {}
        }
    }
    (s,None)
}

/// Rewrites lines, can be shared among threads
pub struct Converter {
    table: Arc<OpcodeTable>,
    options: ConversionOptions,
    columns: Columns
}

impl Converter {
    pub fn new(table: Arc<OpcodeTable>,options: ConversionOptions) -> Self {
        let columns = Columns::new(&options);
        Self {
            table,
            options,
            columns
        }
    }
    /// Convert one work item.  The line number is kept, the payload is replaced.
    /// Lines that cannot be converted are logged and marked with `ERROR_PREFIX`.
    pub fn convert(&self,item: WorkItem) -> Converted {
        let (payload,kind,reason) = self.convert_text(&item.payload);
        if let Some(reason) = reason {
            error!("unrecognized payload in line {}: {} ({})",item.line_number,item.payload.trim(),reason);
        }
        Converted {
            item: WorkItem {
                line_number: item.line_number,
                payload
            },
            kind
        }
    }
    /// Convert the text of one line, returning the new text and how the line was classified.
    pub fn convert_line(&self,line: &str) -> (String,LineKind) {
        let (payload,kind,_) = self.convert_text(line);
        (payload,kind)
    }
    /// Same as `convert_line`, but also gives the reason for an unrecognized line
    fn convert_text(&self,line: &str) -> (String,LineKind,Option<String>) {
        if is_empty(line) {
            return (line.to_string(),LineKind::Empty,None);
        }
        if is_comment(line) {
            return (line.to_string(),LineKind::Comment,None);
        }
        let mut label: Option<&str> = None;
        let mut body = line;
        if has_label(line) {
            let mut words = line.split_whitespace();
            let first = words.next().unwrap_or_default();
            match words.next() {
                None => return (self.columns.label(first),LineKind::LabelOnly,None),
                Some(second) if is_comment(second) => {
                    return (merge_label(line,&self.columns.label(first)),LineKind::LabelPlusComment,None);
                },
                Some(_) => {
                    label = Some(first);
                    body = &line[first.len()..];
                }
            }
        }
        let (new_body,kind,reason) = match self.convert_body(body) {
            Ok((new_body,kind)) => (new_body,kind,None),
            Err(reason) => ([ERROR_PREFIX,body].concat(),LineKind::Unrecognized,Some(reason))
        };
        match label {
            Some(lab) => (self.columns.align(&self.columns.label(lab),&new_body),kind,reason),
            None => (new_body,kind,reason)
        }
    }
    /// Convert what remains after any label has been removed, `Err` holds the reason for failure
    fn convert_body(&self,body: &str) -> Result<(String,LineKind),String> {
        let (code,comment) = split_comment(body.trim());
        let mut words = code.split_whitespace();
        let keyword = words.next().unwrap_or_default();
        if is_directive(keyword) {
            return match self.options.upper_case_opcodes {
                true => Ok((first_to_upper(body),LineKind::Directive)),
                false => Ok((body.to_string(),LineKind::Directive))
            };
        }
        if !is_opcode(keyword,&self.table) {
            return Err(format!("`{}` is not a known mnemonic",keyword));
        }
        let entry = &self.table[keyword];
        let mut mnemonic = match self.options.upper_case_opcodes {
            true => first_to_upper(&entry.old_mnemonic),
            false => entry.old_mnemonic.clone()
        };
        if entry.takes_operand() {
            match words.next() {
                Some(operand) => {
                    mnemonic = mnemonic.replace(PLACEHOLDER,&convert_number(operand));
                },
                None => return Err(format!("`{}` needs an operand",keyword))
            }
        }
        if let Some(txt) = comment {
            mnemonic += " ; ";
            mnemonic += txt;
        }
        Ok((self.columns.indent(&mnemonic),LineKind::Opcode))
    }
}
