//! ## Convert Typist's Assembler Notation
//!
//! Read the source file, load the opcode table, run the line converter on a worker pool,
//! and write the lines back out in their original order.

use std::sync::Arc;
use log::{error,info,warn};
use super::{CommandError,read_text,write_text};
use crate::notation::{self,settings,ConversionOptions,LineKind};
use crate::notation::converter::Converter;
use crate::notation::dispatch::{dispatch,worker_count};
use crate::notation::opcodes::OpcodeTable;
use crate::{DYNERR,STDRESULT};

const RCH: &str = "unreachable was reached";

/// Result of converting a whole source file
pub struct Report {
    /// converted source, one line per input line, with a final newline
    pub text: String,
    /// number of lines processed
    pub lines: usize,
    /// line numbers that were marked as errors
    pub unresolved: Vec<usize>
}

/// Convert a complete source string.  `jobs` can lower the number of workers.
pub fn convert_source(source: &str,table: Arc<OpcodeTable>,options: ConversionOptions,jobs: Option<usize>) -> Result<Report,DYNERR> {
    let items = notation::work_items(source);
    let lines = items.len();
    let workers = worker_count(jobs,lines);
    let converter = Converter::new(table,options);
    let converted = dispatch(items,&converter,workers)?;
    let mut text = String::new();
    let mut unresolved = Vec::new();
    for c in converted {
        if c.kind==LineKind::Unrecognized {
            unresolved.push(c.item.line_number);
        }
        text += &c.item.payload;
        text += "\n";
    }
    Ok(Report {
        text,
        lines,
        unresolved
    })
}

pub fn convert(cmd: &clap::ArgMatches) -> STDRESULT {
    let input = match cmd.get_one::<String>("input") {
        Some(path) => path,
        None => {
            error!("no input filename provided");
            return Err(Box::new(CommandError::MissingInput));
        }
    };
    let output = cmd.get_one::<String>("output").expect(RCH);
    let table_path = cmd.get_one::<String>("table").expect(RCH);
    let mut options = match cmd.get_one::<String>("config") {
        Some(json) => settings::parse(json)?,
        None => ConversionOptions::new()
    };
    if cmd.get_flag("ou") {
        options.upper_case_opcodes = true;
    }
    if cmd.get_flag("lc") {
        options.append_colon_to_labels = true;
    }
    let jobs = cmd.get_one::<usize>("jobs").copied();
    let source = read_text(input,"input file")?;
    let table = OpcodeTable::from_file(table_path)?;
    let report = convert_source(&source,Arc::new(table),options,jobs)?;
    write_text(output,&report.text)?;
    info!("converted {} lines from {}",report.lines,input);
    if report.unresolved.len() > 0 {
        warn!("{} lines could not be converted, search the output for `{}`",report.unresolved.len(),notation::ERROR_PREFIX);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::opcodes::OpcodeEntry;

    fn table() -> Arc<OpcodeTable> {
        let mut table = OpcodeTable::new();
        table.insert("lda.l",OpcodeEntry::new("lda ?",4));
        table.insert("rts",OpcodeEntry::new("rts",1));
        Arc::new(table)
    }

    #[test]
    fn mixed_source() {
        let source = "start\nstart lda.l 00:1000 ; load\n; comment line\n        frob 12\n        rts\n";
        let mut opt = ConversionOptions::new();
        opt.append_colon_to_labels = true;
        let report = convert_source(source,table(),opt,None).expect("conversion failed");
        assert_eq!(report.lines,5);
        assert_eq!(report.unresolved,vec![4]);
        let lines: Vec<&str> = report.text.lines().collect();
        assert_eq!(lines.len(),5);
        assert_eq!(lines[0],"start:");
        assert_eq!(lines[1],["start:"," ".repeat(10).as_str(),"lda $001000 ;  load"].concat());
        assert_eq!(lines[2],"; comment line");
        assert_eq!(lines[3],"ERROR -->        frob 12");
        assert_eq!(lines[4],[" ".repeat(16).as_str(),"rts"].concat());
    }

    #[test]
    fn empty_source() {
        let report = convert_source("",table(),ConversionOptions::new(),Some(2)).expect("conversion failed");
        assert_eq!(report.lines,0);
        assert_eq!(report.text,"");
    }
}
