//! ## Build an Opcode Table
//!
//! Turn a plain list of Typist mnemonics and instruction sizes into the JSON opcode table
//! used by `convert`.

use log::error;
use super::{read_text,write_text};
use crate::notation::opcodes;
use crate::STDRESULT;

const RCH: &str = "unreachable was reached";

pub fn mktable(cmd: &clap::ArgMatches) -> STDRESULT {
    let list_path = cmd.get_one::<String>("list").expect(RCH);
    let output = cmd.get_one::<String>("output").expect(RCH);
    let list = read_text(list_path,"mnemonic list")?;
    let json = match opcodes::build_from_list(&list) {
        Ok(json) => json,
        Err(e) => {
            error!("{}: {}",list_path,e);
            return Err(e);
        }
    };
    write_text(output,&[json.as_str(),"\n"].concat())
}
