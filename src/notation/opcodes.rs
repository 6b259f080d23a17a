//! # Opcode Table
//!
//! Maps a Typist mnemonic such as `lda.#` to a traditional template such as `lda #?`,
//! where `?` is replaced by the converted operand.  The table is loaded once from a JSON
//! document and is read-only afterwards, so it can be shared among worker threads freely.
//!
//! The document has the shape
//! ```json
//! { "table": { "lda.#": { "oldmnem": "lda #?", "size": 2 } } }
//! ```
//! The unwrapped mapping (without the `table` key) is also accepted.
//!
//! The table itself can be generated from a plain list of Typist mnemonics and instruction
//! sizes using `build_from_list`.

use std::collections::HashMap;
use serde::{Deserialize,Serialize};
use log::{debug,info,warn};
use super::Error;
use crate::DYNERR;

const RCH: &str = "unreachable was reached";

/// Map from the tail of a Typist mnemonic (the part after the dot) to the traditional operand snippet
const TAILS: [(&str,&str);27] = [
    ("", "?"),
    ("#", "#?"),
    ("a", "a"),
    ("d", "?"),
    ("di", "(?)"),
    ("dil", "[?]"),
    ("dily", "[?],y"),
    ("diy", "(?),y"),
    ("dx", "?,x"),
    ("dy", "?,y"),
    ("dxi", "(?,x)"),
    ("i", "(?)"),
    ("il", "[?]"),
    ("l", "?"),
    ("lx", "?,x"),
    ("r", "?"),
    ("s", "?,s"),
    ("siy", "(?,s),y"),
    ("x", "?,x"),
    ("xi", "(?,x)"),
    ("y", "?,y"),
    ("z", "?"),
    ("zi", "(?)"),
    ("ziy", "(?),y"),
    ("zx", "?,x"),
    ("zxi", "(?,x)"),
    ("zy", "?,y")
];

/// Typist mnemonics whose traditional base mnemonic is different
const SPECIAL_CASES: [(&str,&str);7] = [
    ("bra.l", "brl"),
    ("jmp.l", "jml"),
    ("jsr.l", "jsl"),
    ("phe.#", "pea"),
    ("phe.d", "pei"),
    ("phe.r", "per"),
    ("rts.l", "rtl")
];

/// Conversion data for one Typist mnemonic
#[derive(Clone,Debug,PartialEq,Serialize,Deserialize)]
pub struct OpcodeEntry {
    /// traditional mnemonic, possibly with a single `?` for the operand
    #[serde(rename = "oldmnem", alias = "OldMnem")]
    pub old_mnemonic: String,
    /// size of the instruction in bytes, not used to validate operands (yet)
    #[serde(alias = "Size")]
    pub size: usize
}

impl OpcodeEntry {
    pub fn new(old_mnemonic: &str,size: usize) -> Self {
        Self {
            old_mnemonic: old_mnemonic.to_string(),
            size
        }
    }
    /// true if the template wants an operand substituted
    pub fn takes_operand(&self) -> bool {
        self.old_mnemonic.contains(super::PLACEHOLDER)
    }
}

#[derive(Serialize)]
struct TableDocument<'a> {
    table: &'a serde_json::Map<String,serde_json::Value>
}

/// Case sensitive map from Typist mnemonic to conversion data
#[derive(Clone,Debug)]
pub struct OpcodeTable {
    map: HashMap<String,OpcodeEntry>
}

impl OpcodeTable {
    pub fn new() -> Self {
        Self {
            map: HashMap::new()
        }
    }
    /// Parse the JSON document, either wrapped in a `table` object or not.
    pub fn from_json(json: &str) -> Result<Self,DYNERR> {
        let mut root: serde_json::Value = match serde_json::from_str(json) {
            Ok(v) => v,
            Err(e) => return Err(Box::new(Error::TableFormat(e.to_string())))
        };
        if !root.is_object() {
            return Err(Box::new(Error::TableFormat("top level is not an object".to_string())));
        }
        let unwrapped = match root.get_mut("table") {
            Some(inner) if inner.is_object() => Some(inner.take()),
            _ => None
        };
        if let Some(inner) = unwrapped {
            root = inner;
        }
        match serde_json::from_value::<HashMap<String,OpcodeEntry>>(root) {
            Ok(map) => {
                debug!("parsed {} opcode entries",map.len());
                Ok(Self { map })
            },
            Err(e) => Err(Box::new(Error::TableFormat(e.to_string())))
        }
    }
    /// Load the table from a file, missing or malformed files are errors.
    pub fn from_file(path: &str) -> Result<Self,DYNERR> {
        let json = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind()==std::io::ErrorKind::NotFound => {
                log::error!("opcode table {} does not exist",path);
                return Err(Box::new(Error::TableNotFound));
            },
            Err(e) => return Err(Box::new(e))
        };
        let ans = match Self::from_json(&json) {
            Ok(table) => table,
            Err(e) => {
                log::error!("{}: {}",path,e);
                return Err(e);
            }
        };
        if ans.is_empty() {
            warn!("opcode table {} has no entries",path);
        }
        info!("loaded {} opcodes from {}",ans.len(),path);
        Ok(ans)
    }
    pub fn insert(&mut self,name: &str,entry: OpcodeEntry) {
        self.map.insert(name.to_string(),entry);
    }
    pub fn get(&self,name: &str) -> Option<&OpcodeEntry> {
        self.map.get(name)
    }
    pub fn contains(&self,name: &str) -> bool {
        self.map.contains_key(name)
    }
    pub fn len(&self) -> usize {
        self.map.len()
    }
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Panics if the mnemonic is missing, check with `contains` first
impl std::ops::Index<&str> for OpcodeTable {
    type Output = OpcodeEntry;
    fn index(&self,name: &str) -> &OpcodeEntry {
        &self.map[name]
    }
}

impl Default for OpcodeTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Work out the traditional template for one Typist mnemonic.
/// `line` is only used for error reporting.
fn old_mnemonic(mnemonic: &str,size: usize,line: usize) -> Result<String,DYNERR> {
    let (mut base,mut tail) = match mnemonic.split_once('.') {
        Some((b,t)) => (b.to_string(),t.to_string()),
        None => (mnemonic.to_string(),String::new())
    };
    if let Some((_,special)) = SPECIAL_CASES.iter().find(|(m,_)| *m==mnemonic) {
        base = special.to_string();
    }
    if size > 1 || tail=="a" {
        base += " ";
        tail = match TAILS.iter().find(|(t,_)| *t==tail) {
            Some((_,snippet)) => snippet.to_string(),
            None => return Err(Box::new(Error::AddressingMode(line,tail)))
        };
    }
    // `pea` takes an absolute operand, `rtl` none at all
    match mnemonic {
        "phe.#" => tail = "?".to_string(),
        "rts.l" => tail = String::new(),
        _ => {}
    }
    Ok([base,tail].concat().trim_end().to_string())
}

/// Build the opcode table JSON from a list of Typist mnemonics with sizes, such as
/// ```text
/// brk 2
/// lda.# 2
/// lda.x 3
/// ```
/// Blank lines and lines starting with `;` or `#` are skipped.
/// The entries appear in the output in the same order as the list.
pub fn build_from_list(list: &str) -> Result<String,DYNERR> {
    let patt = regex::Regex::new(r"^\s*(\S+)\s+([0-9]+)\s*$").expect(RCH);
    let mut table = serde_json::Map::new();
    for (i,line) in list.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
            continue;
        }
        let caps = match patt.captures(line) {
            Some(c) => c,
            None => return Err(Box::new(Error::MnemonicList(i+1)))
        };
        let mnemonic = caps.get(1).expect(RCH).as_str();
        let size = match caps.get(2).expect(RCH).as_str().parse::<usize>() {
            Ok(s) => s,
            Err(_) => return Err(Box::new(Error::MnemonicList(i+1)))
        };
        let entry = OpcodeEntry::new(&old_mnemonic(mnemonic,size,i+1)?,size);
        table.insert(mnemonic.to_string(),serde_json::to_value(&entry)?);
    }
    info!("built table with {} opcodes",table.len());
    Ok(serde_json::to_string_pretty(&TableDocument { table: &table })?)
}
