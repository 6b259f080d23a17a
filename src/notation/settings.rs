//! Parse a settings string.
//!
//! The converter will check for specific keys that affect its operation.
//! Unknown keys are ignored, and so are values with the wrong type,
//! in which case the default is kept.
//!
//! ```json
//! {
//!     "upperCaseOpcodes": true,
//!     "appendColonToLabels": false,
//!     "columns": { "opcode": 16 }
//! }
//! ```

use serde_json;
use super::ConversionOptions;
use crate::DYNERR;

/// Try to update a boolean from a serde `Value` presumed to be an object.
/// If there is any error do not change the value.
fn update_json_bool(maybe_obj: &serde_json::Value,key: &str,curr: &mut bool) {
    if let Some(obj) = maybe_obj.as_object() {
        if let Some(x) = obj.get(key) {
            if let Some(b) = x.as_bool() {
                *curr = b;
            }
        }
    }
}

/// Try to update a column from a serde `Value` presumed to be an object.
/// If there is any error, including a zero column, do not change the value.
fn update_json_column(maybe_obj: &serde_json::Value,key: &str,curr: &mut usize) {
    if let Some(obj) = maybe_obj.as_object() {
        if let Some(x) = obj.get(key) {
            match x.as_u64() {
                Some(n) if n > 0 && n < 256 => *curr = n as usize,
                _ => {}
            }
        }
    }
}

pub fn parse(json: &str) -> Result<ConversionOptions,DYNERR> {
    let mut ans = ConversionOptions::new();
    let root = serde_json::from_str::<serde_json::Value>(json)?;
    update_json_bool(&root,"upperCaseOpcodes",&mut ans.upper_case_opcodes);
    update_json_bool(&root,"appendColonToLabels",&mut ans.append_colon_to_labels);
    if let Some(columns) = root.get("columns") {
        update_json_column(columns,"opcode",&mut ans.opcode_column);
    }
    Ok(ans)
}
