//! # CLI Subcommands
//!
//! Contains modules that run the subcommands.

pub mod convert;
pub mod mktable;
pub mod completions;

#[derive(thiserror::Error,Debug)]
pub enum CommandError {
    #[error("Command could not be interpreted")]
    InvalidCommand,
    #[error("No input file was provided")]
    MissingInput,
    #[error("File not found")]
    FileNotFound
}

/// Read a text file, logging and mapping a missing file to `CommandError::FileNotFound`.
/// Bytes that are not UTF-8 are replaced rather than rejected.
pub fn read_text(path: &str,what: &str) -> Result<String,crate::DYNERR> {
    match std::fs::read(path) {
        Ok(bytes) => {
            let txt = String::from_utf8_lossy(&bytes);
            if let std::borrow::Cow::Owned(_) = txt {
                log::warn!("{} {} is not valid UTF-8, some characters were replaced",what,path);
            }
            Ok(txt.into_owned())
        },
        Err(e) if e.kind()==std::io::ErrorKind::NotFound => {
            log::error!("{} {} does not exist",what,path);
            Err(Box::new(CommandError::FileNotFound))
        },
        Err(e) => {
            log::error!("{} {} could not be read",what,path);
            Err(Box::new(e))
        }
    }
}

/// Write text to a file, or to stdout if the path is `-`
pub fn write_text(path: &str,text: &str) -> crate::STDRESULT {
    use std::io::Write;
    if path=="-" {
        std::io::stdout().write_all(text.as_bytes())?;
        return Ok(());
    }
    let mut f = std::io::BufWriter::new(std::fs::File::create(path)?);
    f.write_all(text.as_bytes())?;
    f.flush()?;
    Ok(())
}
