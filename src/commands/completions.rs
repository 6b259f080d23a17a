//! ## Shell Completions

use clap_complete::Shell;
use super::CommandError;
use crate::STDRESULT;

pub fn generate(mut main_cmd: clap::Command,cmd: &clap::ArgMatches) -> STDRESULT {
    let shell = match cmd.get_one::<String>("shell").map(|s| s.as_str()) {
        Some("bash") => Shell::Bash,
        Some("elv") => Shell::Elvish,
        Some("fish") => Shell::Fish,
        Some("ps1") => Shell::PowerShell,
        Some("zsh") => Shell::Zsh,
        _ => return Err(Box::new(CommandError::InvalidCommand))
    };
    let name = main_cmd.get_name().to_string();
    clap_complete::generate(shell,&mut main_cmd,name,&mut std::io::stdout());
    Ok(())
}
