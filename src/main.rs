//! # Command Line Interface
//!
//! Subcommands are run by the `commands` module.

use env_logger;
use log::error;
use typ65conv::commands;
use typ65conv::commands::CommandError;
use typ65conv::STDRESULT;

mod cli;

fn main() -> STDRESULT
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let main_cmd = cli::build_cli();
    let matches = main_cmd.clone().get_matches();

    // Convert Typist's notation

    if let Some(cmd) = matches.subcommand_matches("convert") {
        return commands::convert::convert(cmd);
    }

    // Build an opcode table

    if let Some(cmd) = matches.subcommand_matches("mktable") {
        return commands::mktable::mktable(cmd);
    }

    // Shell completions

    if let Some(cmd) = matches.subcommand_matches("completions") {
        return commands::completions::generate(main_cmd,cmd);
    }

    error!("No subcommand was found, try `typ65conv --help`");
    return Err(Box::new(CommandError::InvalidCommand));
}
