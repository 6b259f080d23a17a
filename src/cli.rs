use clap::{value_parser, crate_version, Arg, ArgAction, Command, ValueHint};

const CONFIG_LONG_HELP: &str = "JSON string with conversion settings, e.g.,
`{\"upperCaseOpcodes\": true, \"appendColonToLabels\": true, \"columns\": {\"opcode\": 16}}`
flags given on the command line take precedence";
const TABLE_LONG_HELP: &str = "The opcode table is a JSON object mapping each Typist mnemonic
to its traditional template and size, e.g., `{\"table\": {\"lda.#\": {\"oldmnem\": \"lda #?\", \"size\": 2}}}`.
Use `typ65conv mktable` to create one from a list of mnemonics.";
const LIST_LONG_HELP: &str = "Each line of the list has a Typist mnemonic and the instruction size in bytes,
e.g., `lda.# 2`.  Blank lines and lines starting with `;` or `#` are skipped.";

fn output_arg(default: &'static str) -> Arg {
    Arg::new("output").short('o').long("output").value_name("PATH").help("output file, `-` for stdout")
        .value_hint(ValueHint::FilePath)
        .required(false)
        .default_value(default)
}

pub fn build_cli() -> Command {
    let long_help = "typ65conv is always invoked with exactly one of several subcommands.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
convert:               `typ65conv convert -i prog.tasm -o prog.asm`
upper case and colons: `typ65conv convert --ou --lc -i prog.tasm`
make opcode table:     `typ65conv mktable -l opcodes65c02.txt -o opcodes.json`";

    let mut main_cmd = Command::new("typ65conv")
        .about("Converts Typist's Assembler Notation to traditional assembler formats.")
        .after_long_help(long_help)
        .version(crate_version!());

    main_cmd = main_cmd.subcommand(
        Command::new("convert")
            .arg(Arg::new("input").short('i').long("input").value_name("PATH").help("input file in Typist's notation")
                .value_hint(ValueHint::FilePath)
                .required(true))
            .arg(output_arg("typ65conv.asm"))
            .arg(Arg::new("ou").long("ou").help("convert opcodes to upper case").action(ArgAction::SetTrue))
            .arg(Arg::new("lc").long("lc").help("add colon to labels").action(ArgAction::SetTrue))
            .arg(Arg::new("table").short('t').long("table").value_name("PATH").help("opcode table")
                .long_help(TABLE_LONG_HELP)
                .value_hint(ValueHint::FilePath)
                .required(false)
                .default_value("opcodes.json"))
            .arg(Arg::new("config").short('c').long("config").value_name("JSON").help("conversion settings")
                .long_help(CONFIG_LONG_HELP)
                .required(false))
            .arg(Arg::new("jobs").short('j').long("jobs").value_name("N").help("maximum number of workers")
                .value_parser(value_parser!(usize))
                .required(false))
            .about("convert a source file to the traditional format")
            .after_help("lines that cannot be converted are marked with `ERROR -->` in the output")
    );
    main_cmd = main_cmd.subcommand(
        Command::new("mktable")
            .arg(Arg::new("list").short('l').long("list").value_name("PATH").help("list of mnemonics and sizes")
                .long_help(LIST_LONG_HELP)
                .value_hint(ValueHint::FilePath)
                .required(true))
            .arg(output_arg("opcodes.json"))
            .about("write an opcode table built from a list of Typist mnemonics")
    );
    main_cmd = main_cmd.subcommand(
        Command::new("completions")
            .arg(
                Arg::new("shell").short('s').long("shell").help("shell target").value_name("NAME")
                    .required(true)
                    .value_parser(["bash","elv","fish","ps1","zsh"])
            )
            .about("write completions script to stdout for the specified shell")
    );
    return main_cmd;
}
