use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about, arg_required_else_help = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). Ignored when RUST_LOG is set.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the name of every case
    List(GroupArgs),

    /// Print cases with their inputs and expected results
    Dump(DumpArgs),

    /// Run the vectors against the RustCrypto aes-gcm implementation
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
pub struct GroupArgs {
    /// Which case list to select.
    #[arg(short = 'g', long = "group", value_enum, default_value_t = GroupSel::All)]
    pub group: GroupSel,
}

#[derive(Args, Debug)]
pub struct DumpArgs {
    #[command(flatten)]
    pub select: GroupArgs,

    /// Output format. Byte fields are hex encoded in both.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Hex)]
    pub format: Format,
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Only check encryption, skip decrypting the expected results
    #[arg(long = "skip-decrypt")]
    pub skip_decrypt: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum GroupSel {
    #[value(name = "passing")]
    Passing,
    #[value(name = "failing")]
    Failing,
    #[value(name = "decryption-failing")]
    DecryptionFailing,
    #[value(name = "all")]
    All,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum Format {
    #[value(name = "hex")]
    Hex,
    #[value(name = "json")]
    Json,
}
