use clap::{Args, Parser, Subcommand};
use cloak_core::token::DEFAULT_PREFIX;
use cloak_telemetry::LogFormat;
use std::path::PathBuf;

pub const INPUT_DIR_ENV: &str = "CLOAK_INPUT_DIR";
pub const OUTPUT_DIR_ENV: &str = "CLOAK_OUTPUT_DIR";
pub const PREFIX_ENV: &str = "OBF_PREFIX";
pub const LOG_FORMAT_ENV: &str = "CLOAK_LOG_FORMAT";

pub const DEFAULT_INPUT_DIR: &str = "input";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Parser)]
#[command(name = "cloak-rewrite", version, about = "Obfuscate .m3u8 references in playlists")]
pub struct CLI {
    #[arg(
        long,
        global = true,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormat::Text
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rewrite every .m3u/.m3u8 file of the input directory.
    Rewrite(RewriteArgs),
    /// Print the reference token for a single URL.
    Encode(EncodeArgs),
    /// Recover the URL behind a reference token.
    Decode(DecodeArgs),
}

#[derive(Debug, Args)]
pub struct PrefixArg {
    /// Text prepended to every encoded payload.
    #[arg(long, env = PREFIX_ENV, default_value = DEFAULT_PREFIX)]
    pub prefix: String,
}

#[derive(Debug, Args)]
pub struct RewriteArgs {
    #[arg(long, env = INPUT_DIR_ENV, default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    #[arg(long, env = OUTPUT_DIR_ENV, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub prefix: PrefixArg,

    /// Stop at the first file that cannot be read or written.
    #[arg(long)]
    pub fail_fast: bool,

    /// Print the run report as JSON on stdout.
    #[arg(long)]
    pub report_json: bool,
}

#[derive(Debug, Args)]
pub struct EncodeArgs {
    pub url: String,

    #[command(flatten)]
    pub prefix: PrefixArg,
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
    pub token: String,

    #[command(flatten)]
    pub prefix: PrefixArg,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        CLI::command().debug_assert();
    }

    #[test]
    fn rewrite_defaults() {
        let cli = CLI::try_parse_from(["cloak-rewrite", "rewrite"]).unwrap();
        let Command::Rewrite(args) = cli.command else {
            panic!("expected rewrite subcommand");
        };
        assert!(!args.fail_fast);
        assert!(!args.report_json);
        if std::env::var_os(INPUT_DIR_ENV).is_none() {
            assert_eq!(args.input_dir, PathBuf::from(DEFAULT_INPUT_DIR));
        }
    }

    #[test]
    fn encode_takes_explicit_prefix() {
        let cli =
            CLI::try_parse_from(["cloak-rewrite", "encode", "http://a/b.m3u8", "--prefix", "obf://"])
                .unwrap();
        let Command::Encode(args) = cli.command else {
            panic!("expected encode subcommand");
        };
        assert_eq!(args.url, "http://a/b.m3u8");
        assert_eq!(args.prefix.prefix, "obf://");
    }
}
