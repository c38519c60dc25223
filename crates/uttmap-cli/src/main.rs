mod cmd_deploy;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "uttmap",
    version,
    about = "Deploy a source utt2dur onto an augmented (RIR/MUSAN) data directory"
)]
struct Cli {
    /// Source utt2dur (`<uttId> <duration>` per line)
    #[arg(long = "src-utt2dur", value_name = "PATH")]
    src_utt2dur: PathBuf,
    /// Target utt2dur to write (truncated if it exists)
    #[arg(long = "tar-utt2dur", value_name = "PATH")]
    tar_utt2dur: PathBuf,
    /// Target utt2spk listing the augmented utterance IDs
    #[arg(long = "tar-utt2spk", value_name = "PATH")]
    tar_utt2spk: PathBuf,
    /// Substring marking the original utterance token in augmented IDs
    #[arg(long, default_value = uttmap_core::DEFAULT_PREFIX)]
    prefix: String,
    /// Don't print the summary line
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    cmd_deploy::execute(&cmd_deploy::DeployParams {
        src_utt2dur: &cli.src_utt2dur,
        tar_utt2spk: &cli.tar_utt2spk,
        tar_utt2dur: &cli.tar_utt2dur,
        prefix: &cli.prefix,
        quiet: cli.quiet,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_defaults_to_bac() {
        let cli = Cli::try_parse_from([
            "uttmap",
            "--src-utt2dur",
            "a",
            "--tar-utt2dur",
            "b",
            "--tar-utt2spk",
            "c",
        ])
        .unwrap();
        assert_eq!(cli.prefix, "BAC");
        assert_eq!(cli.src_utt2dur, PathBuf::from("a"));
        assert_eq!(cli.tar_utt2dur, PathBuf::from("b"));
        assert_eq!(cli.tar_utt2spk, PathBuf::from("c"));
        assert!(!cli.quiet);
    }

    #[test]
    fn explicit_prefix() {
        let cli = Cli::try_parse_from([
            "uttmap",
            "--src-utt2dur=a",
            "--tar-utt2dur=b",
            "--tar-utt2spk=c",
            "--prefix",
            "SPK",
            "-q",
        ])
        .unwrap();
        assert_eq!(cli.prefix, "SPK");
        assert!(cli.quiet);
    }

    #[test]
    fn missing_required_path_is_rejected() {
        let res = Cli::try_parse_from(["uttmap", "--src-utt2dur", "a", "--tar-utt2spk", "c"]);
        assert!(res.is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
