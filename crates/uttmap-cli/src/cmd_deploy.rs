use anyhow::Context;
use std::path::Path;
use uttmap_core::{deploy, DeployConfig};

pub struct DeployParams<'a> {
    pub src_utt2dur: &'a Path,
    pub tar_utt2spk: &'a Path,
    pub tar_utt2dur: &'a Path,
    pub prefix: &'a str,
    pub quiet: bool,
}

/// `uttmap --src-utt2dur .. --tar-utt2spk .. --tar-utt2dur ..`
pub fn execute(params: &DeployParams<'_>) -> anyhow::Result<()> {
    let config = DeployConfig::new(params.src_utt2dur, params.tar_utt2spk, params.tar_utt2dur)
        .with_prefix(params.prefix);

    tracing::info!(
        src = %config.src_utt2dur.display(),
        spk = %config.tar_utt2spk.display(),
        prefix = %config.prefix,
        "deploying utt2dur"
    );
    let stats = deploy(&config)
        .with_context(|| format!("deploying durations to {}", config.tar_utt2dur.display()))?;

    if !params.quiet {
        eprintln!(
            "Wrote {} durations to {} ({} source records)",
            stats.lines_written,
            config.tar_utt2dur.display(),
            stats.source_records
        );
    }
    Ok(())
}
