use crate::compound::{resolve_original_id, DEFAULT_PREFIX};
use crate::error::{DeployError, Result};
use crate::table::{read_utt2spk, DurationTable, TargetUtterance};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DeployConfig {
    pub src_utt2dur: PathBuf,
    pub tar_utt2spk: PathBuf,
    pub tar_utt2dur: PathBuf,
    pub prefix: String,
}

impl DeployConfig {
    pub fn new(
        src_utt2dur: impl Into<PathBuf>,
        tar_utt2spk: impl Into<PathBuf>,
        tar_utt2dur: impl Into<PathBuf>,
    ) -> Self {
        Self {
            src_utt2dur: src_utt2dur.into(),
            tar_utt2spk: tar_utt2spk.into(),
            tar_utt2dur: tar_utt2dur.into(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeployStats {
    pub source_records: usize,
    pub target_entries: usize,
    pub lines_written: usize,
}

/// Load the source `utt2dur` and target `utt2spk`, then write the target
/// `utt2dur`.
///
/// The output file is truncated before the first entry is resolved and
/// written in place. The first error stops the run and whatever was already
/// flushed stays on disk.
pub fn deploy(config: &DeployConfig) -> Result<DeployStats> {
    let table = DurationTable::load(&config.src_utt2dur)?;
    let targets = read_utt2spk(&config.tar_utt2spk)?;

    let out_path = &config.tar_utt2dur;
    let file = File::create(out_path).map_err(|e| DeployError::io(out_path, e))?;
    let mut writer = BufWriter::new(file);
    let lines_written = write_utt2dur(&mut writer, &table, &targets, &config.prefix)
        .map_err(|e| attach_path(e, out_path))?;
    writer.flush().map_err(|e| DeployError::io(out_path, e))?;

    tracing::debug!(lines = lines_written, "wrote {}", out_path.display());
    Ok(DeployStats {
        source_records: table.len(),
        target_entries: targets.len(),
        lines_written,
    })
}

/// Write one `<augmentedId> <duration>` line per target, in target order.
/// Returns the number of lines written.
pub fn write_utt2dur<W: Write>(
    writer: &mut W,
    table: &DurationTable,
    targets: &[TargetUtterance],
    prefix: &str,
) -> Result<usize> {
    for target in targets {
        let key = resolve_original_id(&target.utt_id, prefix)?;
        let duration = table.get(key).ok_or_else(|| DeployError::UnknownKey {
            utt_id: target.utt_id.clone(),
            key: key.to_string(),
        })?;
        writeln!(writer, "{} {}", target.utt_id, duration)
            .map_err(|e| DeployError::io(PathBuf::new(), e))?;
    }
    Ok(targets.len())
}

// `write_utt2dur` only sees a writer, so fill in the output path afterwards.
fn attach_path(err: DeployError, path: &std::path::Path) -> DeployError {
    match err {
        DeployError::Io { source, .. } => DeployError::io(path, source),
        other => other,
    }
}
