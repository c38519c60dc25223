use crate::error::{DeployError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// In-memory `utt2dur`: utterance ID → duration string.
///
/// Durations are kept exactly as written in the source file, so whatever
/// precision the upstream tool emitted is carried through unchanged.
#[derive(Debug, Default, Clone)]
pub struct DurationTable {
    durations: HashMap<String, String>,
}

/// One `utt2spk` line. Only the utterance ID feeds the transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUtterance {
    pub utt_id: String,
    pub speaker_id: String,
}

impl DurationTable {
    /// Read a `utt2dur` file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| DeployError::io(path, e))?;
        Self::parse(BufReader::new(file), path)
    }

    /// Parse `<uttId> <duration>` lines. `origin` is only used in errors.
    /// A repeated utterance ID replaces the earlier duration.
    pub fn parse<R: BufRead>(reader: R, origin: &Path) -> Result<Self> {
        let mut durations = HashMap::new();
        for_each_record(reader, origin, |line_no, utt_id, duration| {
            if let Some(prev) = durations.insert(utt_id.to_string(), duration.to_string()) {
                tracing::warn!(
                    utt_id,
                    line = line_no,
                    previous = %prev,
                    "duplicate utterance in {}, keeping later duration",
                    origin.display()
                );
            }
        })?;
        tracing::debug!(records = durations.len(), "loaded {}", origin.display());
        Ok(Self { durations })
    }

    pub fn get(&self, utt_id: &str) -> Option<&str> {
        self.durations.get(utt_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }
}

/// Read a `utt2spk` file from disk, keeping file order.
pub fn read_utt2spk(path: &Path) -> Result<Vec<TargetUtterance>> {
    let file = File::open(path).map_err(|e| DeployError::io(path, e))?;
    parse_utt2spk(BufReader::new(file), path)
}

/// Parse `<uttId> <speakerId> ...` lines; fields past the second are ignored.
pub fn parse_utt2spk<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<TargetUtterance>> {
    let mut targets = Vec::new();
    for_each_record(reader, origin, |_, utt_id, speaker_id| {
        targets.push(TargetUtterance {
            utt_id: utt_id.to_string(),
            speaker_id: speaker_id.to_string(),
        });
    })?;
    tracing::debug!(entries = targets.len(), "loaded {}", origin.display());
    Ok(targets)
}

/// Split every line on whitespace and hand the first two fields to `f`.
/// Blank lines count as malformed.
fn for_each_record<R, F>(reader: R, origin: &Path, mut f: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &str, &str),
{
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| DeployError::io(origin, e))?;
        let line_no = idx + 1;
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next()) {
            (Some(key), Some(value)) => f(line_no, key, value),
            (first, _) => {
                return Err(DeployError::MalformedRecord {
                    path: origin.to_path_buf(),
                    line: line_no,
                    found: usize::from(first.is_some()),
                })
            }
        }
    }
    Ok(())
}
