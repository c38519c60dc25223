pub mod compound;
pub mod deploy;
pub mod error;
pub mod table;

pub use compound::{resolve_original_id, DEFAULT_PREFIX};
pub use deploy::{deploy, write_utt2dur, DeployConfig, DeployStats};
pub use error::{DeployError, Result};
pub use table::{parse_utt2spk, read_utt2spk, DurationTable, TargetUtterance};
