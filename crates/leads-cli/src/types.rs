use std::path::PathBuf;

use leads_core::StageCounts;

#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub counts: StageCounts,
    pub outputs: Vec<PathBuf>,
    pub dry_run: bool,
}
