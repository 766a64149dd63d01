use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tombola::{GameOutcome, Tombola};

/// Writes finished games as numbered JSON files into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self { num: 1, directory })
    }

    /// Returns the path of the written file.
    pub fn write_game_recording(&mut self, recording: &GameRecording) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(writer, recording)?;
        self.num += 1;
        Ok(filepath)
    }
}

/// Everything needed to reproduce and check a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecording {
    pub seed: u64,
    pub tombola: Tombola,
    pub outcome: GameOutcome,
}

impl GameRecording {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
