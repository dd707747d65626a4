use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_ENTRIES: usize = 10;
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub date: String,
}

pub type Leaderboard = Vec<LeaderboardEntry>;

#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top scores kept as a pretty-printed JSON array on disk.
#[derive(Debug, Clone)]
pub struct LeaderboardStore {
    path: PathBuf,
}

impl LeaderboardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LeaderboardStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Never fails: a missing or unreadable file is an empty board.
    pub fn load(&self) -> Leaderboard {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return vec![],
        };

        match serde_json::from_str(&contents) {
            Ok(board) => board,
            Err(e) => {
                warn!("Ignoring malformed leaderboard {}: {}", self.path.display(), e);
                vec![]
            }
        }
    }

    /// Ranks `board`, keeps the top entries and replaces the file with them.
    pub fn save(&self, mut board: Leaderboard) -> Result<Leaderboard, LeaderboardError> {
        rank(&mut board);

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        board.serialize(&mut ser)?;

        // Write next to the target, then swap it in
        let tmp = self.path.with_extension("json.tmp");
        if let Err(e) = replace_with(&tmp, &self.path, &buf) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        Ok(board)
    }

    /// Records a finished game. A failed save is logged and the updated
    /// board is still returned.
    pub fn submit(&self, name: &str, score: u32) -> Leaderboard {
        let mut board = self.load();
        board.push(LeaderboardEntry {
            name: name.to_string(),
            score,
            date: chrono::Local::now().format(DATE_FORMAT).to_string(),
        });

        match self.save(board.clone()) {
            Ok(saved) => {
                info!("Saved score {} for {}", score, name);
                saved
            }
            Err(e) => {
                error!("Error saving leaderboard to {}: {}", self.path.display(), e);
                rank(&mut board);
                board
            }
        }
    }
}

/// Descending by score; the sort is stable so older entries win ties.
fn rank(board: &mut Leaderboard) {
    board.sort_by(|a, b| b.score.cmp(&a.score));
    board.truncate(MAX_ENTRIES);
}

fn replace_with(tmp: &Path, target: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(tmp)?;
    file.write_all(contents)?;
    file.sync_all()?;
    fs::rename(tmp, target)
}
