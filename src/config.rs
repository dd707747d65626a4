use std::{path::PathBuf, time::Duration};

use crate::snake::Position;

/// Playfield and pacing settings. Distances are in logical pixels.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    /// Side of one snake segment, and the distance moved per tick
    pub block: i32,
    pub ticks_per_second: u32,
    pub leaderboard_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 800,
            height: 600,
            block: 15,
            ticks_per_second: 15,
            leaderboard_path: PathBuf::from("leaderboard.json"),
        }
    }
}

impl GameConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }

    /// Centre of the playfield, snapped down to the grid
    pub fn centre(&self) -> Position {
        Position::new(
            self.width / 2 / self.block * self.block,
            self.height / 2 / self.block * self.block,
        )
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Blocks per row and per column. A partial block at the far edge still
    /// holds a snake segment, so it counts.
    pub fn grid_size(&self) -> (i32, i32) {
        (ceil_div(self.width, self.block), ceil_div(self.height, self.block))
    }
}

fn ceil_div(a: i32, b: i32) -> i32 {
    (a + b - 1) / b
}
