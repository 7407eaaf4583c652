use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{Backend, StoreError};
use crate::game::board::{Board, Snapshot};
use crate::game::piece::{Color, Occupant};
use crate::game::session::Game;

/// One YAML file per owner under a data directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

/// On-disk layout: the side to move and eight rows of letter codes, rank 8 first.
#[derive(Debug, Serialize, Deserialize)]
struct GameRecord {
    turn: Color,
    rows: Vec<String>,
}

impl GameRecord {
    fn from_game(game: &Game) -> Self {
        let rows = game
            .board
            .snapshot()
            .iter()
            .map(|row| row.iter().map(|o| o.letter()).collect::<String>())
            .collect();
        GameRecord {
            turn: game.turn,
            rows,
        }
    }

    fn into_game(self, owner: &str) -> Result<Game, StoreError> {
        let corrupt = |reason: String| StoreError::Corrupt {
            owner: owner.to_string(),
            reason,
        };
        if self.rows.len() != 8 {
            return Err(corrupt(format!(
                "expected 8 rows, found {}",
                self.rows.len()
            )));
        }
        let mut squares: Snapshot = [[Occupant::Empty; 8]; 8];
        for (row, line) in self.rows.iter().enumerate() {
            let codes: Vec<char> = line.chars().collect();
            if codes.len() != 8 {
                return Err(corrupt(format!(
                    "row {} has {} squares",
                    row + 1,
                    codes.len()
                )));
            }
            for (col, code) in codes.into_iter().enumerate() {
                squares[row][col] = Occupant::from_letter(code)
                    .ok_or_else(|| corrupt(format!("unknown piece code {code:?}")))?;
            }
        }
        Ok(Game {
            board: Board::from_snapshot(squares),
            turn: self.turn,
        })
    }
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileBackend { dir: dir.into() }
    }

    /// File holding `owner`'s game. Characters other than ASCII letters, digits
    /// and `-` are hex-escaped so distinct owners never share a file.
    pub fn path_for(&self, owner: &str) -> PathBuf {
        let mut name = String::with_capacity(owner.len() + 10);
        name.push_str("game-");
        for b in owner.bytes() {
            if b.is_ascii_alphanumeric() || b == b'-' {
                name.push(b as char);
            } else {
                name.push_str(&format!("_{b:02x}"));
            }
        }
        name.push_str(".yaml");
        self.dir.join(name)
    }
}

impl Backend for FileBackend {
    fn load(&self, owner: &str) -> Result<Option<Game>, StoreError> {
        let path = self.path_for(owner);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        let record: GameRecord =
            serde_yaml::from_str(&content).map_err(|source| StoreError::Yaml { path, source })?;
        record.into_game(owner).map(Some)
    }

    fn save(&mut self, owner: &str, game: &Game) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(owner);
        let content = serde_yaml::to_string(&GameRecord::from_game(game)).map_err(|source| {
            StoreError::Yaml {
                path: path.clone(),
                source,
            }
        })?;
        // Write beside the target and rename over it so a reader never sees a
        // half-written game.
        let tmp = path.with_extension("yaml.tmp");
        fs::write(&tmp, content).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("saved game for {owner} to {}", path.display());
        Ok(())
    }

    fn remove(&mut self, owner: &str) -> Result<bool, StoreError> {
        let path = self.path_for(owner);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}
