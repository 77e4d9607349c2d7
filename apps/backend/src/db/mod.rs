//! Door progress storage
//!
//! Progress is a map from day to door state held in memory. When a snapshot
//! path is configured the whole map is written as JSON after every change
//! and read back on startup.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use advent_core::{DoorState, Progress, Riddle};

use crate::error::{ApiError, Result};

/// Progress store with optional JSON snapshot
pub struct ProgressStore {
    doors: RwLock<Progress>,
    snapshot: Option<PathBuf>,
}

impl ProgressStore {
    /// Create an empty store that lives only in memory
    pub fn in_memory() -> Self {
        Self {
            doors: RwLock::new(Progress::new()),
            snapshot: None,
        }
    }

    /// Open a store backed by a snapshot file, loading it if it exists
    pub async fn open(path: PathBuf) -> Result<Self> {
        let doors = match tokio::fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str::<Progress>(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Progress::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            "Loaded progress for {} doors from {}",
            doors.len(),
            path.display()
        );

        Ok(Self {
            doors: RwLock::new(doors),
            snapshot: Some(path),
        })
    }

    // === Queries ===

    /// Get a door's state, or a fresh state if it was never touched
    pub async fn get(&self, day: u32) -> DoorState {
        self.doors
            .read()
            .await
            .get(&day)
            .cloned()
            .unwrap_or_else(|| DoorState::new(day))
    }

    /// Get every door that has been touched
    pub async fn all(&self) -> Progress {
        self.doors.read().await.clone()
    }

    // === Mutations ===
    //
    // Each mutation edits a copy of the door. The copy is written to the
    // snapshot first and only replaces the stored door once that succeeds.

    /// Mark a door as opened and cache its riddle.
    ///
    /// A riddle already cached for the door is kept.
    pub async fn open_door(&self, day: u32, riddle: Riddle) -> Result<DoorState> {
        let mut doors = self.doors.write().await;
        let mut door = doors.get(&day).cloned().unwrap_or_else(|| DoorState::new(day));

        door.opened = true;
        if door.riddle.is_none() {
            door.riddle = Some(riddle);
        }

        self.commit(&mut doors, door).await
    }

    /// Record a graded attempt.
    ///
    /// Attempts on a solved door are ignored; a solved door stays solved.
    pub async fn record_attempt(
        &self,
        day: u32,
        correct: bool,
        at: DateTime<Utc>,
    ) -> Result<DoorState> {
        let mut doors = self.doors.write().await;
        let mut door = opened_door(&doors, day)?;

        if door.solved {
            return Ok(door);
        }

        door.attempts += 1;
        if correct {
            door.solved = true;
            door.solved_at = Some(at);
        }

        self.commit(&mut doors, door).await
    }

    /// Reveal one more hint, up to the number of hints the riddle has
    pub async fn reveal_hint(&self, day: u32) -> Result<DoorState> {
        let mut doors = self.doors.write().await;
        let mut door = opened_door(&doors, day)?;

        let available = door.riddle.as_ref().map_or(0, Riddle::hint_count);
        if door.hints_revealed >= available {
            return Ok(door);
        }
        door.hints_revealed += 1;

        self.commit(&mut doors, door).await
    }

    async fn commit(&self, doors: &mut Progress, door: DoorState) -> Result<DoorState> {
        if let Some(path) = &self.snapshot {
            let mut next = doors.clone();
            next.insert(door.day, door.clone());

            let content = serde_json::to_string_pretty(&next)?;
            tokio::fs::write(path, content).await?;
        }

        doors.insert(door.day, door.clone());
        Ok(door)
    }
}

fn opened_door(doors: &Progress, day: u32) -> Result<DoorState> {
    doors
        .get(&day)
        .filter(|door| door.opened)
        .cloned()
        .ok_or_else(|| ApiError::BadRequest(format!("door {} has not been opened", day)))
}
