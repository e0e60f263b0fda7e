//! NoteStore: process-local note collection
//!
//! Holds every live note in insertion order behind a single `RwLock`. Writers
//! hold the write guard for the whole mutation, so no reader ever sees an id
//! allocated but not yet appended. Callers only ever get clones back.

use chrono::{DateTime, Duration, DurationRound, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use super::errors::NoteError;
use crate::models::{CreateNote, Note, UpdateNote};

pub struct NoteStore {
    notes: RwLock<Vec<Note>>,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            notes: RwLock::new(Vec::new()),
        }
    }

    /// Append a new note. Input is expected to come from the validator.
    pub fn create(&self, req: CreateNote) -> Note {
        let now = now_millis();
        let mut notes = self.notes.write();

        let mut id = Uuid::new_v4();
        while notes.iter().any(|n| n.id == id) {
            id = Uuid::new_v4();
        }

        let note = Note {
            id,
            title: req.title,
            content: req.content,
            created_at: now,
            updated_at: now,
        };
        notes.push(note.clone());

        log::debug!("[NOTES] Created note {}", note.id);
        note
    }

    /// All live notes in insertion order
    pub fn list(&self) -> Vec<Note> {
        self.notes.read().clone()
    }

    pub fn get(&self, id: Uuid) -> Result<Note, NoteError> {
        self.notes
            .read()
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| NoteError::not_found(id))
    }

    /// Apply the provided fields and bump `updated_at`.
    ///
    /// `updated_at` always moves forward, even when the clock has not advanced a
    /// full millisecond since the previous stamp.
    pub fn update(&self, id: Uuid, req: UpdateNote) -> Result<Note, NoteError> {
        let mut notes = self.notes.write();
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| NoteError::not_found(id))?;

        if let Some(title) = req.title {
            note.title = title;
        }
        if let Some(content) = req.content {
            note.content = content;
        }
        note.updated_at = now_millis().max(note.updated_at + Duration::milliseconds(1));

        log::debug!("[NOTES] Updated note {}", note.id);
        Ok(note.clone())
    }

    /// Remove a note, returning its last state. Survivors keep their order.
    pub fn delete(&self, id: Uuid) -> Result<Note, NoteError> {
        let mut notes = self.notes.write();
        let index = notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| NoteError::not_found(id))?;

        let removed = notes.remove(index);
        log::debug!("[NOTES] Deleted note {}", removed.id);
        Ok(removed)
    }

    /// Drop every note. Test/admin support only.
    pub fn clear(&self) {
        self.notes.write().clear();
    }

    pub fn count(&self) -> usize {
        self.notes.read().len()
    }
}

/// Current time truncated to whole milliseconds, matching the wire format
fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    now.duration_trunc(Duration::milliseconds(1)).unwrap_or(now)
}
