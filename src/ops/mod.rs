// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations on the highlighted linedef.
//!
//! Each toggle records an undo checkpoint before flipping exactly one flag,
//! so the checkpoint always captures pre-toggle state.

use crate::model::{Linedef, LinedefId, Map};

pub const TOGGLE_SECRET_UNDO_LABEL: &str = "Toggle linedef show as one-sided flag";
pub const TOGGLE_HIDDEN_UNDO_LABEL: &str = "Toggle linedef not shown on automap flag";

/// The host's undo/redo journal.
///
/// `checkpoint` must be called before the mutation it guards.
pub trait UndoJournal {
    fn checkpoint(&mut self, label: &str, map: &Map);
}

/// A journal keeping labeled full-map snapshots in memory.
#[derive(Debug, Clone, Default)]
pub struct SnapshotJournal {
    entries: Vec<SnapshotEntry>,
}

#[derive(Debug, Clone)]
struct SnapshotEntry {
    label: String,
    map: Map,
}

impl SnapshotJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_label(&self) -> Option<&str> {
        self.entries.last().map(|entry| entry.label.as_str())
    }

    /// Restores the newest checkpoint into `map`, returning its label.
    pub fn undo(&mut self, map: &mut Map) -> Option<String> {
        let entry = self.entries.pop()?;
        *map = entry.map;
        Some(entry.label)
    }
}

impl UndoJournal for SnapshotJournal {
    fn checkpoint(&mut self, label: &str, map: &Map) {
        self.entries.push(SnapshotEntry {
            label: label.to_owned(),
            map: map.clone(),
        });
    }
}

/// What a toggle request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The flag was flipped; `now_set` is its new value.
    Applied { linedef: LinedefId, now_set: bool },
    /// Nothing is highlighted; silently ignored.
    NoHighlight,
    /// The highlighted linedef was disposed under us; silently ignored.
    Stale,
}

impl ToggleOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

pub fn toggle_secret(
    map: &mut Map,
    highlighted: Option<LinedefId>,
    journal: &mut dyn UndoJournal,
) -> ToggleOutcome {
    toggle_flag(
        map,
        highlighted,
        journal,
        TOGGLE_SECRET_UNDO_LABEL,
        |linedef| {
            let now = !linedef.secret();
            linedef.set_secret(now);
            now
        },
    )
}

pub fn toggle_hidden(
    map: &mut Map,
    highlighted: Option<LinedefId>,
    journal: &mut dyn UndoJournal,
) -> ToggleOutcome {
    toggle_flag(
        map,
        highlighted,
        journal,
        TOGGLE_HIDDEN_UNDO_LABEL,
        |linedef| {
            let now = !linedef.hidden();
            linedef.set_hidden(now);
            now
        },
    )
}

fn toggle_flag(
    map: &mut Map,
    highlighted: Option<LinedefId>,
    journal: &mut dyn UndoJournal,
    label: &str,
    flip: impl FnOnce(&mut Linedef) -> bool,
) -> ToggleOutcome {
    let Some(id) = highlighted else {
        return ToggleOutcome::NoHighlight;
    };
    if map.linedef(id).is_none() {
        return ToggleOutcome::Stale;
    }

    // Checkpoint first so undo restores the pre-toggle flag.
    journal.checkpoint(label, map);

    let linedef = map
        .linedef_mut(id)
        .expect("linedef verified live above");
    let now_set = flip(linedef);
    ToggleOutcome::Applied {
        linedef: id,
        now_set,
    }
}
