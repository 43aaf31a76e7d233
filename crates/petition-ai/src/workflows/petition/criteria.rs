use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{Criterion, EntryId, ELIGIBILITY_THRESHOLD};
use super::entries::CriterionEntry;

/// Coarse lifecycle of a single criterion, derived from its flags and entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionStatus {
    Empty,
    Draft,
    Complete,
}

impl CriterionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "Not Started",
            Self::Draft => "Draft",
            Self::Complete => "Complete",
        }
    }
}

/// Entries and progress flags for one criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionState {
    pub entries: Vec<CriterionEntry>,
    pub is_complete: bool,
    pub is_draft: bool,
}

impl CriterionState {
    /// `is_complete` is authoritative over `is_draft`.
    pub fn status(&self) -> CriterionStatus {
        if self.is_complete {
            CriterionStatus::Complete
        } else if self.entries.is_empty() {
            CriterionStatus::Empty
        } else {
            CriterionStatus::Draft
        }
    }

    pub fn entry(&self, id: &EntryId) -> Option<&CriterionEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    fn entry_mut(&mut self, id: &EntryId) -> Option<&mut CriterionEntry> {
        self.entries.iter_mut().find(|entry| entry.id() == id)
    }
}

/// Per-criterion state for all eight criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaBoard {
    criteria: BTreeMap<Criterion, CriterionState>,
}

impl Default for CriteriaBoard {
    fn default() -> Self {
        let criteria = Criterion::ordered()
            .into_iter()
            .map(|criterion| (criterion, CriterionState::default()))
            .collect();
        Self { criteria }
    }
}

impl CriteriaBoard {
    pub fn state(&self, criterion: Criterion) -> &CriterionState {
        self.criteria
            .get(&criterion)
            .unwrap_or(&EMPTY_STATE)
    }

    fn state_mut(&mut self, criterion: Criterion) -> &mut CriterionState {
        self.criteria.entry(criterion).or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, &CriterionState)> {
        Criterion::ordered()
            .into_iter()
            .map(move |criterion| (criterion, self.state(criterion)))
    }

    pub fn entries(&self, criterion: Criterion) -> &[CriterionEntry] {
        &self.state(criterion).entries
    }

    /// Append an entry. Entries whose kind belongs to another criterion are ignored and a
    /// colliding id is replaced with a fresh one.
    pub fn add_entry(&mut self, criterion: Criterion, mut entry: CriterionEntry) -> bool {
        if entry.criterion() != criterion {
            debug!(%criterion, kind = %entry.criterion(), "ignoring entry filed under the wrong criterion");
            return false;
        }

        entry.normalize_evidence();
        let state = self.state_mut(criterion);
        if state.entry(entry.id()).is_some() {
            entry.set_id(EntryId::generate());
        }
        state.entries.push(entry);
        state.is_draft = true;
        true
    }

    /// Replace the fields of an existing entry, keeping its id.
    pub fn update_entry(
        &mut self,
        criterion: Criterion,
        id: &EntryId,
        mut replacement: CriterionEntry,
    ) -> bool {
        if replacement.criterion() != criterion {
            debug!(%criterion, %id, "ignoring update with mismatched entry kind");
            return false;
        }

        replacement.set_id(id.clone());
        replacement.normalize_evidence();
        match self.state_mut(criterion).entry_mut(id) {
            Some(slot) => {
                *slot = replacement;
                true
            }
            None => {
                debug!(%criterion, %id, "update ignored for unknown entry");
                false
            }
        }
    }

    /// Mutate an existing entry in place. The id and kind cannot be changed.
    pub fn update_entry_with<F>(&mut self, criterion: Criterion, id: &EntryId, patch: F) -> bool
    where
        F: FnOnce(&mut CriterionEntry),
    {
        let Some(slot) = self.state_mut(criterion).entry_mut(id) else {
            debug!(%criterion, %id, "update ignored for unknown entry");
            return false;
        };

        let mut patched = slot.clone();
        patch(&mut patched);
        if patched.criterion() != criterion {
            debug!(%criterion, %id, "patch attempted to change entry kind");
            return false;
        }
        patched.set_id(id.clone());
        patched.normalize_evidence();
        *slot = patched;
        true
    }

    /// Delete an entry. Removing the last entry always clears the complete flag.
    pub fn remove_entry(&mut self, criterion: Criterion, id: &EntryId) -> bool {
        let state = self.state_mut(criterion);
        let before = state.entries.len();
        state.entries.retain(|entry| entry.id() != id);
        let removed = state.entries.len() != before;

        if state.entries.is_empty() {
            state.is_complete = false;
        }

        if !removed {
            debug!(%criterion, %id, "remove ignored for unknown entry");
        }
        removed
    }

    /// Marking complete requires at least one entry; marking incomplete reopens as draft.
    pub fn set_complete(&mut self, criterion: Criterion, complete: bool) -> bool {
        let state = self.state_mut(criterion);
        if complete && state.entries.is_empty() {
            debug!(%criterion, "refusing to complete a criterion without entries");
            return false;
        }

        state.is_complete = complete;
        state.is_draft = !complete;
        true
    }

    pub fn set_draft(&mut self, criterion: Criterion, draft: bool) {
        self.state_mut(criterion).is_draft = draft;
    }

    pub fn completed_count(&self) -> usize {
        self.criteria.values().filter(|state| state.is_complete).count()
    }

    pub fn can_submit_for_review(&self) -> bool {
        self.completed_count() >= ELIGIBILITY_THRESHOLD
    }

    pub fn has_existing_entries(&self) -> bool {
        self.criteria.values().any(|state| !state.entries.is_empty())
    }

    /// Seed an empty criterion with generated drafts. Criteria that already hold any
    /// entry are left untouched.
    pub(crate) fn seed_if_empty(&mut self, criterion: Criterion, drafts: Vec<CriterionEntry>) -> bool {
        let state = self.state_mut(criterion);
        if !state.entries.is_empty() || drafts.is_empty() {
            return false;
        }

        state.entries = drafts
            .into_iter()
            .filter(|entry| entry.criterion() == criterion)
            .map(|mut entry| {
                entry.normalize_evidence();
                entry
            })
            .collect();
        state.is_draft = true;
        true
    }
}

static EMPTY_STATE: CriterionState = CriterionState {
    entries: Vec::new(),
    is_complete: false,
    is_draft: false,
};
