//! Item Editor
//!
//! Per-row edit state machine. Network calls live in the store; this type
//! only decides what a commit means and how the row reacts to its result.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
    /// Commit sent, waiting for the server
    Saving,
}

/// What a commit asks the store to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    Delete,
    Rename(String),
    Unchanged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemEditor {
    mode: EditMode,
    original: String,
    draft: String,
}

impl ItemEditor {
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            mode: EditMode::Viewing,
            draft: title.clone(),
            original: title,
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode != EditMode::Viewing
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Double-click on the label
    pub fn begin_edit(&mut self) {
        if self.mode == EditMode::Viewing {
            self.draft = self.original.clone();
            self.mode = EditMode::Editing;
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.mode == EditMode::Editing {
            self.draft = text.into();
        }
    }

    /// Escape: drop the draft, no request
    pub fn cancel(&mut self) {
        if self.mode == EditMode::Editing {
            self.draft = self.original.clone();
            self.mode = EditMode::Viewing;
        }
    }

    /// Blur or Enter. Returns `None` when there is nothing to commit,
    /// e.g. the blur that follows an Enter while the first commit is in flight.
    pub fn commit(&mut self) -> Option<Commit> {
        if self.mode != EditMode::Editing {
            return None;
        }

        let title = self.draft.trim();
        let commit = if title.is_empty() {
            Commit::Delete
        } else if title == self.original {
            Commit::Unchanged
        } else {
            Commit::Rename(title.to_string())
        };

        self.mode = match commit {
            Commit::Unchanged => {
                self.draft = self.original.clone();
                EditMode::Viewing
            }
            _ => EditMode::Saving,
        };
        Some(commit)
    }

    pub fn commit_succeeded(&mut self) {
        if self.mode == EditMode::Saving {
            self.mode = EditMode::Viewing;
        }
    }

    /// Revert the draft and stay in edit mode so the user can retry.
    pub fn commit_failed(&mut self) {
        if self.mode == EditMode::Saving {
            self.draft = self.original.clone();
            self.mode = EditMode::Editing;
        }
    }

    /// Follow the server copy of the title while not editing.
    pub fn sync_title(&mut self, title: &str) {
        if self.original != title {
            self.original = title.to_string();
            if self.mode == EditMode::Viewing {
                self.draft = self.original.clone();
            }
        }
    }
}
