use serde::{Deserialize, Serialize};

/// When bars replay their entry animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationReplay {
    /// Only on a bar index's first paint, including indices appended later.
    #[default]
    OnInsert,
    /// On every rendered frame.
    Always,
    Never,
}

/// First-paint bookkeeping per bar index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct EntryAnimationTracker {
    painted: Vec<bool>,
}

impl EntryAnimationTracker {
    /// Grows with unpainted slots or forgets trailing indices.
    pub(super) fn sync_len(&mut self, len: usize) {
        self.painted.resize(len, false);
    }

    pub(super) fn is_pending(&self, index: usize, replay: AnimationReplay) -> bool {
        match replay {
            AnimationReplay::OnInsert => !self.painted.get(index).copied().unwrap_or(false),
            AnimationReplay::Always => true,
            AnimationReplay::Never => false,
        }
    }

    pub(super) fn mark_all_painted(&mut self) {
        self.painted.iter_mut().for_each(|painted| *painted = true);
    }

    pub(super) fn reset(&mut self) {
        self.painted.iter_mut().for_each(|painted| *painted = false);
    }
}
