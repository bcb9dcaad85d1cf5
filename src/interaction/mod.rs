use serde::{Deserialize, Serialize};

/// Outcome of one `HoverState::set_hover` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverTransition {
    /// `index` became the hovered bar; `previous` lost its hover, if any.
    Entered {
        index: usize,
        previous: Option<usize>,
    },
    /// `index` stopped being hovered.
    Left { index: usize },
    Unchanged,
}

/// Per-bar hover flags, at most one set at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoverState {
    flags: Vec<bool>,
}

impl HoverState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Entering a bar clears every other flag; leaving clears only `index`.
    ///
    /// Out-of-range indices are ignored.
    pub fn set_hover(&mut self, index: usize, is_hovering: bool) -> HoverTransition {
        let Some(current) = self.flags.get(index).copied() else {
            return HoverTransition::Unchanged;
        };

        if is_hovering {
            if current {
                return HoverTransition::Unchanged;
            }
            let previous = self.hovered_index();
            self.flags.iter_mut().for_each(|flag| *flag = false);
            self.flags[index] = true;
            HoverTransition::Entered { index, previous }
        } else if current {
            self.flags[index] = false;
            HoverTransition::Left { index }
        } else {
            HoverTransition::Unchanged
        }
    }

    #[must_use]
    pub fn is_hovered(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn hovered_index(&self) -> Option<usize> {
        self.flags.iter().position(|&flag| flag)
    }

    /// Reallocates for `len` bars with every flag cleared.
    pub fn resize(&mut self, len: usize) {
        self.flags = vec![false; len];
    }

    /// Clears the hovered bar, if any.
    pub fn clear(&mut self) -> HoverTransition {
        match self.hovered_index() {
            Some(index) => self.set_hover(index, false),
            None => HoverTransition::Unchanged,
        }
    }
}
