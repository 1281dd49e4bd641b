//! The selection forest
//!
//! Leaves are keyed by analysis mode plus the indices read from the most
//! recent rounds. Depth zero needs no history and is served by a single root
//! selector over the absolute moves, shared by every mode.

use std::collections::HashMap;
use std::fmt;

use crate::config::MAX_SUPPORTED_DEPTH;
use crate::game::{AnalysisMode, Choice, Indexed, ABSOLUTE_MOVES, ANALYSIS_MODES};
use crate::history::MoveHistory;
use crate::selector::Selector;
use crate::utils::{decode_path, leaf_weight, leaves_at_depth};
use crate::{PickerError, Result};

/// Address of a leaf selector
///
/// `path[0]` is the index read from the most recent round; the depth is the
/// length of the path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeafKey {
    pub mode: AnalysisMode,
    pub path: Vec<u8>,
}

impl LeafKey {
    pub fn new(mode: AnalysisMode, path: Vec<u8>) -> Self {
        LeafKey { mode, path }
    }

    /// Reads the key for `mode` at `depth` out of `history`
    pub fn from_history(mode: AnalysisMode, depth: usize, history: &MoveHistory) -> Result<Self> {
        if history.len() < depth {
            return Err(PickerError::HistoryTooShort {
                depth,
                available: history.len(),
            });
        }
        let path = history
            .rounds()
            .take(depth)
            .map(|round| mode.index_of(round) as u8)
            .collect();
        Ok(LeafKey { mode, path })
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

impl fmt::Display for LeafKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.mode)?;
        for (i, idx) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", idx)?;
        }
        write!(f, "]")
    }
}

/// Every leaf selector the picker can resolve to, built up front
#[derive(Debug, Clone)]
pub struct SelectionForest {
    root: Selector<Choice>,
    leaves: HashMap<LeafKey, Selector<Choice>>,
    max_depth: usize,
}

impl SelectionForest {
    /// Builds the full forest
    ///
    /// Leaves at depth `d` get `base_weight * 3^(max_depth - d)` per
    /// category, which keeps every (mode, depth) pair equally likely before
    /// any feedback. Depths above [`MAX_SUPPORTED_DEPTH`] are rejected.
    pub fn build(base_weight: u32, max_depth: usize) -> Result<Self> {
        if max_depth > MAX_SUPPORTED_DEPTH {
            return Err(PickerError::InvalidConfiguration(format!(
                "max_depth {} exceeds supported maximum {}",
                max_depth, MAX_SUPPORTED_DEPTH
            )));
        }

        let mut root = Selector::new();
        let root_weight = weight_for(base_weight, max_depth, 0)?;
        for m in ABSOLUTE_MOVES {
            root.add_category(root_weight, Choice::Move(m))?;
        }

        let per_mode: usize = (1..=max_depth).map(leaves_at_depth).sum();
        let mut leaves = HashMap::with_capacity(per_mode * AnalysisMode::COUNT);

        for depth in 1..=max_depth {
            let weight = weight_for(base_weight, max_depth, depth)?;
            for mode in ANALYSIS_MODES {
                for n in 0..leaves_at_depth(depth) {
                    let mut leaf = Selector::new();
                    for choice in mode.candidates() {
                        leaf.add_category(weight, choice)?;
                    }
                    leaves.insert(LeafKey::new(mode, decode_path(n, depth)), leaf);
                }
            }
        }

        log::info!(
            "built selection forest: depth {}, {} leaves",
            max_depth,
            leaves.len() + 1
        );

        Ok(SelectionForest {
            root,
            leaves,
            max_depth,
        })
    }

    /// Finds the selector for `key`; an empty path is the root
    pub fn leaf(&self, key: &LeafKey) -> Option<&Selector<Choice>> {
        if key.path.is_empty() {
            Some(&self.root)
        } else {
            self.leaves.get(key)
        }
    }

    /// Resolves the selector used for `mode` at `depth` against `history`
    pub fn resolve(
        &self,
        depth: usize,
        mode: AnalysisMode,
        history: &MoveHistory,
    ) -> Result<(LeafKey, &Selector<Choice>)> {
        let key = LeafKey::from_history(mode, depth, history)?;
        match self.leaf(&key) {
            Some(leaf) => Ok((key, leaf)),
            None => Err(PickerError::MissingLeaf(key)),
        }
    }

    pub(crate) fn resolve_mut(
        &mut self,
        depth: usize,
        mode: AnalysisMode,
        history: &MoveHistory,
    ) -> Result<&mut Selector<Choice>> {
        let key = LeafKey::from_history(mode, depth, history)?;
        if key.path.is_empty() {
            return Ok(&mut self.root);
        }
        self.leaves
            .get_mut(&key)
            .ok_or(PickerError::MissingLeaf(key))
    }

    /// The depth-zero selector over the absolute moves
    pub fn root(&self) -> &Selector<Choice> {
        &self.root
    }

    /// Iterates over every non-root leaf, in no particular order
    pub fn leaves(&self) -> impl Iterator<Item = (&LeafKey, &Selector<Choice>)> + '_ {
        self.leaves.iter()
    }

    /// Number of selectors, root included
    pub fn len(&self) -> usize {
        self.leaves.len() + 1
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

fn weight_for(base_weight: u32, max_depth: usize, depth: usize) -> Result<u32> {
    leaf_weight(base_weight, max_depth, depth)
        .ok_or_else(|| PickerError::InvalidConfiguration("leaf weights overflow".to_string()))
}
