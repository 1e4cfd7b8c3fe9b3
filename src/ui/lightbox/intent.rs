//! Intents for the portfolio lightbox.

use crate::gallery::ItemId;
use crate::ui::mvi::Intent;
use crate::ui::Direction;

/// How an image resolution ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    Loaded,
    Failed(String),
}

impl ResolveOutcome {
    pub fn from_result<E: std::fmt::Display>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => ResolveOutcome::Loaded,
            Err(err) => ResolveOutcome::Failed(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxIntent {
    Open { item: ItemId },
    Close,
    /// Move within `visible`, the freshly recomputed filtered view.
    Navigate {
        direction: Direction,
        visible: Vec<ItemId>,
    },
    ImageResolved {
        generation: u64,
        item: ItemId,
        outcome: ResolveOutcome,
    },
}

impl Intent for LightboxIntent {}
