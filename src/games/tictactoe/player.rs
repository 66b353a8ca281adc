//! Player identity.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// A named participant holding one of the two playing marks.
///
/// Players never change after construction; a [`Game`](super::Game)
/// borrows them for as long as it runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    #[new(into)]
    name: String,
    mark: Mark,
}

impl Player {
    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mark this player places (`First` or `Second`).
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}
