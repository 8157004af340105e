//! Collision channels and response tables
//!
//! Every component belongs to one channel and carries a table describing
//! how it responds to each channel it might meet. Responses are
//! directional (A's answer to B's channel can differ from B's answer to
//! A's), but the outcome of a pair is symmetric: it is resolved from both
//! answers with Ignore taking precedence over Block, and Block over
//! Overlap.

use serde::{Deserialize, Serialize};

/// Number of distinct collision channels
pub const MAX_CHANNELS: usize = 16;

/// Identifier for a collision category
///
/// A small index into the response table. The named constants cover the
/// common gameplay categories; the rest of the range is free for games
/// to assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollisionChannel(u8);

impl CollisionChannel {
    /// Static level geometry
    pub const WORLD_STATIC: Self = Self(0);
    /// Movable world objects
    pub const WORLD_DYNAMIC: Self = Self(1);
    /// Player and AI characters
    pub const PAWN: Self = Self(2);
    /// Bullets, missiles, and other projectiles
    pub const PROJECTILE: Self = Self(3);
    /// Trigger volumes
    pub const TRIGGER: Self = Self(4);
    /// Debris and small physics objects
    pub const DEBRIS: Self = Self(5);
    /// Camera probes
    pub const CAMERA: Self = Self(6);
    /// Pickups and collectibles
    pub const PICKUP: Self = Self(7);

    /// Create a channel from a raw index
    ///
    /// # Panics
    /// Panics if `index` is not below [`MAX_CHANNELS`].
    pub fn new(index: u8) -> Self {
        assert!(
            (index as usize) < MAX_CHANNELS,
            "collision channel index {index} out of range"
        );
        Self(index)
    }

    /// The channel's index into a response table
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// How one component responds to another component's channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionResponse {
    /// Solid contact: the pair counts as a blocking hit
    Block,
    /// Pass-through contact that still reports overlap
    Overlap,
    /// No interaction at all
    Ignore,
}

/// Resolved interaction for a pair of components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairInteraction {
    /// At least one side ignores the other; the pair is skipped entirely
    Ignore,
    /// Neither side ignores and at least one side blocks
    Block,
    /// Both sides overlap
    Overlap,
}

/// Resolve the symmetric outcome from the two directional responses
pub fn resolve_pair(a_to_b: CollisionResponse, b_to_a: CollisionResponse) -> PairInteraction {
    use CollisionResponse::{Block, Ignore, Overlap};
    match (a_to_b, b_to_a) {
        (Ignore, _) | (_, Ignore) => PairInteraction::Ignore,
        (Block, _) | (_, Block) => PairInteraction::Block,
        (Overlap, Overlap) => PairInteraction::Overlap,
    }
}

/// Per-channel response table
///
/// A fixed array indexed by channel. New tables block everything, which
/// is the safest default for level geometry; gameplay relaxes entries
/// per channel as needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTable {
    responses: [CollisionResponse; MAX_CHANNELS],
}

impl Default for ResponseTable {
    fn default() -> Self {
        Self::blocking()
    }
}

impl ResponseTable {
    /// Table that blocks every channel
    pub fn blocking() -> Self {
        Self {
            responses: [CollisionResponse::Block; MAX_CHANNELS],
        }
    }

    /// Table that overlaps every channel
    pub fn overlapping() -> Self {
        Self {
            responses: [CollisionResponse::Overlap; MAX_CHANNELS],
        }
    }

    /// Table that ignores every channel
    pub fn ignoring() -> Self {
        Self {
            responses: [CollisionResponse::Ignore; MAX_CHANNELS],
        }
    }

    /// Response for the given channel
    pub fn response_to(&self, channel: CollisionChannel) -> CollisionResponse {
        self.responses[channel.index()]
    }

    /// Set the response for the given channel
    pub fn set_response(&mut self, channel: CollisionChannel, response: CollisionResponse) {
        self.responses[channel.index()] = response;
    }

    /// Builder-style variant of [`Self::set_response`]
    pub fn with_response(
        mut self,
        channel: CollisionChannel,
        response: CollisionResponse,
    ) -> Self {
        self.set_response(channel, response);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignore_beats_block() {
        assert_eq!(
            resolve_pair(CollisionResponse::Ignore, CollisionResponse::Block),
            PairInteraction::Ignore
        );
        assert_eq!(
            resolve_pair(CollisionResponse::Block, CollisionResponse::Ignore),
            PairInteraction::Ignore
        );
    }

    #[test]
    fn test_block_beats_overlap() {
        assert_eq!(
            resolve_pair(CollisionResponse::Block, CollisionResponse::Overlap),
            PairInteraction::Block
        );
        assert_eq!(
            resolve_pair(CollisionResponse::Overlap, CollisionResponse::Block),
            PairInteraction::Block
        );
    }

    #[test]
    fn test_mutual_overlap() {
        assert_eq!(
            resolve_pair(CollisionResponse::Overlap, CollisionResponse::Overlap),
            PairInteraction::Overlap
        );
    }

    #[test]
    fn test_table_defaults_to_blocking() {
        let table = ResponseTable::default();
        assert_eq!(
            table.response_to(CollisionChannel::PAWN),
            CollisionResponse::Block
        );
    }

    #[test]
    fn test_table_set_and_get() {
        let table = ResponseTable::blocking()
            .with_response(CollisionChannel::TRIGGER, CollisionResponse::Overlap)
            .with_response(CollisionChannel::CAMERA, CollisionResponse::Ignore);

        assert_eq!(
            table.response_to(CollisionChannel::TRIGGER),
            CollisionResponse::Overlap
        );
        assert_eq!(
            table.response_to(CollisionChannel::CAMERA),
            CollisionResponse::Ignore
        );
        assert_eq!(
            table.response_to(CollisionChannel::PAWN),
            CollisionResponse::Block
        );
    }
}
