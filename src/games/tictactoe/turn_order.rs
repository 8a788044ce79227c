//! Starting-turn order and the coin that decides it.
//!
//! The engine never flips a coin itself. Callers hand it a [`TurnOrder`],
//! usually built from a [`Coin`] they own, so a seeded or fixed coin makes a
//! match fully reproducible.

use super::PlayerId;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Face a coin landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinFace {
    /// Player 1 moves first.
    Heads,
    /// Player 2 moves first.
    Tails,
}

impl std::fmt::Display for CoinFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoinFace::Heads => write!(f, "heads"),
            CoinFace::Tails => write!(f, "tails"),
        }
    }
}

/// A source of coin tosses.
pub trait Coin {
    /// Flips the coin once.
    fn flip(&mut self) -> CoinFace;
}

/// Coin backed by a seeded ChaCha8 generator.
///
/// The same seed always produces the same sequence of faces.
#[derive(Debug, Clone)]
pub struct SeededCoin {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededCoin {
    /// Creates a coin from an explicit seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a coin with a seed drawn from the thread-local generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().r#gen::<u64>();
        debug!(seed, "Drew coin seed from entropy");
        Self::new(seed)
    }

    /// The seed this coin was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Coin for SeededCoin {
    fn flip(&mut self) -> CoinFace {
        if self.rng.gen_bool(0.5) {
            CoinFace::Heads
        } else {
            CoinFace::Tails
        }
    }
}

/// Coin that always lands on the same face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCoin(pub CoinFace);

impl Coin for FixedCoin {
    fn flip(&mut self) -> CoinFace {
        self.0
    }
}

/// Order in which the two players alternate, fixed for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnOrder {
    order: [PlayerId; 2],
}

impl TurnOrder {
    /// Builds the order from a single "does Player 1 go first?" flag.
    pub fn from_first(player_one_first: bool) -> Self {
        let first = if player_one_first {
            PlayerId::Player1
        } else {
            PlayerId::Player2
        };
        Self {
            order: [first, first.opponent()],
        }
    }

    /// Heads means Player 1 goes first, tails means Player 2 goes first.
    pub fn from_face(face: CoinFace) -> Self {
        Self::from_first(face == CoinFace::Heads)
    }

    /// Flips `coin` once and builds the order from the result.
    #[instrument(skip(coin))]
    pub fn from_coin<C: Coin + ?Sized>(coin: &mut C) -> Self {
        let face = coin.flip();
        debug!(%face, "Coin toss decided turn order");
        Self::from_face(face)
    }

    /// Player who moves first.
    pub fn first(&self) -> PlayerId {
        self.order[0]
    }

    /// Player who moves second.
    pub fn second(&self) -> PlayerId {
        self.order[1]
    }

    /// Player at turn slot `slot`; slots alternate 0, 1, 0, 1, ...
    pub fn player_at(&self, slot: usize) -> PlayerId {
        self.order[slot % 2]
    }
}

impl Default for TurnOrder {
    fn default() -> Self {
        Self::from_first(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heads_player_one_first() {
        let order = TurnOrder::from_coin(&mut FixedCoin(CoinFace::Heads));
        assert_eq!(order.first(), PlayerId::Player1);
        assert_eq!(order.second(), PlayerId::Player2);
    }

    #[test]
    fn test_tails_player_two_first() {
        let order = TurnOrder::from_coin(&mut FixedCoin(CoinFace::Tails));
        assert_eq!(order.first(), PlayerId::Player2);
        assert_eq!(order.player_at(1), PlayerId::Player1);
        assert_eq!(order.player_at(2), PlayerId::Player2);
    }

    #[test]
    fn test_seeded_coin_is_reproducible() {
        let mut a = SeededCoin::new(42);
        let mut b = SeededCoin::new(42);
        let faces_a: Vec<_> = (0..32).map(|_| a.flip()).collect();
        let faces_b: Vec<_> = (0..32).map(|_| b.flip()).collect();
        assert_eq!(faces_a, faces_b);
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_seeded_coin_lands_both_ways() {
        let mut coin = SeededCoin::new(7);
        let faces: Vec<_> = (0..64).map(|_| coin.flip()).collect();
        assert!(faces.contains(&CoinFace::Heads));
        assert!(faces.contains(&CoinFace::Tails));
    }

    #[test]
    fn test_coin_usable_as_trait_object() {
        let mut coin: Box<dyn Coin> = Box::new(FixedCoin(CoinFace::Tails));
        assert_eq!(TurnOrder::from_coin(coin.as_mut()).first(), PlayerId::Player2);
    }
}
