//! RNG module - piece generation policies
//!
//! The default policy draws every kind uniformly at random. A 7-bag policy
//! (each kind exactly once per shuffled bag) and a scripted sequence are
//! available for fairer play and for deterministic tests.
//!
//! All randomness comes from a simple LCG so that a seed reproduces a game.

use crate::pieces::Piece;
use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// A stream of piece kinds
pub trait PieceSource: std::fmt::Debug + Send {
    /// Draw the next kind
    fn next_kind(&mut self) -> PieceKind;
}

/// Every kind with equal probability on every draw
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: SimpleRng,
}

impl UniformSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl PieceSource for UniformSource {
    fn next_kind(&mut self) -> PieceKind {
        let i = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[i]
    }
}

/// 7-bag generator: each kind once per shuffled bag
#[derive(Debug, Clone)]
pub struct BagSource {
    bag: [PieceKind; 7],
    bag_index: usize,
    rng: SimpleRng,
}

impl BagSource {
    pub fn new(seed: u32) -> Self {
        Self {
            bag: PieceKind::ALL,
            // Force a refill on the first draw
            bag_index: PieceKind::ALL.len(),
            rng: SimpleRng::new(seed),
        }
    }

    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }
}

impl PieceSource for BagSource {
    fn next_kind(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }
}

/// Fixed, cyclic script of kinds
#[derive(Debug, Clone)]
pub struct SequenceSource {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl SequenceSource {
    /// Cycle through `kinds` forever. An empty script yields `I` pieces.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let mut kinds = kinds.into();
        if kinds.is_empty() {
            kinds.push(PieceKind::I);
        }
        Self { kinds, index: 0 }
    }
}

impl PieceSource for SequenceSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index = self.index.wrapping_add(1);
        kind
    }
}

/// Configurable generation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Randomizer {
    #[default]
    Uniform,
    Bag,
}

impl Randomizer {
    /// Parse from string (case-insensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "uniform" | "random" => Some(Randomizer::Uniform),
            "bag" | "bag7" | "7bag" => Some(Randomizer::Bag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::Bag => "bag",
        }
    }

    /// Build the source for this policy
    pub fn source(&self, seed: u32) -> Box<dyn PieceSource> {
        match self {
            Randomizer::Uniform => Box::new(UniformSource::new(seed)),
            Randomizer::Bag => Box::new(BagSource::new(seed)),
        }
    }
}

/// Produces fresh pieces from a [`PieceSource`]
#[derive(Debug)]
pub struct PieceGenerator {
    source: Box<dyn PieceSource>,
}

impl PieceGenerator {
    pub fn new(source: Box<dyn PieceSource>) -> Self {
        Self { source }
    }

    /// Generator using the given policy and seed
    pub fn with_randomizer(randomizer: Randomizer, seed: u32) -> Self {
        Self::new(randomizer.source(seed))
    }

    /// A new piece with its own copy of the drawn kind's canonical matrix
    pub fn generate(&mut self) -> Piece {
        Piece::new(self.source.next_kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::canonical_shape;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0).state(), 1);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_uniform_source_draws_every_kind() {
        let mut source = UniformSource::new(42);
        let mut counts = [0u32; 7];
        for _ in 0..7000 {
            let kind = source.next_kind();
            let i = PieceKind::ALL.iter().position(|k| *k == kind).unwrap();
            counts[i] += 1;
        }
        // Roughly uniform: every kind within a generous band around 1000.
        for (i, count) in counts.iter().enumerate() {
            assert!(*count > 800 && *count < 1200, "{:?}: {}", PieceKind::ALL[i], count);
        }
    }

    #[test]
    fn test_bag_source_draws_all_seven_per_bag() {
        let mut source = BagSource::new(1);
        for _ in 0..3 {
            let mut drawn: Vec<PieceKind> = (0..7).map(|_| source.next_kind()).collect();
            drawn.sort_by_key(|k| k.as_str());
            let mut all = PieceKind::ALL.to_vec();
            all.sort_by_key(|k| k.as_str());
            assert_eq!(drawn, all);
        }
    }

    #[test]
    fn test_sequence_source_cycles() {
        let mut source = SequenceSource::new(vec![PieceKind::O, PieceKind::T]);
        assert_eq!(source.next_kind(), PieceKind::O);
        assert_eq!(source.next_kind(), PieceKind::T);
        assert_eq!(source.next_kind(), PieceKind::O);
    }

    #[test]
    fn test_empty_sequence_falls_back_to_i() {
        let mut source = SequenceSource::new(Vec::new());
        assert_eq!(source.next_kind(), PieceKind::I);
    }

    #[test]
    fn test_generated_pieces_are_independent_copies() {
        let mut generator = PieceGenerator::new(Box::new(SequenceSource::new(vec![PieceKind::L])));
        let mut a = generator.generate();
        let b = generator.generate();

        a.set_shape(a.rotated_left());
        assert_eq!(b.shape(), canonical_shape(PieceKind::L));
        assert_ne!(a.shape(), b.shape());
    }

    #[test]
    fn test_randomizer_parsing() {
        assert_eq!(Randomizer::from_str("bag7"), Some(Randomizer::Bag));
        assert_eq!(Randomizer::from_str("Uniform"), Some(Randomizer::Uniform));
        assert_eq!(Randomizer::from_str("nes"), None);
        assert_eq!(Randomizer::default(), Randomizer::Uniform);
    }
}
