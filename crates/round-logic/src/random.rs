//! Opponent move sources
//!
//! Live play draws a fresh move from OS-seeded entropy on every round.
//! `SeededRng` is a deterministic xorshift generator for replays and tests:
//! same seed = same sequence of opponent moves.

use rand::Rng;

use crate::moves::{Move, MOVES};

/// Anything that can pick the opponent's move for a round
pub trait OpponentSource {
    fn draw(&mut self) -> Move;
}

/// Uniform draw from `rand::thread_rng()`, independent across calls
#[derive(Clone, Copy, Debug, Default)]
pub struct EntropySource;

impl OpponentSource for EntropySource {
    fn draw(&mut self) -> Move {
        MOVES[rand::thread_rng().gen_range(0..MOVES.len())]
    }
}

/// Seeded random number generator
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        // xorshift has a fixed point at zero
        let state = (seed ^ 0x9e3779b97f4a7c15).max(1);

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Generate next u32
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }
}

impl OpponentSource for SeededRng {
    fn draw(&mut self) -> Move {
        MOVES[self.next_range(MOVES.len() as u32) as usize]
    }
}

/// Plays back a fixed list of moves, cycling when it runs out
#[cfg(test)]
#[derive(Clone, Debug)]
pub(crate) struct ScriptedSource {
    moves: Vec<Move>,
    next: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(moves: &[Move]) -> Self {
        assert!(!moves.is_empty());
        Self { moves: moves.to_vec(), next: 0 }
    }
}

#[cfg(test)]
impl OpponentSource for ScriptedSource {
    fn draw(&mut self) -> Move {
        let m = self.moves[self.next % self.moves.len()];
        self.next += 1;
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram<S: OpponentSource>(source: &mut S, samples: usize) -> [usize; 3] {
        let mut counts = [0usize; 3];
        for _ in 0..samples {
            counts[source.draw().index()] += 1;
        }
        counts
    }

    #[test]
    fn test_determinism() {
        let mut r1 = SeededRng::new(42);
        let mut r2 = SeededRng::new(42);

        for _ in 0..100 {
            assert_eq!(r1.next_u64(), r2.next_u64());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = SeededRng::new(1);
        let mut rng2 = SeededRng::new(2);

        let vals1: Vec<_> = (0..10).map(|_| rng1.next_u64()).collect();
        let vals2: Vec<_> = (0..10).map(|_| rng2.next_u64()).collect();

        assert_ne!(vals1, vals2);
    }

    #[test]
    fn test_zero_seed_not_stuck() {
        let mut rng = SeededRng::new(0x9e3779b97f4a7c15);
        let vals: Vec<_> = (0..10).map(|_| rng.next_u64()).collect();
        assert!(vals.iter().any(|v| *v != 0));
    }

    #[test]
    fn test_next_range() {
        let mut rng = SeededRng::new(42);

        for max in [1, 3, 10, 1000].iter() {
            for _ in 0..100 {
                let val = rng.next_range(*max);
                assert!(val < *max, "next_range({}) returned {}", max, val);
            }
        }

        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_seeded_draw_uniform() {
        let samples = 30_000;
        let counts = histogram(&mut SeededRng::new(7), samples);
        for (i, c) in counts.iter().enumerate() {
            let share = *c as f64 / samples as f64;
            assert!((share - 1.0 / 3.0).abs() < 0.02, "move {} drawn {:.3} of the time", i, share);
        }
    }

    #[test]
    fn test_entropy_draw_uniform() {
        let samples = 30_000;
        let counts = histogram(&mut EntropySource, samples);
        for (i, c) in counts.iter().enumerate() {
            let share = *c as f64 / samples as f64;
            assert!((share - 1.0 / 3.0).abs() < 0.03, "move {} drawn {:.3} of the time", i, share);
        }
    }

    #[test]
    fn test_scripted_cycles() {
        let mut s = ScriptedSource::new(&[Move::Rock, Move::Paper]);
        assert_eq!(s.draw(), Move::Rock);
        assert_eq!(s.draw(), Move::Paper);
        assert_eq!(s.draw(), Move::Rock);
    }
}
