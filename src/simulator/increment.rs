use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies the progress gained on each tick
pub trait IncrementSource: Send {
    fn next_increment(&mut self) -> f64;
}

/// Uniform random increments in `[min, max)`
pub struct RandomIncrement {
    rng: StdRng,
    min: f64,
    max: f64,
}

impl RandomIncrement {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            min,
            max,
        }
    }

    pub fn seeded(seed: u64, min: f64, max: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            min,
            max,
        }
    }
}

impl IncrementSource for RandomIncrement {
    fn next_increment(&mut self) -> f64 {
        self.rng.gen_range(self.min..self.max)
    }
}

/// Same increment every tick; makes runs reproducible
pub struct FixedIncrement(pub f64);

impl IncrementSource for FixedIncrement {
    fn next_increment(&mut self) -> f64 {
        self.0
    }
}

/// Configured choice of increment source, cloned into every new run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IncrementStrategy {
    Random { min: f64, max: f64 },
    Fixed(f64),
}

impl IncrementStrategy {
    pub fn source(&self) -> Box<dyn IncrementSource> {
        match *self {
            IncrementStrategy::Random { min, max } => Box::new(RandomIncrement::new(min, max)),
            IncrementStrategy::Fixed(step) => Box::new(FixedIncrement(step)),
        }
    }
}

impl Default for IncrementStrategy {
    fn default() -> Self {
        IncrementStrategy::Random {
            min: 5.0,
            max: 20.0,
        }
    }
}
