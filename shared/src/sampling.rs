//! Synthetic AQI readings
//!
//! Readings stand in for sensor telemetry. The random source is always
//! passed in, so a seeded generator reproduces the same sequence.

#[cfg(feature = "synthetic")]
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::types::Aqi;

/// Lowest synthetic reading (inclusive)
pub const SYNTHETIC_MIN: Aqi = 30;

/// Highest synthetic reading (inclusive)
pub const SYNTHETIC_MAX: Aqi = 300;

/// Draw one reading uniformly from `SYNTHETIC_MIN..=SYNTHETIC_MAX`.
#[cfg(feature = "synthetic")]
pub fn sample_reading<R: Rng + ?Sized>(rng: &mut R) -> Aqi {
    rng.gen_range(SYNTHETIC_MIN..=SYNTHETIC_MAX)
}

/// Anything that can produce a stream of AQI readings
pub trait ReadingSource {
    fn next_reading(&mut self) -> Aqi;

    fn take_readings(&mut self, count: usize) -> Vec<Aqi> {
        (0..count).map(|_| self.next_reading()).collect()
    }
}

impl<T: ReadingSource + ?Sized> ReadingSource for &mut T {
    fn next_reading(&mut self) -> Aqi {
        (**self).next_reading()
    }
}

/// Independent uniform readings from an injected RNG
#[cfg(feature = "synthetic")]
#[derive(Debug, Clone)]
pub struct SyntheticReadings<R = StdRng> {
    rng: R,
}

#[cfg(feature = "synthetic")]
impl<R: Rng> SyntheticReadings<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

#[cfg(feature = "synthetic")]
impl SyntheticReadings<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic sequence for tests and reproducible demos
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

#[cfg(feature = "synthetic")]
impl<R: Rng> ReadingSource for SyntheticReadings<R> {
    fn next_reading(&mut self) -> Aqi {
        sample_reading(&mut self.rng)
    }
}

/// Replays a recorded sequence of readings, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ReplayReadings {
    readings: Vec<Aqi>,
    cursor: usize,
}

impl ReplayReadings {
    /// Returns `None` for an empty sequence.
    pub fn new(readings: Vec<Aqi>) -> Option<Self> {
        if readings.is_empty() {
            return None;
        }
        Some(Self {
            readings,
            cursor: 0,
        })
    }
}

impl ReadingSource for ReplayReadings {
    fn next_reading(&mut self) -> Aqi {
        let reading = self.readings[self.cursor];
        self.cursor = (self.cursor + 1) % self.readings.len();
        reading
    }
}
