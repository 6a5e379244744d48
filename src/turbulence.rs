use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};

/// `amplitude * sin((x + phase) * frequency)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sinusoid {
    pub amplitude: f32,
    pub phase: f32,
    pub frequency: f32,
}

impl Sinusoid {
    pub const fn new(amplitude: f32, phase: f32, frequency: f32) -> Self {
        Self {
            amplitude,
            phase,
            frequency,
        }
    }

    pub fn solve(&self, x: f32) -> f32 {
        self.amplitude * ((x + self.phase) * self.frequency).sin()
    }
}

/// Closed interval a sinusoid parameter is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: f32,
    pub max: f32,
}

impl SampleRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    fn validate(&self, name: &'static str) -> Result<()> {
        // The span must be finite too or uniform sampling cannot be set up.
        if self.min <= self.max && (self.max - self.min).is_finite() {
            Ok(())
        } else {
            Err(ViewerError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> f32 {
        rng.random_range(self.min..=self.max)
    }
}

/// Procedural scalar noise: a fixed sum of randomly parameterised sinusoids.
///
/// The sinusoids are drawn once at construction and never change, so
/// [`Turbulence::solve`] is a pure function that is safe to share across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Turbulence {
    sinusoids: Vec<Sinusoid>,
}

impl Turbulence {
    /// Draw `count` sinusoids from `rng`, each parameter uniformly from its range.
    pub fn new<R: Rng>(
        count: usize,
        amplitude: SampleRange,
        phase: SampleRange,
        frequency: SampleRange,
        rng: &mut R,
    ) -> Result<Self> {
        amplitude.validate("amplitude")?;
        phase.validate("phase")?;
        frequency.validate("frequency")?;

        let sinusoids = (0..count)
            .map(|_| Sinusoid {
                amplitude: amplitude.sample(rng),
                phase: phase.sample(rng),
                frequency: frequency.sample(rng),
            })
            .collect();

        Ok(Self { sinusoids })
    }

    /// Reproducible across runs for the same seed.
    pub fn seeded(
        count: usize,
        amplitude: SampleRange,
        phase: SampleRange,
        frequency: SampleRange,
        seed: u64,
    ) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(count, amplitude, phase, frequency, &mut rng)
    }

    pub fn from_entropy(
        count: usize,
        amplitude: SampleRange,
        phase: SampleRange,
        frequency: SampleRange,
    ) -> Result<Self> {
        let mut rng = rand::rng();
        Self::new(count, amplitude, phase, frequency, &mut rng)
    }

    pub fn from_sinusoids(sinusoids: Vec<Sinusoid>) -> Self {
        Self { sinusoids }
    }

    pub fn sinusoids(&self) -> &[Sinusoid] {
        &self.sinusoids
    }

    pub fn solve(&self, x: f32) -> f32 {
        self.sinusoids.iter().map(|s| s.solve(x)).sum()
    }
}
