use noise::{NoiseFn, OpenSimplex};

/// Deterministic 2-D scalar field driving the idle wave motion.
///
/// Implementations must return the same value for the same coordinates;
/// the integrator relies on that to keep the wave offset stateless.
pub trait NoiseSource {
    fn sample(&self, x: f64, y: f64) -> f64;
}

impl<F> NoiseSource for F
where
    F: Fn(f64, f64) -> f64,
{
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// OpenSimplex noise, roughly in \[-1, 1\].
#[derive(Clone)]
pub struct SimplexNoise {
    seed: u32,
    inner: OpenSimplex,
}

impl SimplexNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            inner: OpenSimplex::new(seed),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl NoiseSource for SimplexNoise {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.inner.get([x, y])
    }
}
