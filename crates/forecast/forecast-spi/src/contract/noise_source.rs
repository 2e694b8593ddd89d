//! Trait for injected forecast randomness

/// Source of multiplicative noise for forecast points.
///
/// Forecasts only become non-deterministic through an implementation of
/// this trait, so tests can pin the output by choosing a seed.
pub trait NoiseSource {
    /// Next sample, in `[-1.0, 1.0]`.
    fn sample(&mut self) -> f64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}
