//! Explicit primary/secondary source composition.

use data_spi::{CostPoint, DataSource, Result, SeriesQuery};

/// Tries `primary` first and serves from `secondary` when it fails.
///
/// The fallback is logged at warn level so a degraded answer never goes
/// unnoticed. If both fail, the secondary's error is returned.
pub struct FallbackSource<P, S> {
    primary: P,
    secondary: S,
    name: String,
}

impl<P: DataSource, S: DataSource> FallbackSource<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        let name = format!("{}|{}", primary.name(), secondary.name());
        Self {
            primary,
            secondary,
            name,
        }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn secondary(&self) -> &S {
        &self.secondary
    }
}

impl<P: DataSource, S: DataSource> DataSource for FallbackSource<P, S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self, query: &SeriesQuery) -> Result<Vec<CostPoint>> {
        match self.primary.fetch(query) {
            Ok(points) => Ok(points),
            Err(err) => {
                tracing::warn!(
                    primary = self.primary.name(),
                    secondary = self.secondary.name(),
                    error = %err,
                    "primary cost source failed, using fallback"
                );
                self.secondary.fetch(query)
            }
        }
    }
}
