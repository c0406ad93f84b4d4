pub mod google_maps;

use async_trait::async_trait;

use crate::error::Error;

#[async_trait]
pub trait DistanceProvider: Send + Sync {
    /// Driving distance in kilometres between two free-text locations.
    async fn distance_km(&self, origin: &str, destination: &str) -> Result<f64, Error>;
}
