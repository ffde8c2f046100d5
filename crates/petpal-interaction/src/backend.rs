//! Simulated backend: the response simulator behind an artificial delay.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use petpal_core::config::SimulatorSettings;
use petpal_core::error::{PetPalError, Result};
use petpal_core::pet::Pet;
use petpal_core::random::{RandomSource, StdRandom};

use crate::simulator::ResponseSimulator;
use crate::{PetReply, PetResponder};

/// Stands in for a remote model: waits `latency`, then composes a reply
/// with [`ResponseSimulator`].
///
/// The random source sits behind a mutex so the backend can be shared as
/// `Arc<dyn PetResponder>`. Concurrent sends interleave their draws.
pub struct SimulatedBackend {
    simulator: ResponseSimulator,
    latency: Duration,
    rng: Mutex<Box<dyn RandomSource>>,
}

impl SimulatedBackend {
    pub fn new(
        simulator: ResponseSimulator,
        latency: Duration,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            simulator,
            latency,
            rng: Mutex::new(rng),
        }
    }

    /// Builds a backend from configuration, seeding the random source from
    /// `settings.seed` when present.
    pub fn from_settings(settings: &SimulatorSettings) -> Self {
        let rng: Box<dyn RandomSource> = match settings.seed {
            Some(seed) => Box::new(StdRandom::seeded(seed)),
            None => Box::new(StdRandom::from_entropy()),
        };
        Self::new(
            ResponseSimulator::new(settings.sticker_base_url.clone()),
            settings.latency(),
            rng,
        )
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl PetResponder for SimulatedBackend {
    async fn respond(&self, pet: &Pet, message: &str) -> Result<PetReply> {
        tracing::debug!(
            pet_id = %pet.id,
            kind = %pet.kind,
            breed = pet.breed.as_deref().unwrap_or("-"),
            latency_ms = self.latency.as_millis() as u64,
            "Simulating backend call"
        );

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|_| PetPalError::responder("random source lock poisoned"))?;
        Ok(self.simulator.compose(pet, message, rng.as_mut()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReplyOrigin;
    use petpal_core::pet::PetKind;
    use petpal_core::random::ScriptedRandom;

    fn buddy() -> Pet {
        Pet {
            id: "buddy_dog".to_string(),
            name: "Buddy".to_string(),
            kind: PetKind::Dog,
            breed: None,
            traits: Vec::new(),
            avatar: "🐕".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_latency() {
        let backend = SimulatedBackend::new(
            ResponseSimulator::default(),
            Duration::from_millis(800),
            Box::new(ScriptedRandom::default()),
        );

        let started = tokio::time::Instant::now();
        let reply = backend.respond(&buddy(), "walk?").await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(800));
        assert_eq!(reply.origin, ReplyOrigin::Keyword);
    }

    #[tokio::test]
    async fn test_from_settings_uses_seed() {
        let settings = SimulatorSettings {
            latency_ms: 0,
            seed: Some(3),
            ..SimulatorSettings::default()
        };
        let a = SimulatedBackend::from_settings(&settings);
        let b = SimulatedBackend::from_settings(&settings);
        assert_eq!(a.latency(), Duration::ZERO);

        for _ in 0..5 {
            let left = a.respond(&buddy(), "hello").await.unwrap();
            let right = b.respond(&buddy(), "hello").await.unwrap();
            assert_eq!(left, right);
        }
    }
}
