//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Key for indexing interactions by port and method.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

/// Replays interactions from a loaded cassette, serving them sequentially
/// per port/method pair.
pub struct CassetteReplayer {
    /// Per port+method queue of interactions not yet served.
    queues: HashMap<PortMethodKey, VecDeque<Interaction>>,
    /// Seq of the last interaction served per port+method.
    last_served: HashMap<PortMethodKey, u64>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethodKey, VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = PortMethodKey {
                port: interaction.port.clone(),
                method: interaction.method.clone(),
            };
            queues.entry(key).or_default().push_back(interaction.clone());
        }
        Self { queues, last_served: HashMap::new() }
    }

    /// Take the next interaction for the given port and method.
    ///
    /// # Errors
    ///
    /// Returns a message naming what was requested when the cassette has
    /// no (more) interactions for the port/method pair. For unknown pairs
    /// the message lists the pairs the cassette does contain.
    pub fn try_next_interaction(&mut self, port: &str, method: &str) -> Result<Interaction, String> {
        let key = PortMethodKey { port: port.to_string(), method: method.to_string() };

        if !self.queues.contains_key(&key) {
            let mut available: Vec<String> =
                self.queues.keys().map(|k| format!("{}::{}", k.port, k.method)).collect();
            available.sort();
            return Err(format!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            ));
        }

        let Some(interaction) = self.queues.get_mut(&key).and_then(VecDeque::pop_front) else {
            return Err(format!(
                "Cassette exhausted: all interactions for port={port:?} method={method:?} \
                 have been consumed. Last interaction was seq={last_seq}.",
                last_seq = self.last_served.get(&key).copied().unwrap_or_default(),
            ));
        };

        tracing::trace!(port, method, seq = interaction.seq, "replaying interaction");
        self.last_served.insert(key, interaction.seq);
        Ok(interaction)
    }

    /// Take the next interaction for the given port and method.
    ///
    /// # Panics
    ///
    /// Panics with the [`CassetteReplayer::try_next_interaction`] message
    /// if the cassette has no (more) interactions for the pair.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        self.try_next_interaction(port, method).unwrap_or_else(|msg| panic!("{msg}"))
    }
}
