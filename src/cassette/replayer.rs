//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Replays a cassette with an independent queue per `port::method` pair,
/// so interleaving between ports does not need to match the recording.
#[derive(Debug)]
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Indexes the cassette's interactions by port and method.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Interactions not yet served, across all ports.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    /// Takes the next interaction recorded for `port::method`.
    ///
    /// # Panics
    ///
    /// Panics when the cassette has nothing (left) for that pair. A replay
    /// that asks for more than was recorded is a broken test, and the
    /// message lists what the cassette does contain.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = (port.to_string(), method.to_string());
        let Some(queue) = self.queues.get_mut(&key) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for {port}::{method}. \
                 Available: [{}]",
                available.join(", ")
            );
        };
        queue.pop_front().unwrap_or_else(|| {
            panic!("Cassette exhausted: every {port}::{method} interaction has been consumed")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn interaction(seq: u64, port: &str, method: &str, output: serde_json::Value) -> Interaction {
        Interaction {
            seq,
            port: port.into(),
            method: method.into(),
            input: json!(null),
            output,
        }
    }

    fn cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette {
            name: "test".into(),
            recorded_at: "2025-01-01T00:00:00Z".parse().unwrap(),
            version: "0.1.0".into(),
            interactions,
        }
    }

    #[test]
    fn serves_each_pair_in_recorded_order() {
        let mut replayer = CassetteReplayer::new(&cassette(vec![
            interaction(0, "id_gen", "next_id", json!("a")),
            interaction(1, "clock", "now", json!("2025-01-01T00:00:00Z")),
            interaction(2, "id_gen", "next_id", json!("b")),
        ]));
        assert_eq!(replayer.remaining(), 3);

        // Asking for the clock first does not disturb the id queue.
        assert_eq!(replayer.next_interaction("clock", "now").seq, 1);
        assert_eq!(replayer.next_interaction("id_gen", "next_id").output, json!("a"));
        assert_eq!(replayer.next_interaction("id_gen", "next_id").output, json!("b"));
        assert_eq!(replayer.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "every id_gen::next_id interaction has been consumed")]
    fn exhausted_pair_panics() {
        let mut replayer =
            CassetteReplayer::new(&cassette(vec![interaction(0, "id_gen", "next_id", json!("a"))]));
        let _ = replayer.next_interaction("id_gen", "next_id");
        let _ = replayer.next_interaction("id_gen", "next_id");
    }

    #[test]
    #[should_panic(expected = "Available: [clock::now]")]
    fn unknown_pair_lists_what_exists() {
        let mut replayer = CassetteReplayer::new(&cassette(vec![interaction(
            0,
            "clock",
            "now",
            json!("2025-01-01T00:00:00Z"),
        )]));
        let _ = replayer.next_interaction("storage", "get");
    }
}
