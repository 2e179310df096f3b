use crate::entities::{AquaticAnimal, Visitor};

/// In-process mirror of the records created during this session.
///
/// The database stays the source of truth for listing, updating, and
/// deleting. The mirror only ever grows: repository updates and deletes are
/// not reflected back here, and nothing is reloaded from the store at
/// startup. Its one job is the session-scoped average-size statistic.
///
/// Owned by whoever runs the command loop; created at startup, dropped at
/// exit.
#[derive(Debug, Default)]
pub struct SessionMirror {
    animals: Vec<AquaticAnimal>,
    visitors: Vec<Visitor>,
}

impl SessionMirror {
    pub fn new() -> Self {
        SessionMirror::default()
    }

    /// Record a successfully inserted animal. Append-only.
    pub fn record_animal(&mut self, animal: AquaticAnimal) {
        self.animals.push(animal);
    }

    /// Record a successfully inserted visitor. Append-only, never read back
    /// by any command.
    pub fn record_visitor(&mut self, visitor: Visitor) {
        self.visitors.push(visitor);
    }

    pub fn animal_count(&self) -> usize {
        self.animals.len()
    }

    pub fn visitor_count(&self) -> usize {
        self.visitors.len()
    }

    /// Arithmetic mean of the sizes recorded this session, or `None` when no
    /// animal has been created yet.
    pub fn average_size(&self) -> Option<f64> {
        if self.animals.is_empty() {
            return None;
        }

        let total: f64 = self.animals.iter().map(|a| a.size_cm).sum();
        Some(total / self.animals.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_size_empty_session() {
        let mirror = SessionMirror::new();
        assert_eq!(mirror.average_size(), None);
    }

    #[test]
    fn test_average_size_of_three() {
        let mut mirror = SessionMirror::new();
        for (name, size) in [("a", 10.0), ("b", 20.0), ("c", 30.0)] {
            mirror.record_animal(AquaticAnimal::new(name, "tank", size, 1, "Z"));
        }

        assert_eq!(mirror.average_size(), Some(20.0));
    }

    #[test]
    fn test_mirror_is_append_only() {
        let mut mirror = SessionMirror::new();
        mirror.record_animal(AquaticAnimal::new("Seal", "Coast", 160.0, 4, "E5"));
        mirror.record_animal(AquaticAnimal::new("Otter", "River", 120.0, 2, "E5"));

        assert_eq!(mirror.animal_count(), 2);
        assert_eq!(mirror.average_size(), Some(140.0));
    }
}
