use serde::{Deserialize, Serialize};

/// An animal kept in the aquarium.
///
/// The name is normalized exactly once, at construction, before the record
/// is persisted or mirrored anywhere. Only `size_cm` and `age` are mutable
/// after creation, and only through the repository by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AquaticAnimal {
    /// Assigned by the database on insert; `None` before that.
    pub id: Option<i64>,
    pub name: String,
    pub habitat: String,
    pub size_cm: f64,
    pub age: u32,
    pub zone: String,
}

impl AquaticAnimal {
    pub fn new(name: &str, habitat: &str, size_cm: f64, age: u32, zone: &str) -> Self {
        AquaticAnimal {
            id: None,
            name: title_case(name),
            habitat: habitat.to_string(),
            size_cm,
            age,
            zone: zone.to_string(),
        }
    }
}

/// First character upper-cased, remainder lower-cased.
pub fn title_case(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
