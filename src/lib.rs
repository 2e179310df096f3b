// Aquarium Management System - Core Library
// Exposes entities, repositories, and the command layer for the CLI and tests

pub mod animals;
pub mod commands;
pub mod console;
pub mod db;
pub mod entities;
pub mod mirror;
pub mod visitors;

// Re-export commonly used types
pub use animals::{
    animal_count, delete_animal, get_all_animals, insert_animal, update_animal,
};
pub use commands::{add_animal, add_visitor, Command};
pub use db::{open_database, setup_database, DB_PATH};
pub use entities::{parse_visit_date, title_case, AquaticAnimal, Visitor};
pub use mirror::SessionMirror;
pub use visitors::{get_all_visitors, insert_visitor, visitor_count};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
