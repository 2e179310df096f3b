// Command layer: menu option codes and the handlers that write to both
// data sinks (database row + session mirror).
//
// Handlers take already-validated parameters; prompting and printing live in
// the console module. Each handler performs exactly one logical operation
// and runs to completion before the loop reads the next command.

use anyhow::Result;
use rusqlite::Connection;

use crate::animals::insert_animal;
use crate::entities::{parse_visit_date, AquaticAnimal, Visitor};
use crate::mirror::SessionMirror;
use crate::visitors::insert_visitor;

/// One variant per numbered menu option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddAnimal,
    ViewAnimals,
    UpdateAnimal,
    DeleteAnimal,
    AddVisitor,
    ViewVisitors,
    AverageSize,
    Exit,
}

impl Command {
    /// Map a menu choice to a command. Anything outside 1..=8 is `None`;
    /// the caller reports it and keeps the loop going.
    pub fn from_choice(choice: i64) -> Option<Command> {
        match choice {
            1 => Some(Command::AddAnimal),
            2 => Some(Command::ViewAnimals),
            3 => Some(Command::UpdateAnimal),
            4 => Some(Command::DeleteAnimal),
            5 => Some(Command::AddVisitor),
            6 => Some(Command::ViewVisitors),
            7 => Some(Command::AverageSize),
            8 => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Create an animal: normalize the name, insert the row, stamp the generated
/// id onto the record, then append it to the session mirror.
///
/// The mirror is only touched after the insert succeeds, so a store failure
/// leaves both sinks unchanged.
pub fn add_animal(
    conn: &Connection,
    mirror: &mut SessionMirror,
    name: &str,
    habitat: &str,
    size_cm: f64,
    age: u32,
    zone: &str,
) -> Result<AquaticAnimal> {
    let mut animal = AquaticAnimal::new(name, habitat, size_cm, age, zone);
    let id = insert_animal(conn, &animal)?;
    animal.id = Some(id);

    mirror.record_animal(animal.clone());

    Ok(animal)
}

/// Create a visitor. The date is parsed before anything else happens: an
/// invalid date fails the whole operation with no row written and nothing
/// mirrored.
pub fn add_visitor(
    conn: &Connection,
    mirror: &mut SessionMirror,
    name: &str,
    contact: &str,
    ticket_count: u32,
    date_input: &str,
) -> Result<Visitor> {
    let visit_date = parse_visit_date(date_input)?;

    let mut visitor = Visitor::new(name, contact, ticket_count, visit_date);
    let id = insert_visitor(conn, &visitor)?;
    visitor.id = Some(id);

    mirror.record_visitor(visitor.clone());

    Ok(visitor)
}
