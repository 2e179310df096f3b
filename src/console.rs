// Console glue: menu text, typed prompts, and the interactive loop.
//
// Everything here reads stdin and writes stdout. The loop is strictly
// sequential: one command runs to completion before the next line is read.
// Errors inside a command (store failure, unparsable input) are printed and
// the loop returns to the menu; only startup failures are fatal.

use std::io::{self, Write};

use anyhow::{anyhow, Result};
use rusqlite::Connection;

use crate::animals::{delete_animal, get_all_animals, update_animal};
use crate::commands::{self, Command};
use crate::mirror::SessionMirror;
use crate::visitors::get_all_visitors;

const MENU: &str = "\n1. Add Animal\n2. View Animals\n3. Update Animal\n4. Delete Animal\n5. Add Visitor\n6. View Visitors\n7. Calculate Average Size of Animals\n8. Exit";

/// Run the menu loop until the user picks Exit or stdin closes.
pub fn run(conn: &Connection, mirror: &mut SessionMirror) -> Result<()> {
    loop {
        println!("{MENU}");
        print!("Choose an option: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            // stdin closed; treat like Exit
            break;
        }

        let command = match line.trim().parse::<i64>().ok().and_then(Command::from_choice) {
            Some(command) => command,
            None => {
                println!("Invalid option. Please try again.");
                continue;
            }
        };

        if command == Command::Exit {
            println!("Exiting program. Goodbye!");
            break;
        }

        if let Err(err) = dispatch(command, conn, mirror) {
            println!("Error: {err:#}");
        }
    }

    Ok(())
}

fn dispatch(command: Command, conn: &Connection, mirror: &mut SessionMirror) -> Result<()> {
    match command {
        Command::AddAnimal => add_animal(conn, mirror),
        Command::ViewAnimals => view_animals(conn),
        Command::UpdateAnimal => update_animal_by_id(conn),
        Command::DeleteAnimal => delete_animal_by_id(conn),
        Command::AddVisitor => add_visitor(conn, mirror),
        Command::ViewVisitors => view_visitors(conn),
        Command::AverageSize => {
            average_size(mirror);
            Ok(())
        }
        // Exit is handled by the loop before dispatch
        Command::Exit => Ok(()),
    }
}

fn add_animal(conn: &Connection, mirror: &mut SessionMirror) -> Result<()> {
    let name = prompt("Name: ")?;
    let habitat = prompt("Habitat: ")?;
    let size_cm = prompt_f64("Size (cm): ")?;
    let age = prompt_u32("Age: ")?;
    let zone = prompt("Zone: ")?;

    commands::add_animal(conn, mirror, &name, &habitat, size_cm, age, &zone)?;
    println!("Animal added successfully.");

    Ok(())
}

fn view_animals(conn: &Connection) -> Result<()> {
    let animals = get_all_animals(conn)?;

    println!("\nAnimals in the Aquarium:");
    for animal in &animals {
        println!(
            "ID: {}, Name: {}, Habitat: {}, Size: {:.2} cm, Age: {}, Zone: {}",
            animal.id.unwrap_or_default(),
            animal.name,
            animal.habitat,
            animal.size_cm,
            animal.age,
            animal.zone,
        );
    }

    Ok(())
}

fn update_animal_by_id(conn: &Connection) -> Result<()> {
    let id = prompt_i64("Enter the ID of the animal to update: ")?;
    let size_cm = prompt_f64("New size (cm): ")?;
    let age = prompt_u32("New age: ")?;

    if update_animal(conn, id, size_cm, age)? {
        println!("Animal updated successfully.");
    } else {
        println!("Animal not found.");
    }

    Ok(())
}

fn delete_animal_by_id(conn: &Connection) -> Result<()> {
    let id = prompt_i64("Enter the ID of the animal to delete: ")?;

    if delete_animal(conn, id)? {
        println!("Animal deleted successfully.");
    } else {
        println!("Animal not found.");
    }

    Ok(())
}

fn add_visitor(conn: &Connection, mirror: &mut SessionMirror) -> Result<()> {
    let name = prompt("Name: ")?;
    let contact = prompt("Contact: ")?;
    let ticket_count = prompt_u32("Number of tickets: ")?;
    let date_input = prompt("Visit date (yyyy-MM-dd): ")?;

    commands::add_visitor(conn, mirror, &name, &contact, ticket_count, &date_input)?;
    println!("Visitor added successfully.");

    Ok(())
}

fn view_visitors(conn: &Connection) -> Result<()> {
    let visitors = get_all_visitors(conn)?;

    println!("\nVisitors to the Aquarium:");
    for visitor in &visitors {
        println!(
            "ID: {}, Name: {}, Contact: {}, Tickets: {}, Visit Date: {}",
            visitor.id.unwrap_or_default(),
            visitor.name,
            visitor.contact,
            visitor.ticket_count,
            visitor.visit_date,
        );
    }

    Ok(())
}

fn average_size(mirror: &SessionMirror) {
    match mirror.average_size() {
        Some(avg) => println!("The average size of animals is: {avg:.2} cm"),
        None => println!("No animals available to calculate average size."),
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(anyhow!("unexpected end of input"));
    }

    Ok(line.trim().to_string())
}

fn prompt_f64(label: &str) -> Result<f64> {
    let raw = prompt(label)?;
    raw.parse()
        .map_err(|_| anyhow!("expected a number, got {raw:?}"))
}

fn prompt_u32(label: &str) -> Result<u32> {
    let raw = prompt(label)?;
    raw.parse()
        .map_err(|_| anyhow!("expected a non-negative whole number, got {raw:?}"))
}

fn prompt_i64(label: &str) -> Result<i64> {
    let raw = prompt(label)?;
    raw.parse()
        .map_err(|_| anyhow!("expected an id, got {raw:?}"))
}
