// Animal repository: CRUD against the aquatic_animals table.
//
// The database is the source of truth for every read. Update and delete
// report "not found" (zero rows affected) as Ok(false), distinct from a
// store failure.

use anyhow::Result;
use rusqlite::{params, Connection};

use crate::entities::AquaticAnimal;

/// Insert one animal and return the id the store assigned to it.
pub fn insert_animal(conn: &Connection, animal: &AquaticAnimal) -> Result<i64> {
    conn.execute(
        "INSERT INTO aquatic_animals (name, habitat, size, age, zone)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            animal.name,
            animal.habitat,
            animal.size_cm,
            animal.age,
            animal.zone,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Read every animal row, in store order.
pub fn get_all_animals(conn: &Connection) -> Result<Vec<AquaticAnimal>> {
    let mut stmt =
        conn.prepare("SELECT id, name, habitat, size, age, zone FROM aquatic_animals")?;

    let animals = stmt
        .query_map([], |row| {
            Ok(AquaticAnimal {
                id: Some(row.get(0)?),
                name: row.get(1)?,
                habitat: row.get(2)?,
                size_cm: row.get(3)?,
                age: row.get(4)?,
                zone: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(animals)
}

/// Update size and age for the given id. Name, habitat, and zone are
/// immutable after creation.
pub fn update_animal(conn: &Connection, id: i64, size_cm: f64, age: u32) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE aquatic_animals SET size = ?1, age = ?2 WHERE id = ?3",
        params![size_cm, age, id],
    )?;

    Ok(changed > 0)
}

/// Delete the animal with the given id.
pub fn delete_animal(conn: &Connection, id: i64) -> Result<bool> {
    let deleted = conn.execute("DELETE FROM aquatic_animals WHERE id = ?1", params![id])?;

    Ok(deleted > 0)
}

pub fn animal_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM aquatic_animals", [], |row| row.get(0))?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::setup_database;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        setup_database(&conn).unwrap();
        conn
    }

    #[test]
    fn test_create_then_list_round_trip() {
        let conn = test_conn();

        let animal = AquaticAnimal::new("cLOWNfish", "Coral reef", 11.5, 2, "Reef-1");
        let id = insert_animal(&conn, &animal).unwrap();
        assert!(id > 0, "store should hand back a generated id");

        let listed = get_all_animals(&conn).unwrap();
        assert_eq!(listed.len(), 1);

        let row = &listed[0];
        assert_eq!(row.id, Some(id));
        assert_eq!(row.name, "Clownfish");
        assert_eq!(row.habitat, "Coral reef");
        assert_eq!(row.size_cm, 11.5);
        assert_eq!(row.age, 2);
        assert_eq!(row.zone, "Reef-1");
    }

    #[test]
    fn test_update_changes_only_size_and_age() {
        let conn = test_conn();

        let id = insert_animal(
            &conn,
            &AquaticAnimal::new("Beluga", "Arctic waters", 400.0, 12, "North"),
        )
        .unwrap();

        assert!(update_animal(&conn, id, 420.5, 13).unwrap());

        let row = &get_all_animals(&conn).unwrap()[0];
        assert_eq!(row.size_cm, 420.5);
        assert_eq!(row.age, 13);
        assert_eq!(row.name, "Beluga");
        assert_eq!(row.habitat, "Arctic waters");
        assert_eq!(row.zone, "North");
    }

    #[test]
    fn test_update_missing_id_reports_not_found() {
        let conn = test_conn();

        let id = insert_animal(
            &conn,
            &AquaticAnimal::new("Eel", "Rocky crevice", 90.0, 5, "B2"),
        )
        .unwrap();

        assert!(!update_animal(&conn, id + 1000, 1.0, 1).unwrap());

        // Existing row is untouched
        let row = &get_all_animals(&conn).unwrap()[0];
        assert_eq!(row.size_cm, 90.0);
        assert_eq!(row.age, 5);
    }

    #[test]
    fn test_delete_removes_exactly_one_row() {
        let conn = test_conn();

        let keep = insert_animal(
            &conn,
            &AquaticAnimal::new("Tang", "Coral reef", 20.0, 1, "Reef-1"),
        )
        .unwrap();
        let gone = insert_animal(
            &conn,
            &AquaticAnimal::new("Grouper", "Open water", 80.0, 6, "C3"),
        )
        .unwrap();

        assert!(delete_animal(&conn, gone).unwrap());
        assert_eq!(animal_count(&conn).unwrap(), 1);

        let listed = get_all_animals(&conn).unwrap();
        assert_eq!(listed[0].id, Some(keep));
    }

    #[test]
    fn test_delete_missing_id_reports_not_found() {
        let conn = test_conn();

        insert_animal(
            &conn,
            &AquaticAnimal::new("Ray", "Sandy bottom", 150.0, 8, "D4"),
        )
        .unwrap();

        assert!(!delete_animal(&conn, 999).unwrap());
        assert_eq!(animal_count(&conn).unwrap(), 1, "row count unchanged");
    }
}
