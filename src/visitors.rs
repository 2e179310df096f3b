// Visitor repository: insert/list against the visitors table.
//
// Deliberately narrower than the animal repository. Visitors have no update
// or delete path.

use anyhow::Result;
use rusqlite::{params, Connection};

use crate::entities::Visitor;

/// Insert one visitor and return the id the store assigned to it.
///
/// The visit date is stored as ISO-8601 text via rusqlite's chrono mapping.
pub fn insert_visitor(conn: &Connection, visitor: &Visitor) -> Result<i64> {
    conn.execute(
        "INSERT INTO visitors (name, contact, ticket_count, visit_date)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            visitor.name,
            visitor.contact,
            visitor.ticket_count,
            visitor.visit_date,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Read every visitor row, in store order.
pub fn get_all_visitors(conn: &Connection) -> Result<Vec<Visitor>> {
    let mut stmt =
        conn.prepare("SELECT id, name, contact, ticket_count, visit_date FROM visitors")?;

    let visitors = stmt
        .query_map([], |row| {
            Ok(Visitor {
                id: Some(row.get(0)?),
                name: row.get(1)?,
                contact: row.get(2)?,
                ticket_count: row.get(3)?,
                visit_date: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(visitors)
}

pub fn visitor_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM visitors", [], |row| row.get(0))?;

    Ok(count)
}
