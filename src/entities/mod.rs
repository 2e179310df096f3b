// Plain data records for the two persisted entities.
//
// Each record carries an optional id: assigned by the database on insert,
// absent on a freshly constructed value.

pub mod animal;
pub mod visitor;

pub use animal::{title_case, AquaticAnimal};
pub use visitor::{parse_visit_date, Visitor};
