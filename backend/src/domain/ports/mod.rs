//! Domain ports for the hexagonal boundary.

mod roster_query;

#[cfg(test)]
pub use roster_query::MockRosterQuery;
pub use roster_query::RosterQuery;
