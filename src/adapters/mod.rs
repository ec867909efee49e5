// Adapters layer: concrete roster sources behind the RosterSource port.

pub mod roster;
pub mod seed;
