pub mod country;
pub mod formatter;
pub mod registry;
