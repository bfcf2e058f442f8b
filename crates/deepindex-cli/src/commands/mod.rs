pub mod folder;
pub mod open;
pub mod search;
