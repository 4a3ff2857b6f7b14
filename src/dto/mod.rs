pub mod categories;
pub mod listings;
pub mod purchases;
pub mod questions;
pub mod users;
