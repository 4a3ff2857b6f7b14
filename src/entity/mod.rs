pub mod categories;
pub mod listings;
pub mod purchases;
pub mod questions;
pub mod users;

pub use categories::Entity as Categories;
pub use listings::Entity as Listings;
pub use purchases::Entity as Purchases;
pub use questions::Entity as Questions;
pub use users::Entity as Users;
