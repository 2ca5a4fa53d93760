//! Customer aggregate

pub mod model;
pub mod repository;

pub use model::Customer;
pub use repository::CustomerRepository;
