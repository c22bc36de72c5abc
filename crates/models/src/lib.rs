//! SeaORM entities for sellers and books, plus the connection factory.

pub mod errors;
pub mod db;
pub mod seller;
pub mod book;

#[cfg(test)]
mod tests;
