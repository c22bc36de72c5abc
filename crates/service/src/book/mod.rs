//! Book module: same layering as `seller`.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use repo::seaorm::SeaOrmBookRepository;
pub use service::BookService;
