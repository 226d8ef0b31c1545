pub mod catalog;
pub mod config;
pub mod connection;
pub mod controller;
pub mod policy;
pub mod result;
pub mod service;
pub mod sql;

pub use catalog::{Column, ColumnRef, SchemaCatalog, TableSchema};
pub use config::SimulationSettings;
pub use connection::{ConnectionDetails, ConnectionError};
pub use controller::{AppController, ControllerError, ViewMode};
pub use result::{CellValue, QueryResult};
pub use service::DatabaseService;
