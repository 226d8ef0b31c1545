use thiserror::Error;
use tracing::debug;

use crate::catalog::TableSchema;
use crate::connection::{ConnectionDetails, ConnectionError};
use crate::result::QueryResult;
use crate::service::DatabaseService;

const DEFAULT_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Data,
    Query,
    Erd,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("no active database session")]
    NotConnected,
    #[error("a database session is already active")]
    AlreadyConnected,
    #[error("unknown table `{0}`")]
    UnknownTable(String),
    #[error(transparent)]
    Connection(#[from] ConnectionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTicket(u64);

#[derive(Debug)]
pub struct AppController<S: DatabaseService> {
    service: S,
    connected: bool,
    ssl: bool,
    schemas: Vec<TableSchema>,
    selected_table: Option<String>,
    view: ViewMode,
    latest_result: Option<QueryResult>,
    generation: u64,
    page_size: u64,
}

impl<S: DatabaseService> AppController<S> {
    #[must_use]
    pub fn new(service: S) -> Self {
        Self {
            service,
            connected: false,
            ssl: false,
            schemas: Vec::new(),
            selected_table: None,
            view: ViewMode::default(),
            latest_result: None,
            generation: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    #[must_use]
    pub fn ssl_enabled(&self) -> bool {
        self.ssl
    }

    #[must_use]
    pub fn schemas(&self) -> &[TableSchema] {
        &self.schemas
    }

    #[must_use]
    pub fn selected_table(&self) -> Option<&str> {
        self.selected_table.as_deref()
    }

    #[must_use]
    pub fn view(&self) -> ViewMode {
        self.view
    }

    #[must_use]
    pub fn latest_result(&self) -> Option<&QueryResult> {
        self.latest_result.as_ref()
    }

    pub async fn connect(&mut self, details: ConnectionDetails) -> Result<(), ControllerError> {
        if self.connected {
            return Err(ControllerError::AlreadyConnected);
        }

        self.service.connect(&details).await?;
        let schemas = self.service.list_schemas().await;

        self.connected = true;
        self.ssl = details.ssl;
        self.schemas = schemas;
        debug!(tables = self.schemas.len(), "session established");

        if let Some(first) = self.schemas.first().map(|table| table.name.clone()) {
            self.select_table(&first).await?;
        }
        Ok(())
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
        self.ssl = false;
        self.schemas.clear();
        self.selected_table = None;
        self.latest_result = None;
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub async fn select_table(&mut self, name: &str) -> Result<(), ControllerError> {
        if !self.connected {
            return Err(ControllerError::NotConnected);
        }
        if !self.schemas.iter().any(|table| table.name == name) {
            return Err(ControllerError::UnknownTable(name.to_string()));
        }

        self.selected_table = Some(name.to_string());
        if self.view == ViewMode::Data {
            self.load_selected_table().await;
        }
        Ok(())
    }

    pub async fn refresh_table(&mut self) -> Result<(), ControllerError> {
        if !self.connected {
            return Err(ControllerError::NotConnected);
        }
        self.load_selected_table().await;
        Ok(())
    }

    pub async fn run_query(&mut self, sql: &str) -> Result<QueryResult, ControllerError> {
        if !self.connected {
            return Err(ControllerError::NotConnected);
        }

        let ticket = self.begin_query();
        let result = self.service.execute(sql).await;
        self.complete_query(ticket, result.clone());
        Ok(result)
    }

    // Caller-side staleness discipline: the engine runs overlapping calls
    // independently, so a result only lands if no newer request began since.
    pub fn begin_query(&mut self) -> QueryTicket {
        self.generation = self.generation.saturating_add(1);
        QueryTicket(self.generation)
    }

    pub fn complete_query(&mut self, ticket: QueryTicket, result: QueryResult) -> bool {
        if ticket.0 != self.generation {
            debug!(
                ticket = ticket.0,
                generation = self.generation,
                "discarding stale query result"
            );
            return false;
        }
        self.latest_result = Some(result);
        true
    }

    async fn load_selected_table(&mut self) {
        let Some(table) = self.selected_table.clone() else {
            return;
        };
        let ticket = self.begin_query();
        let result = self.service.fetch_page(&table, 0, self.page_size).await;
        self.complete_query(ticket, result);
    }
}
