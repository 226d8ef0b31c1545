use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use mirage_core::catalog::{SchemaCatalog, TableSchema};
use mirage_core::config::SimulationSettings;
use mirage_core::connection::{ConnectionDetails, ConnectionError};
use mirage_core::policy::{self, SECURITY_VIOLATION_MESSAGE};
use mirage_core::result::QueryResult;
use mirage_core::service::DatabaseService;
use mirage_core::sql;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::demo_catalog::demo_catalog;
use crate::synthesizer::synthesize_row;

#[derive(Debug)]
pub struct MockDatabase {
    catalog: Arc<SchemaCatalog>,
    settings: SimulationSettings,
    rng: Mutex<StdRng>,
}

impl MockDatabase {
    #[must_use]
    pub fn new(catalog: SchemaCatalog, settings: SimulationSettings) -> Self {
        Self {
            catalog: Arc::new(catalog),
            settings,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    #[must_use]
    pub fn with_seed(catalog: SchemaCatalog, settings: SimulationSettings, seed: u64) -> Self {
        Self {
            catalog: Arc::new(catalog),
            settings,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    #[must_use]
    pub fn demo() -> Self {
        Self::new(demo_catalog(), SimulationSettings::default())
    }

    #[must_use]
    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    fn roll_timeout(&self) -> bool {
        if self.settings.failure_probability <= 0.0 {
            return false;
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen::<f64>() < self.settings.failure_probability
    }

    fn synthesize_result(&self, table: &TableSchema, execution_time_ms: f64) -> QueryResult {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let rows = (0..self.settings.synthesized_row_cap)
            .map(|_| synthesize_row(&mut *rng, &table.columns))
            .collect();
        QueryResult::completed(table.column_names(), rows, execution_time_ms)
    }
}

fn round_to_hundredths(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1_000.0 * 100.0).round() / 100.0
}

#[async_trait]
impl DatabaseService for MockDatabase {
    async fn connect(&self, details: &ConnectionDetails) -> Result<(), ConnectionError> {
        // The whole handshake suspends up front; neither outcome is
        // observable before the delay elapses.
        tokio::time::sleep(self.settings.connect_delay()).await;

        if details.is_demo {
            debug!("demo connection accepted");
            return Ok(());
        }
        if !details.has_required_parameters() {
            return Err(ConnectionError::MissingParameters);
        }
        if self.roll_timeout() {
            debug!("injected connection timeout");
            return Err(ConnectionError::Timeout);
        }
        Ok(())
    }

    async fn list_schemas(&self) -> Vec<TableSchema> {
        tokio::time::sleep(self.settings.schema_delay()).await;
        self.catalog.tables.clone()
    }

    async fn execute(&self, sql_text: &str) -> QueryResult {
        let started_at = Instant::now();
        tokio::time::sleep(self.settings.query_delay()).await;
        let execution_time_ms = round_to_hundredths(started_at.elapsed());

        if !policy::is_read_only(sql_text) {
            debug!(
                elapsed_ms = execution_time_ms,
                "query blocked by read-only policy"
            );
            return QueryResult::rejected(SECURITY_VIOLATION_MESSAGE, execution_time_ms);
        }

        let requested = sql::from_target(sql_text);
        let target = requested
            .as_deref()
            .and_then(|name| self.catalog.table(name))
            .or_else(|| self.catalog.first_table());
        let Some(table) = target else {
            return QueryResult::completed(Vec::new(), Vec::new(), execution_time_ms);
        };

        debug!(table = %table.name, "synthesizing result set");
        self.synthesize_result(table, execution_time_ms)
    }
}
