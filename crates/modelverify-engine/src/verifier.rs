//! Model verification engine
//!
//! This module implements the orchestration that checks an entity model
//! against the tables of a live database:
//! 1. Enumerate tables once, enumerate entities once
//! 2. Match each entity to a table by name, under the configured tolerance
//! 3. Match each property of a matched entity to a column of its table
//! 4. Aggregate the results into an ordered list of [`Summary`] records
//!
//! Failures never surface as errors from the public API. An unusable
//! connection, entities without tables, and collaborator failures all become
//! summary entries, so a build pipeline can log one report instead of
//! handling exceptions.

use modelverify_catalog::{CatalogError, TableSource};
use modelverify_core::{matching, Config, Summary};
use modelverify_entity::{EntitySource, ModelError};
use std::cell::OnceCell;
use tracing::{debug, warn};

/// A collaborator failure during report generation.
///
/// Internal only: the engine converts it into a `Database` summary rather
/// than returning it.
#[derive(Debug, thiserror::Error)]
enum VerifyError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Schema verification engine for one entity source / table source pair
///
/// The report is computed lazily and memoized for the lifetime of the
/// instance. Construct a new `Verifier` to observe schema changes; there is
/// no invalidation path. The memoized state is single-threaded by
/// construction (`OnceCell` is not `Sync`), so a `Verifier` is not meant to
/// be shared across threads.
///
/// ## Usage
///
/// ```rust,ignore
/// use modelverify_core::build_message;
/// use modelverify_engine::Verifier;
///
/// let verifier = Verifier::new(entities, tables).with_strictness(4);
/// let problems = verifier.report();
/// println!("{}", build_message("Sales model", "sales", &problems));
/// ```
pub struct Verifier<E: EntitySource, T: TableSource> {
    entity_source: E,
    table_source: T,
    config: Config,
    report: OnceCell<Vec<Summary>>,
}

impl<E: EntitySource, T: TableSource> Verifier<E, T> {
    /// Create a verifier with the default configuration
    pub fn new(entity_source: E, table_source: T) -> Self {
        Self {
            entity_source,
            table_source,
            config: Config::default(),
            report: OnceCell::new(),
        }
    }

    /// Set the match strictness (0 = laxest, 5 = exact names only)
    pub fn with_strictness(mut self, strictness: u32) -> Self {
        self.config.strictness = strictness;
        self
    }

    /// Set the namespace substrings that exclude properties from matching
    pub fn with_ignored_namespaces(mut self, namespaces: Vec<String>) -> Self {
        self.config.ignore_namespaces = namespaces;
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The entity source this verifier reads from
    pub fn entity_source(&self) -> &E {
        &self.entity_source
    }

    /// The table source this verifier reads from
    pub fn table_source(&self) -> &T {
        &self.table_source
    }

    /// Run the verification and return every summary, clean or not.
    ///
    /// The first call pulls entities and tables from the collaborators and
    /// caches the result; later calls return the cached report without
    /// touching the collaborators again. The order is stable: a
    /// `Missing tables` entry first when any entity has no table, then one
    /// entry per matched entity in entity-source order.
    pub fn generate_report(&self) -> &[Summary] {
        self.report.get_or_init(|| self.build_report())
    }

    /// The summaries worth reporting: missing tables, failures, and entities
    /// with missing columns. Clean matches are suppressed.
    pub fn report(&self) -> Vec<Summary> {
        self.generate_report()
            .iter()
            .filter(|s| s.table_missing || s.has_missing_columns())
            .cloned()
            .collect()
    }

    fn build_report(&self) -> Vec<Summary> {
        if self.table_source.connection_id().is_empty() {
            warn!("table source has no usable connection");
            return vec![Summary::invalid_connection()];
        }

        match self.verification_results(self.config.tolerance()) {
            Ok(summaries) => summaries,
            Err(error) => {
                // Partial results are unreliable once a collaborator failed,
                // so the report collapses to the failure alone.
                warn!("verification aborted: {error}");
                vec![Summary::database_error(error.to_string())]
            }
        }
    }

    fn verification_results(&self, tolerance: u32) -> Result<Vec<Summary>, VerifyError> {
        let tables = self.table_source.tables()?;
        let entities = self.entity_source.entities()?;
        debug!(
            "verifying {} entities against {} tables at tolerance {tolerance}",
            entities.len(),
            tables.len()
        );

        let missing: Vec<String> = entities
            .iter()
            .filter(|e| !matching::table_exists(tolerance, &e.name, &tables))
            .map(|e| e.name.clone())
            .collect();

        let mut summaries = Vec::with_capacity(entities.len() + 1);
        if !missing.is_empty() {
            debug!("{} entities have no matching table", missing.len());
            summaries.push(Summary::missing_tables(missing.clone()));
        }

        for entity in &entities {
            if missing.contains(&entity.name) {
                continue;
            }
            let Some(resolved) = matching::best_table(tolerance, &entity.name, &tables) else {
                continue;
            };

            let properties = self
                .entity_source
                .columns_for(entity, &self.config.ignore_namespaces)?;
            let columns = self
                .table_source
                .matching_columns(resolved, &entity.name, tolerance)?;

            summaries.push(Summary::new(
                entity.name.clone(),
                resolved.database.clone(),
                resolved.name.clone(),
                properties,
                columns,
                tolerance,
            ));
        }

        Ok(summaries)
    }
}
