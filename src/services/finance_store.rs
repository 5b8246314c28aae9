//! Finance store
//!
//! Owns the in-memory transaction and budget lists plus the display
//! preference, and mirrors every mutation to a [`KeyValueStore`].
//!
//! Each mutating operation:
//! - applies its change in memory first, unconditionally;
//! - then writes the whole affected collection to its key, exactly once.
//!
//! A failed write does not undo the in-memory change. It is returned to the
//! caller inside [`Persisted`] as a non-fatal warning.

use chrono::{Local, NaiveDate};
use serde::{de::DeserializeOwned, Serialize};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    Budget, BudgetId, CategorySpending, FinancialSummary, Money, NewBudget, NewTransaction,
    Transaction, TransactionId,
};
use crate::storage::sample::{sample_budgets, sample_transactions};
use crate::storage::{
    load_json, save_json, KeyValueStore, BUDGETS_KEY, DARK_MODE_KEY, TRANSACTIONS_KEY,
};

use super::summary;

/// The result of a mutation: the value it produced and, if the write to
/// the backing store failed, why
#[derive(Debug)]
#[must_use]
pub struct Persisted<T> {
    pub value: T,
    pub warning: Option<FinanceError>,
}

impl<T> Persisted<T> {
    fn new(value: T, warning: Option<FinanceError>) -> Self {
        Self { value, warning }
    }

    /// Check if the change reached the backing store
    pub fn is_saved(&self) -> bool {
        self.warning.is_none()
    }

    /// Treat a failed write as an error
    pub fn into_result(self) -> FinanceResult<T> {
        match self.warning {
            None => Ok(self.value),
            Some(e) => Err(e),
        }
    }
}

/// The finance store
///
/// Mutations take `&mut self`, so one writer at a time is enforced by the
/// borrow checker. To share a store between threads wrap it in a `Mutex`;
/// each read-modify-write cycle then runs under the lock.
pub struct FinanceStore<S: KeyValueStore> {
    store: S,
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    dark_mode: bool,
    audit: Option<AuditLogger>,
    load_warnings: Vec<FinanceError>,
}

impl<S: KeyValueStore> FinanceStore<S> {
    /// Load state from `store`, seeding sample data on first run
    ///
    /// Each collection is loaded independently. A missing collection is
    /// filled with sample data and written back; so is a corrupt one (the
    /// corruption is kept in [`load_warnings`](Self::load_warnings)). A
    /// missing dark-mode flag defaults to light mode without a write.
    ///
    /// # Errors
    ///
    /// Fails only if the store cannot be read at all. Write failures while
    /// seeding are recorded as load warnings.
    pub fn open(store: S) -> FinanceResult<Self> {
        Self::open_with_audit(store, None)
    }

    /// Like [`open`](Self::open), recording seeds and mutations in an audit log
    pub fn open_with_audit(store: S, audit: Option<AuditLogger>) -> FinanceResult<Self> {
        let mut finance = Self {
            store,
            transactions: Vec::new(),
            budgets: Vec::new(),
            dark_mode: false,
            audit,
            load_warnings: Vec::new(),
        };

        finance.transactions =
            finance.load_or_seed(TRANSACTIONS_KEY, EntityType::Transaction, sample_transactions)?;
        finance.budgets = finance.load_or_seed(BUDGETS_KEY, EntityType::Budget, sample_budgets)?;
        finance.dark_mode = finance.load_dark_mode()?;

        tracing::debug!(
            transactions = finance.transactions.len(),
            budgets = finance.budgets.len(),
            dark_mode = finance.dark_mode,
            "finance store loaded"
        );

        Ok(finance)
    }

    fn load_or_seed<T>(
        &mut self,
        key: &str,
        entity_type: EntityType,
        sample: fn() -> Vec<T>,
    ) -> FinanceResult<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
    {
        match load_json::<Vec<T>, S>(&self.store, key) {
            Ok(Some(rows)) => return Ok(rows),
            Ok(None) => {
                tracing::info!(key, "no saved data, seeding sample data");
            }
            Err(e) if e.is_corrupt_data() => {
                tracing::warn!(key, error = %e, "saved data is corrupt, replacing with sample data");
                self.load_warnings.push(e);
            }
            Err(e) => return Err(e),
        }

        let rows = sample();
        if let Some(e) = self.persist(key, &rows) {
            self.load_warnings.push(e);
        }
        self.record(AuditEntry::seed(entity_type, key, &rows));
        Ok(rows)
    }

    fn load_dark_mode(&mut self) -> FinanceResult<bool> {
        match load_json::<bool, S>(&self.store, DARK_MODE_KEY) {
            Ok(value) => Ok(value.unwrap_or(false)),
            Err(e) if e.is_corrupt_data() => {
                tracing::warn!(error = %e, "saved display preference is corrupt, resetting");
                self.load_warnings.push(e);
                if let Some(e) = self.persist(DARK_MODE_KEY, &false) {
                    self.load_warnings.push(e);
                }
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Write `value` under `key`, returning the failure instead of raising it
    fn persist<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Option<FinanceError> {
        match save_json(&self.store, key, value) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "change kept in memory but not persisted");
                Some(e)
            }
        }
    }

    fn record(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                tracing::warn!(error = %e, "failed to write audit entry");
            }
        }
    }

    /// Record a new transaction under a freshly generated ID
    ///
    /// The transaction is appended; the list is not re-sorted.
    pub fn add_transaction(&mut self, input: NewTransaction) -> Persisted<Transaction> {
        let txn = input.into_transaction(TransactionId::generate());
        self.transactions.push(txn.clone());

        let warning = self.persist(TRANSACTIONS_KEY, &self.transactions);
        self.record(AuditEntry::create(
            EntityType::Transaction,
            txn.id.as_str(),
            Some(txn.title.clone()),
            &txn,
        ));

        Persisted::new(txn, warning)
    }

    /// Remove every transaction with the given ID, returning how many went
    ///
    /// An unknown ID is not an error; the unchanged list is still written.
    pub fn delete_transaction(&mut self, id: &TransactionId) -> Persisted<usize> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.transactions)
            .into_iter()
            .partition(|t| &t.id == id);
        self.transactions = kept;

        let warning = self.persist(TRANSACTIONS_KEY, &self.transactions);
        for txn in &removed {
            self.record(AuditEntry::delete(
                EntityType::Transaction,
                txn.id.as_str(),
                Some(txn.title.clone()),
                txn,
            ));
        }

        Persisted::new(removed.len(), warning)
    }

    /// Declare a budget, snapshotting what is already spent in its category
    ///
    /// `spent` is fixed here and never recomputed as transactions change.
    /// Use [`live_spent`](Self::live_spent) for the current figure.
    pub fn add_budget(&mut self, input: NewBudget) -> Persisted<Budget> {
        let spent = summary::spent_for_category(&self.transactions, &input.category);
        let budget = input.into_budget(BudgetId::generate(), spent);
        self.budgets.push(budget.clone());

        let warning = self.persist(BUDGETS_KEY, &self.budgets);
        self.record(AuditEntry::create(
            EntityType::Budget,
            budget.id.as_str(),
            Some(budget.category.clone()),
            &budget,
        ));

        Persisted::new(budget, warning)
    }

    /// Flip between light and dark mode, returning the new setting
    pub fn toggle_dark_mode(&mut self) -> Persisted<bool> {
        let before = self.dark_mode;
        self.dark_mode = !before;

        let warning = self.persist(DARK_MODE_KEY, &self.dark_mode);
        self.record(AuditEntry::update(
            EntityType::Preference,
            DARK_MODE_KEY,
            Some("dark mode".to_string()),
            &before,
            &self.dark_mode,
        ));

        Persisted::new(self.dark_mode, warning)
    }

    /// Totals as of the local wall-clock date
    pub fn financial_summary(&self) -> FinancialSummary {
        self.financial_summary_at(Local::now().date_naive())
    }

    /// Totals with "this month" taken from `today`
    pub fn financial_summary_at(&self, today: NaiveDate) -> FinancialSummary {
        summary::compute_summary(&self.transactions, today)
    }

    /// What a budget's category has spent right now, ignoring the snapshot
    pub fn live_spent(&self, budget: &Budget) -> Money {
        summary::spent_for_category(&self.transactions, &budget.category)
    }

    /// Expense totals per category, largest first
    pub fn spending_by_category(&self) -> Vec<CategorySpending> {
        summary::spending_by_category(&self.transactions)
    }

    /// Up to `limit` transactions, newest date first
    pub fn recent_transactions(&self, limit: usize) -> Vec<&Transaction> {
        summary::most_recent(&self.transactions, limit)
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Look up a transaction by ID
    pub fn transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    /// All budgets in insertion order
    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    /// Whether dark mode is on
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Problems found and repaired while loading
    pub fn load_warnings(&self) -> &[FinanceError] {
        &self.load_warnings
    }

    /// The backing store
    pub fn store(&self) -> &S {
        &self.store
    }
}
