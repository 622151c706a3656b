//! Budget service
//!
//! Owns the in-memory `BudgetState` for one session and writes it through to
//! storage after every change. There is no separate save step.

use tracing::{debug, info, warn};

use crate::audit::{generate_diff, AuditEntry, EntityType, Operation};
use crate::error::{PaysplitError, PaysplitResult};
use crate::models::{BudgetState, Expense, ExpenseDraft, ExpenseId, IncomeConfig, Money};
use crate::storage::{self, Storage};

/// Service for expense and income management
pub struct BudgetService<'a> {
    storage: &'a Storage,
    state: BudgetState,
}

impl<'a> BudgetService<'a> {
    /// Open the stored budget, or the default dataset if none is usable
    pub fn new(storage: &'a Storage) -> Self {
        let state = storage::load(storage.store());
        Self { storage, state }
    }

    /// Like `new`, but writes the default dataset out whenever it is used,
    /// so its ids stay stable across invocations
    ///
    /// An unreadable document is copied to `CORRUPT_STATE_KEY` first.
    pub fn open(storage: &'a Storage) -> PaysplitResult<Self> {
        let state = match storage::try_load(storage.store()) {
            Ok(Some(state)) => return Ok(Self { storage, state }),
            Ok(None) => {
                info!("no stored budget, writing default dataset");
                BudgetState::default_dataset()
            }
            Err(PaysplitError::StorageCorrupt(reason)) => {
                warn!(
                    %reason,
                    moved_to = storage::CORRUPT_STATE_KEY,
                    "stored budget unusable, writing default dataset"
                );
                storage::preserve_corrupt(storage.store())?;
                BudgetState::default_dataset()
            }
            Err(e) => return Err(e),
        };

        let service = Self { storage, state };
        service.persist()?;
        Ok(service)
    }

    /// Current budget
    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// Expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        self.state.list()
    }

    /// Write the current state through to storage
    pub fn persist(&self) -> PaysplitResult<()> {
        storage::save(self.storage.store(), &self.state)
    }

    /// Store `next` and make it current, returning the previous state
    ///
    /// On a failed write the current state is kept.
    fn commit(&mut self, next: BudgetState) -> PaysplitResult<BudgetState> {
        storage::save(self.storage.store(), &next)?;
        Ok(std::mem::replace(&mut self.state, next))
    }

    /// Add an expense from raw input
    ///
    /// Invalid input is refused without error: nothing is stored and
    /// `Ok(None)` is returned.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> PaysplitResult<Option<Expense>> {
        let expense = match draft.into_expense() {
            Ok(expense) => expense,
            Err(reason) => {
                debug!(%reason, "expense input refused");
                return Ok(None);
            }
        };

        let mut next = self.state.clone();
        next.add(expense.clone());
        self.commit(next)?;

        info!(id = %expense.id, name = %expense.name, "expense added");
        self.storage.log(&AuditEntry::create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.name.clone()),
            &expense,
        ))?;

        Ok(Some(expense))
    }

    /// Remove an expense; returns the removed record, or `None` if absent
    pub fn remove_expense(&mut self, id: &ExpenseId) -> PaysplitResult<Option<Expense>> {
        let mut next = self.state.clone();
        let removed = match next.remove(id) {
            Some(removed) => removed,
            None => return Ok(None),
        };
        self.commit(next)?;

        info!(id = %removed.id, name = %removed.name, "expense removed");
        self.storage.log(&AuditEntry::delete(
            EntityType::Expense,
            removed.id.to_string(),
            Some(removed.name.clone()),
            &removed,
        ))?;

        Ok(Some(removed))
    }

    /// Replace an expense with a new record built from `draft`
    ///
    /// The old record is removed and the new one appended with a fresh id.
    /// An invalid draft leaves the budget untouched and returns `Ok(None)`.
    pub fn replace_expense(
        &mut self,
        id: &ExpenseId,
        draft: ExpenseDraft,
    ) -> PaysplitResult<Option<Expense>> {
        if self.state.get(id).is_none() {
            return Err(PaysplitError::expense_not_found(id.as_str()));
        }

        let replacement = match draft.into_expense() {
            Ok(expense) => expense,
            Err(reason) => {
                debug!(%reason, "expense edit refused");
                return Ok(None);
            }
        };

        let mut next = self.state.clone();
        let previous = match next.remove(id) {
            Some(previous) => previous,
            None => return Err(PaysplitError::expense_not_found(id.as_str())),
        };
        next.add(replacement.clone());
        self.commit(next)?;

        info!(old = %previous.id, new = %replacement.id, "expense replaced");
        self.storage.log(&AuditEntry::delete(
            EntityType::Expense,
            previous.id.to_string(),
            Some(previous.name.clone()),
            &previous,
        ))?;
        self.storage.log(&AuditEntry::create(
            EntityType::Expense,
            replacement.id.to_string(),
            Some(replacement.name.clone()),
            &replacement,
        ))?;

        Ok(Some(replacement))
    }

    /// Resolve a full id or a unique id prefix
    pub fn resolve_id(&self, query: &str) -> PaysplitResult<ExpenseId> {
        let matches = self.state.find_matching(query.trim());
        match matches.as_slice() {
            [only] => Ok(only.id.clone()),
            [] => Err(PaysplitError::expense_not_found(query)),
            many => Err(PaysplitError::Ambiguous {
                entity_type: "Expense",
                identifier: query.to_string(),
                matches: many.len(),
            }),
        }
    }

    /// Set both paydays (any order)
    pub fn set_paycheck_days(&mut self, first: u32, second: u32) -> PaysplitResult<&IncomeConfig> {
        self.update_income(|income| income.paycheck_days = [first, second])
    }

    /// Set the net amount of each paycheck
    pub fn set_net_per_paycheck(&mut self, amount: Money) -> PaysplitResult<&IncomeConfig> {
        self.update_income(|income| income.net_per_paycheck = amount)
    }

    /// Set the extras shared between both paychecks
    pub fn set_extras(&mut self, amount: Money) -> PaysplitResult<&IncomeConfig> {
        self.update_income(|income| income.extras = amount)
    }

    fn update_income<F>(&mut self, apply: F) -> PaysplitResult<&IncomeConfig>
    where
        F: FnOnce(&mut IncomeConfig),
    {
        let before = self.state.income.clone();
        let mut updated = before.clone();
        apply(&mut updated);

        updated
            .validate()
            .map_err(|e| PaysplitError::Validation(e.to_string()))?;

        let mut next = self.state.clone();
        next.income = updated;
        self.commit(next)?;

        let diff = match (serde_json::to_value(&before), serde_json::to_value(&self.state.income)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        info!(changes = diff.as_deref().unwrap_or("none"), "income updated");
        self.storage.log(&AuditEntry::update(
            EntityType::Income,
            "income",
            None,
            &before,
            &self.state.income,
            diff,
        ))?;

        Ok(&self.state.income)
    }

    /// Replace the whole budget with the contents of an exported document
    ///
    /// A document that fails to parse or validate is rejected with
    /// `InvalidFormat` and the current budget is left as it was.
    pub fn import(&mut self, text: &str) -> PaysplitResult<&BudgetState> {
        let imported = storage::import_from(text)?;
        self.replace_state(imported, Operation::Import)
    }

    /// Swap in an already validated budget
    pub fn replace_state(
        &mut self,
        state: BudgetState,
        operation: Operation,
    ) -> PaysplitResult<&BudgetState> {
        let previous = self.commit(state)?;

        let summary = format!(
            "{} expenses -> {} expenses",
            previous.expenses.len(),
            self.state.expenses.len()
        );
        info!(%operation, %summary, "budget replaced");
        self.storage
            .log(&AuditEntry::replace(operation, &previous, &self.state, summary))?;

        Ok(&self.state)
    }

    /// Start over with the default income and no expenses
    pub fn reset(&mut self) -> PaysplitResult<&BudgetState> {
        self.replace_state(BudgetState::empty(), Operation::Reset)
    }

    /// The budget in the stored JSON format
    pub fn export(&self) -> PaysplitResult<String> {
        storage::export_to(&self.state)
    }
}
