//! Paycheck Summary Report
//!
//! Splits a month's expenses between the two paychecks and totals what each
//! one owes, what it brings in, and what is left over.

use crate::error::{PaysplitError, PaysplitResult};
use crate::models::{
    BudgetState, Expense, ExpenseCategory, IncomeConfig, Money, Paycheck, ViewMonth,
};
use std::io::Write;

/// Which paycheck pays `expense` in `month`, given the clamped paydays
pub fn assign_expense(expense: &Expense, month: &ViewMonth, paydays: (u32, u32)) -> Paycheck {
    let due = month.clamp(expense.due_day as i64);
    Paycheck::assign(due, paydays.0, paydays.1)
}

/// Sum of the amounts assigned to `paycheck`
pub fn expense_total(
    expenses: &[Expense],
    month: &ViewMonth,
    paydays: (u32, u32),
    paycheck: Paycheck,
) -> Money {
    expenses
        .iter()
        .filter(|e| assign_expense(e, month, paydays) == paycheck)
        .map(|e| e.amount)
        .sum()
}

/// Income minus the paycheck's expenses; negative when overcommitted
pub fn remaining(
    income: &IncomeConfig,
    expenses: &[Expense],
    month: &ViewMonth,
    paydays: (u32, u32),
    paycheck: Paycheck,
) -> Money {
    income.per_paycheck_income() - expense_total(expenses, month, paydays, paycheck)
}

/// Totals per category, in the order each category first appears
pub fn category_totals(expenses: &[Expense]) -> Vec<(ExpenseCategory, Money)> {
    let mut totals: Vec<(ExpenseCategory, Money)> = Vec::new();

    for expense in expenses {
        match totals.iter_mut().find(|(c, _)| *c == expense.category) {
            Some((_, total)) => *total += expense.amount,
            None => totals.push((expense.category, expense.amount)),
        }
    }

    totals
}

/// An expense as it falls in the viewed month
#[derive(Debug, Clone)]
pub struct AssignedExpense {
    pub expense: Expense,
    /// Due day after clamping to the month
    pub due_day: u32,
}

/// Everything one paycheck covers
#[derive(Debug, Clone)]
pub struct PeriodSummary {
    pub paycheck: Paycheck,
    /// Clamped day this paycheck arrives
    pub payday: u32,
    pub income: Money,
    pub expenses: Vec<AssignedExpense>,
    pub total: Money,
    pub remaining: Money,
}

impl PeriodSummary {
    pub fn is_overcommitted(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Spending in one category
#[derive(Debug, Clone)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: Money,
    /// Share of all expenses, 0-100
    pub percentage: f64,
}

/// Paycheck summary for a month
#[derive(Debug, Clone)]
pub struct PaycheckSummary {
    pub month: ViewMonth,
    /// Clamped paydays, ascending
    pub paydays: (u32, u32),
    /// Paycheck 1 then paycheck 2
    pub periods: [PeriodSummary; 2],
    pub categories: Vec<CategoryTotal>,
    pub total_expenses: Money,
    pub monthly_income: Money,
}

impl PaycheckSummary {
    /// Generate the summary for `month`
    pub fn generate(state: &BudgetState, month: &ViewMonth) -> Self {
        let (p1, p2) = state.clamped_paydays(month);
        let paydays = (p1.min(p2), p1.max(p2));
        let income = state.income.per_paycheck_income();

        let period = |paycheck: Paycheck, payday: u32| {
            let mut expenses: Vec<AssignedExpense> = state
                .expenses
                .iter()
                .filter(|e| assign_expense(e, month, paydays) == paycheck)
                .map(|e| AssignedExpense {
                    expense: e.clone(),
                    due_day: month.clamp(e.due_day as i64),
                })
                .collect();
            expenses.sort_by_key(|a| a.due_day);

            let total = expense_total(&state.expenses, month, paydays, paycheck);
            PeriodSummary {
                paycheck,
                payday,
                income,
                expenses,
                total,
                remaining: income - total,
            }
        };

        let total_expenses = state.total_expenses();
        let categories = category_totals(&state.expenses)
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                category,
                total,
                percentage: if total_expenses.is_zero() {
                    0.0
                } else {
                    (total.cents() as f64 / total_expenses.cents() as f64) * 100.0
                },
            })
            .collect();

        Self {
            month: *month,
            paydays,
            periods: [
                period(Paycheck::First, paydays.0),
                period(Paycheck::Second, paydays.1),
            ],
            categories,
            total_expenses,
            monthly_income: income + income,
        }
    }

    pub fn period(&self, paycheck: Paycheck) -> &PeriodSummary {
        match paycheck {
            Paycheck::First => &self.periods[0],
            Paycheck::Second => &self.periods[1],
        }
    }

    /// Income left after every expense in the month
    pub fn monthly_remaining(&self) -> Money {
        self.monthly_income - self.total_expenses
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str(&format!("Paycheck Summary - {}\n", self.month.friendly()));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        for period in &self.periods {
            output.push_str(&format!(
                "\n{} (day {})\n",
                period.paycheck.to_string().to_uppercase(),
                period.payday
            ));
            output.push_str(&"-".repeat(60));
            output.push('\n');

            if period.expenses.is_empty() {
                output.push_str("  (no expenses)\n");
            }

            for assigned in &period.expenses {
                output.push_str(&format!(
                    "  {:>2}  {:<30} {:>14}\n",
                    assigned.due_day,
                    assigned.expense.name,
                    money(assigned.expense.amount)
                ));
            }

            output.push_str(&format!("  {:<34} {:>14}\n", "Income", money(period.income)));
            output.push_str(&format!("  {:<34} {:>14}\n", "Expenses", money(period.total)));

            let remaining = if period.is_overcommitted() {
                format!("{} *", money(period.remaining))
            } else {
                money(period.remaining)
            };
            output.push_str(&format!("  {:<34} {:>14}\n", "Remaining", remaining));
        }

        output.push('\n');
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("{:<36} {:>14}\n", "Monthly income", money(self.monthly_income)));
        output.push_str(&format!("{:<36} {:>14}\n", "Monthly expenses", money(self.total_expenses)));
        output.push_str(&format!("{:<36} {:>14}\n", "Left over", money(self.monthly_remaining())));

        if self.periods.iter().any(|p| p.is_overcommitted()) {
            output.push_str("\n* Paycheck expenses exceed its income\n");
        }

        output
    }

    /// Export one row per expense with its assigned paycheck
    pub fn export_csv<W: Write>(&self, writer: W) -> PaysplitResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record([
            "Paycheck", "Payday", "Due Day", "Name", "Category", "Amount", "ID",
        ])
        .map_err(|e| PaysplitError::Export(e.to_string()))?;

        for period in &self.periods {
            for assigned in &period.expenses {
                let expense = &assigned.expense;
                wtr.write_record([
                    period.paycheck.number().to_string(),
                    period.payday.to_string(),
                    assigned.due_day.to_string(),
                    expense.name.clone(),
                    expense.category.label().to_string(),
                    format!("{:.2}", expense.amount.as_f64()),
                    expense.id.to_string(),
                ])
                .map_err(|e| PaysplitError::Export(e.to_string()))?;
            }
        }

        wtr.flush()
            .map_err(|e| PaysplitError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(name: &str, units: i64, due_day: u32, category: ExpenseCategory) -> Expense {
        Expense::new(name, Money::from_units(units), due_day, category)
    }

    fn state(paydays: [u32; 2], net: i64, extras: i64, expenses: Vec<Expense>) -> BudgetState {
        BudgetState::new(
            IncomeConfig::new(paydays, Money::from_units(net), Money::from_units(extras)),
            expenses,
        )
    }

    fn feb_2023() -> ViewMonth {
        ViewMonth::new(2023, 2).unwrap()
    }

    #[test]
    fn test_due_day_clamped_onto_second_payday() {
        // Both the payday and the due day clamp to the 28th, which closes period 1
        let s = state([1, 30], 2000, 0, vec![expense("Late", 100, 30, ExpenseCategory::Fixed)]);
        let summary = PaycheckSummary::generate(&s, &feb_2023());

        assert_eq!(summary.paydays, (1, 28));
        let first = summary.period(Paycheck::First);
        assert_eq!(first.expenses.len(), 1);
        assert_eq!(first.expenses[0].due_day, 28);
        assert!(summary.period(Paycheck::Second).expenses.is_empty());
    }

    #[test]
    fn test_due_day_clamped_past_second_payday() {
        let s = state([1, 16], 2000, 0, vec![expense("Late", 100, 30, ExpenseCategory::Fixed)]);
        let summary = PaycheckSummary::generate(&s, &feb_2023());

        let second = summary.period(Paycheck::Second);
        assert_eq!(second.expenses.len(), 1);
        assert_eq!(second.expenses[0].due_day, 28);
        assert!(summary.period(Paycheck::First).expenses.is_empty());
    }

    #[test]
    fn test_extras_split_between_paychecks() {
        let s = state([1, 15], 20000, 1000, Vec::new());
        let summary = PaycheckSummary::generate(&s, &feb_2023());

        for period in &summary.periods {
            assert_eq!(period.income, Money::from_units(20500));
            assert_eq!(period.remaining, Money::from_units(20500));
        }
        assert_eq!(summary.monthly_income, Money::from_units(41000));
    }

    #[test]
    fn test_due_on_first_payday_goes_to_second_paycheck() {
        let s = state([1, 15], 2000, 0, vec![expense("Rent", 1200, 1, ExpenseCategory::Fixed)]);
        let month = ViewMonth::new(2024, 3).unwrap();

        assert_eq!(assign_expense(&s.expenses[0], &month, (1, 15)), Paycheck::Second);
        assert_eq!(
            expense_total(&s.expenses, &month, (1, 15), Paycheck::Second),
            Money::from_units(1200)
        );
        assert_eq!(
            remaining(&s.income, &s.expenses, &month, (1, 15), Paycheck::Second),
            Money::from_units(800)
        );
    }

    #[test]
    fn test_totals_partition_all_expenses() {
        let s = BudgetState::default_dataset();
        for m in 1..=12 {
            let month = ViewMonth::new(2024, m).unwrap();
            let summary = PaycheckSummary::generate(&s, &month);

            assert_eq!(
                summary.periods[0].total + summary.periods[1].total,
                s.total_expenses()
            );
            assert_eq!(
                summary.periods[0].expenses.len() + summary.periods[1].expenses.len(),
                s.expenses.len()
            );
        }
    }

    #[test]
    fn test_default_dataset_summary() {
        let summary = PaycheckSummary::generate(&BudgetState::default_dataset(), &feb_2023());

        // Car Loan (15) is on paycheck 1; Rent (1), Electric (20), Emergency Fund (28) on paycheck 2
        assert_eq!(summary.periods[0].total, Money::from_units(350));
        assert_eq!(summary.periods[1].total, Money::from_units(1490));
        assert_eq!(summary.periods[1].remaining, Money::from_units(510));
        assert_eq!(summary.monthly_remaining(), Money::from_units(2160));
    }

    #[test]
    fn test_paydays_in_either_order() {
        let expenses = vec![expense("Phone", 50, 10, ExpenseCategory::Variable)];
        let a = PaycheckSummary::generate(&state([1, 16], 100, 0, expenses.clone()), &feb_2023());
        let b = PaycheckSummary::generate(&state([16, 1], 100, 0, expenses), &feb_2023());

        assert_eq!(a.paydays, (1, 16));
        assert_eq!(b.paydays, (1, 16));
        assert_eq!(a.periods[0].total, b.periods[0].total);
    }

    #[test]
    fn test_paydays_clamped() {
        let s = state([15, 31], 100, 0, vec![expense("Gym", 10, 30, ExpenseCategory::Variable)]);
        let summary = PaycheckSummary::generate(&s, &feb_2023());

        assert_eq!(summary.paydays, (15, 28));
        assert_eq!(summary.periods[0].expenses[0].due_day, 28);
    }

    #[test]
    fn test_overcommitted_paycheck() {
        let s = state([1, 16], 100, 0, vec![expense("Rent", 150, 10, ExpenseCategory::Fixed)]);
        let summary = PaycheckSummary::generate(&s, &feb_2023());

        assert!(summary.periods[0].is_overcommitted());
        assert_eq!(summary.periods[0].remaining, Money::from_units(-50));
        assert!(summary.format_terminal("$").contains("exceed"));
    }

    #[test]
    fn test_category_totals_first_seen_order() {
        let expenses = vec![
            expense("Gym", 30, 5, ExpenseCategory::Variable),
            expense("Rent", 1000, 1, ExpenseCategory::Fixed),
            expense("Food", 70, 9, ExpenseCategory::Variable),
        ];

        let totals = category_totals(&expenses);
        assert_eq!(
            totals,
            vec![
                (ExpenseCategory::Variable, Money::from_units(100)),
                (ExpenseCategory::Fixed, Money::from_units(1000)),
            ]
        );

        let summary = PaycheckSummary::generate(&state([1, 16], 0, 0, expenses), &feb_2023());
        let pct: f64 = summary.categories.iter().map(|c| c.percentage).sum();
        assert!((pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_budget() {
        let summary = PaycheckSummary::generate(&BudgetState::empty(), &feb_2023());
        assert!(summary.categories.is_empty());
        assert_eq!(summary.total_expenses, Money::zero());
        assert!(summary.format_terminal("$").contains("(no expenses)"));
        assert!(summary.format_terminal("€").contains("€0.00"));
    }

    #[test]
    fn test_csv_export() {
        let summary = PaycheckSummary::generate(&BudgetState::default_dataset(), &feb_2023());

        let mut out = Vec::new();
        summary.export_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Paycheck,Payday,Due Day,Name,Category,Amount,ID"));
        assert!(text.contains("1,1,15,Car Loan,debt,350.00,"));
        assert_eq!(text.lines().count(), 5);
    }
}
