//! Month calendar
//!
//! Lays the viewed month out as weeks of seven days, marking each payday and
//! the expenses due on each (clamped) day.

use chrono::Weekday;

use crate::config::settings::WeekStart;
use crate::models::{BudgetState, Expense, Paycheck, ViewMonth};

use super::summary::assign_expense;

/// One day cell of the calendar
#[derive(Debug, Clone)]
pub struct CalendarDay {
    pub day: u32,
    /// Set when a paycheck arrives this day
    pub payday: Option<Paycheck>,
    /// Expenses due this day with the paycheck that covers each
    pub expenses: Vec<(Expense, Paycheck)>,
}

impl CalendarDay {
    pub fn is_payday(&self) -> bool {
        self.payday.is_some()
    }
}

/// A month laid out in rows of seven cells; `None` pads days outside the month
#[derive(Debug, Clone)]
pub struct CalendarMonth {
    pub month: ViewMonth,
    pub week_start: WeekStart,
    pub weeks: Vec<[Option<CalendarDay>; 7]>,
}

impl CalendarMonth {
    pub fn generate(state: &BudgetState, month: &ViewMonth, week_start: WeekStart) -> Self {
        let (p1, p2) = state.clamped_paydays(month);
        let paydays = (p1.min(p2), p1.max(p2));

        let offset = leading_blanks(month.first_weekday(), week_start);
        let days = month.days_in_month();

        let mut weeks: Vec<[Option<CalendarDay>; 7]> = Vec::new();
        let mut week: [Option<CalendarDay>; 7] = Default::default();
        let mut column = offset;

        for day in 1..=days {
            // Equal paydays fold into a single paycheck 2 payday
            let payday = if day == paydays.1 {
                Some(Paycheck::Second)
            } else if day == paydays.0 {
                Some(Paycheck::First)
            } else {
                None
            };

            let expenses = state
                .expenses
                .iter()
                .filter(|e| month.clamp(e.due_day as i64) == day)
                .map(|e| (e.clone(), assign_expense(e, month, paydays)))
                .collect();

            week[column] = Some(CalendarDay {
                day,
                payday,
                expenses,
            });

            column += 1;
            if column == 7 {
                weeks.push(std::mem::take(&mut week));
                column = 0;
            }
        }

        if column > 0 {
            weeks.push(week);
        }

        Self {
            month: *month,
            week_start,
            weeks,
        }
    }

    /// The cell for `day`, if it is in the month
    pub fn day(&self, day: u32) -> Option<&CalendarDay> {
        self.weeks
            .iter()
            .flat_map(|w| w.iter())
            .flatten()
            .find(|d| d.day == day)
    }

    /// Column headings in display order
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        match self.week_start {
            WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }

    /// Format the calendar for terminal display
    ///
    /// Paydays are marked with the currency symbol and paycheck number
    /// (`$1` / `$2`); the number of expenses due shows after the day.
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        const CELL: usize = 9;
        let mut output = String::new();

        output.push_str(&format!("{:^width$}\n", self.month.friendly(), width = CELL * 7));
        for label in self.weekday_labels() {
            output.push_str(&format!("{:<width$}", label, width = CELL));
        }
        output.push('\n');
        output.push_str(&"-".repeat(CELL * 7));
        output.push('\n');

        for week in &self.weeks {
            for cell in week {
                let text = match cell {
                    Some(day) => {
                        let mut text = format!("{:>2}", day.day);
                        if let Some(paycheck) = day.payday {
                            text.push_str(&format!(" {}{}", currency_symbol, paycheck.number()));
                        }
                        if !day.expenses.is_empty() {
                            text.push_str(&format!(" {}", day.expenses.len()));
                        }
                        text
                    }
                    None => String::new(),
                };
                output.push_str(&format!("{:<width$}", text, width = CELL));
            }
            output.push('\n');
        }

        let mut due: Vec<&CalendarDay> = self
            .weeks
            .iter()
            .flat_map(|w| w.iter())
            .flatten()
            .filter(|d| !d.expenses.is_empty())
            .collect();
        due.sort_by_key(|d| d.day);

        if !due.is_empty() {
            output.push('\n');
            for day in due {
                for (expense, paycheck) in &day.expenses {
                    output.push_str(&format!(
                        "{:>2}  {:<30} {:>12}  {}\n",
                        day.day,
                        expense.name,
                        expense.amount.format_with_symbol(currency_symbol),
                        paycheck
                    ));
                }
            }
        }

        output
    }
}

/// Blank cells before day 1 in the first row
fn leading_blanks(first: Weekday, week_start: WeekStart) -> usize {
    match week_start {
        WeekStart::Sunday => first.num_days_from_sunday() as usize,
        WeekStart::Monday => first.num_days_from_monday() as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, IncomeConfig, Money};

    fn feb_2023() -> ViewMonth {
        ViewMonth::new(2023, 2).unwrap()
    }

    #[test]
    fn test_layout_sunday_start() {
        // 1 February 2023 was a Wednesday
        let cal = CalendarMonth::generate(&BudgetState::empty(), &feb_2023(), WeekStart::Sunday);

        assert_eq!(cal.weeks.len(), 5);
        assert!(cal.weeks[0][2].is_none());
        assert_eq!(cal.weeks[0][3].as_ref().unwrap().day, 1);
        assert_eq!(cal.weeks[4][2].as_ref().unwrap().day, 28);
        assert!(cal.weeks[4][3].is_none());
    }

    #[test]
    fn test_layout_monday_start() {
        let cal = CalendarMonth::generate(&BudgetState::empty(), &feb_2023(), WeekStart::Monday);

        assert_eq!(cal.weeks[0][2].as_ref().unwrap().day, 1);
        assert_eq!(cal.weekday_labels()[0], "Mon");
    }

    #[test]
    fn test_every_day_appears_once() {
        let month = ViewMonth::new(2024, 2).unwrap();
        let cal = CalendarMonth::generate(&BudgetState::empty(), &month, WeekStart::Sunday);

        let days: Vec<u32> = cal
            .weeks
            .iter()
            .flat_map(|w| w.iter())
            .flatten()
            .map(|d| d.day)
            .collect();
        assert_eq!(days, (1..=29).collect::<Vec<_>>());
    }

    #[test]
    fn test_paydays_and_expenses_marked() {
        let cal = CalendarMonth::generate(
            &BudgetState::default_dataset(),
            &feb_2023(),
            WeekStart::Sunday,
        );

        assert_eq!(cal.day(1).unwrap().payday, Some(Paycheck::First));
        assert_eq!(cal.day(16).unwrap().payday, Some(Paycheck::Second));
        assert!(!cal.day(2).unwrap().is_payday());

        let rent = &cal.day(1).unwrap().expenses;
        assert_eq!(rent.len(), 1);
        assert_eq!(rent[0].0.name, "Rent");
        assert_eq!(rent[0].1, Paycheck::Second);

        assert_eq!(cal.day(15).unwrap().expenses[0].1, Paycheck::First);
    }

    #[test]
    fn test_expense_clamped_to_last_day() {
        let state = BudgetState::new(
            IncomeConfig::default(),
            vec![Expense::new("Late", Money::from_units(5), 31, ExpenseCategory::Fixed)],
        );
        let cal = CalendarMonth::generate(&state, &feb_2023(), WeekStart::Sunday);

        assert_eq!(cal.day(28).unwrap().expenses.len(), 1);
        let text = cal.format_terminal("€");
        assert!(text.contains("Late"));
        assert!(text.contains("€5.00"));
        assert!(text.contains("€1"));
        assert!(!text.contains('$'));
    }

    #[test]
    fn test_equal_paydays() {
        let state = BudgetState::new(
            IncomeConfig::new([10, 10], Money::from_units(1), Money::zero()),
            Vec::new(),
        );
        let cal = CalendarMonth::generate(&state, &feb_2023(), WeekStart::Sunday);

        assert_eq!(cal.day(10).unwrap().payday, Some(Paycheck::Second));
    }
}
