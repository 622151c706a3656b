//! Paycheck periods and due-day assignment
//!
//! With paydays `first <= second` (after clamping), paycheck 1 covers the
//! half-open range `(first, second]` and paycheck 2 covers everything else,
//! wrapping from just after `second` through `first` of the next cycle.
//! A bill due on the first payday therefore belongs to paycheck 2, and a
//! bill due on the second payday belongs to paycheck 1.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two paychecks in a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Paycheck {
    First,
    Second,
}

impl Paycheck {
    /// Both paychecks in order
    pub fn both() -> [Paycheck; 2] {
        [Paycheck::First, Paycheck::Second]
    }

    /// Decide which paycheck pays a bill due on `due_day`
    ///
    /// `payday1` and `payday2` must already be clamped to the month being
    /// viewed; their order does not matter.
    pub fn assign(due_day: u32, payday1: u32, payday2: u32) -> Self {
        let first = payday1.min(payday2);
        let second = payday1.max(payday2);

        if due_day > first && due_day <= second {
            Paycheck::First
        } else {
            Paycheck::Second
        }
    }

    /// 1 or 2
    pub fn number(&self) -> u8 {
        match self {
            Paycheck::First => 1,
            Paycheck::Second => 2,
        }
    }
}

impl fmt::Display for Paycheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("Paycheck {}", self.number()))
    }
}
