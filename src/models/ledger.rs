//! Category ledger
//!
//! A ledger holds one category's fixed allocation and the expenses recorded
//! against it, in entry order. Everything else (totals, remaining budget,
//! running balances) is derived from the expense list on every call.

use serde::{Deserialize, Serialize};

use super::category::CategoryName;
use super::money::Money;

/// Label shown in place of an empty description
pub const NO_DESCRIPTION: &str = "No description";

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Free-text description, stored exactly as entered (may be empty)
    pub description: String,

    /// Amount spent
    pub amount: Money,
}

impl Expense {
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }

    /// Description for display and export, with blank entries replaced
    pub fn display_description(&self) -> &str {
        if self.description.trim().is_empty() {
            NO_DESCRIPTION
        } else {
            &self.description
        }
    }
}

/// One step of a ledger's running balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningBalance {
    pub description: String,
    pub amount: Money,
    /// Allocation minus everything spent up to and including this expense
    pub remaining: Money,
}

/// Allocation and expense history for one category
#[derive(Debug, Clone)]
pub struct CategoryLedger {
    name: CategoryName,
    allocation: Money,
    expenses: Vec<Expense>,
}

impl CategoryLedger {
    /// Create an empty ledger with a fixed allocation
    pub fn new(name: CategoryName, allocation: Money) -> Self {
        Self {
            name,
            allocation,
            expenses: Vec::new(),
        }
    }

    pub fn name(&self) -> CategoryName {
        self.name
    }

    pub fn allocation(&self) -> Money {
        self.allocation
    }

    /// Recorded expenses in entry order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Append an expense. The amount is trusted to be non-negative.
    pub fn add_expense(&mut self, amount: Money, description: impl Into<String>) {
        self.expenses.push(Expense::new(amount, description));
    }

    pub fn total_spent(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Allocation minus total spent; negative once over budget
    pub fn remaining_budget(&self) -> Money {
        self.allocation - self.total_spent()
    }

    /// True only when spending strictly exceeds the allocation
    pub fn is_over_budget(&self) -> bool {
        self.total_spent() > self.allocation
    }

    /// Remaining budget after each expense, in entry order
    pub fn running_balances(&self) -> Vec<RunningBalance> {
        let mut remaining = self.allocation;
        self.expenses
            .iter()
            .map(|expense| {
                remaining -= expense.amount;
                RunningBalance {
                    description: expense.display_description().to_string(),
                    amount: expense.amount,
                    remaining,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(allocation_cents: i64) -> CategoryLedger {
        CategoryLedger::new(CategoryName::Needs, Money::from_cents(allocation_cents))
    }

    #[test]
    fn test_empty_ledger() {
        let l = ledger(50000);
        assert!(l.is_empty());
        assert_eq!(l.total_spent(), Money::zero());
        assert_eq!(l.remaining_budget(), Money::from_cents(50000));
        assert!(!l.is_over_budget());
        assert!(l.running_balances().is_empty());
    }

    #[test]
    fn test_total_is_order_independent() {
        let amounts = [1250, 300, 9999, 1];

        let mut forward = ledger(10000);
        for a in amounts {
            forward.add_expense(Money::from_cents(a), "x");
        }

        let mut backward = ledger(10000);
        for a in amounts.iter().rev() {
            backward.add_expense(Money::from_cents(*a), "x");
        }

        assert_eq!(forward.total_spent(), Money::from_cents(11550));
        assert_eq!(forward.total_spent(), backward.total_spent());
    }

    #[test]
    fn test_remaining_goes_negative() {
        let mut l = ledger(50000);
        l.add_expense(Money::from_cents(20000), "Groceries");
        assert_eq!(l.remaining_budget(), Money::from_cents(30000));
        assert!(!l.is_over_budget());

        l.add_expense(Money::from_cents(40000), "Rent");
        assert_eq!(l.total_spent(), Money::from_cents(60000));
        assert_eq!(l.remaining_budget(), Money::from_cents(-10000));
        assert!(l.is_over_budget());
    }

    #[test]
    fn test_spending_exactly_the_allocation_is_within_budget() {
        let mut l = ledger(30000);
        l.add_expense(Money::from_cents(30000), "Everything");
        assert_eq!(l.remaining_budget(), Money::zero());
        assert!(!l.is_over_budget());

        l.add_expense(Money::from_cents(1), "One cent more");
        assert!(l.is_over_budget());
    }

    #[test]
    fn test_running_balances() {
        let mut l = ledger(50000);
        l.add_expense(Money::from_cents(20000), "Groceries");
        l.add_expense(Money::from_cents(40000), "Rent");
        l.add_expense(Money::zero(), "Free sample");

        let balances = l.running_balances();
        assert_eq!(balances.len(), 3);
        assert_eq!(balances[0].remaining, Money::from_cents(30000));
        assert_eq!(balances[1].remaining, Money::from_cents(-10000));
        assert_eq!(balances[2].remaining, Money::from_cents(-10000));
        assert_eq!(balances.last().unwrap().remaining, l.remaining_budget());
        assert_eq!(balances[1].description, "Rent");
    }

    #[test]
    fn test_blank_descriptions_are_stored_as_given() {
        let mut l = CategoryLedger::new(CategoryName::Savings, Money::from_cents(20000));
        l.add_expense(Money::from_cents(5000), "");
        l.add_expense(Money::from_cents(2500), "   ");

        assert_eq!(l.expenses()[0].description, "");
        assert_eq!(l.expenses()[1].description, "   ");

        let balances = l.running_balances();
        assert!(balances.iter().all(|b| b.description == NO_DESCRIPTION));
        assert_eq!(balances[0].remaining, Money::from_cents(15000));
        assert_eq!(balances[1].remaining, Money::from_cents(12500));
    }

    #[test]
    fn test_running_balances_are_recomputed() {
        let mut l = ledger(1000);
        l.add_expense(Money::from_cents(100), "a");
        let first = l.running_balances();
        l.add_expense(Money::from_cents(100), "b");
        let second = l.running_balances();

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
        assert_eq!(second[0], first[0]);
    }
}
