//! Expenses module - dated spending records.

mod expenses_model;

pub use expenses_model::{Expense, ExpenseUpdate, NewExpense};
