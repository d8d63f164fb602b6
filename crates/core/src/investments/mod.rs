//! Investments module - capital put into the farm.

mod investments_model;

pub use investments_model::{Investment, InvestmentUpdate, NewInvestment};
