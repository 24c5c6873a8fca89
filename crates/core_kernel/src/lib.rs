//! Core Kernel - Foundational types and utilities for the invoicing system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Precise decimal monetary rounding (half-up, 2 decimal places)
//! - Tax identifier format checks
//! - Wire date handling for the persisted dd/mm/yyyy format

pub mod money;
pub mod tax_id;
pub mod temporal;

pub use money::{parse_amount, round_half_up, VatRate};
pub use tax_id::{is_valid_fiscal_code, is_valid_vat_number, normalize_tax_id};
pub use temporal::{format_wire_date, parse_wire_date, TemporalError, WIRE_DATE_FORMAT};
