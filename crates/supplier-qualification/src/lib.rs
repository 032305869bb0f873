//! Supplier selection and scoring engine for the procurement back office.
//!
//! Criteria choices about a prospective supplier are folded into a [`SelectionState`], scored,
//! and classified into a [`Decision`]. The same rules rebuild that state from previously
//! persisted answers when an evaluation is reopened for editing.
//!
//! [`SelectionState`]: workflows::qualification::SelectionState
//! [`Decision`]: workflows::qualification::Decision

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
