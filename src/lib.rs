//! In-memory bank ledger: a registry of PIN-protected consumer and commercial
//! accounts, with a CSV batch front end.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;
