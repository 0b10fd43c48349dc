//! Sequential smoke test for the todo HTTP API.
//!
//! Drives the CRUD surface of a running server through seven fixed steps
//! and prints a human-readable pass/fail report. The procedure is
//! parameterized over the transport and the output sink, so tests run it
//! against scripted responses while the binary wires up real HTTP and
//! stdout.

pub mod run;

pub use run::run_checks;
