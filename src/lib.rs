//! Freebies - Companies handing out freebies to developers
//!
//! A small persisted object model: companies give freebies to devs, devs can
//! pass a freebie on to another dev, and the links between companies and
//! devs are derived from who currently holds what.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
