//! Civiplan Core - Domain logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `Project`, `Department`, `Resource`, `ResourceAllocation`, `Conflict`
//! - **Use cases** - `OverviewUseCase`, `TimelineUseCase`, `UtilizationUseCase`
//! - **Port definitions** - Traits for adapters: `ProjectDirectory`, `ResourceDirectory`
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure business logic with no external dependencies.
//! Ports define trait interfaces that adapter crates implement.
//! Use cases orchestrate domain entities through port interfaces.
//!
//! Conflict detection itself lives in the `civiplan-conflict` crate; this
//! crate only defines the derived `Conflict` type it produces.

pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;
