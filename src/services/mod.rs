//! Core services implementing the business logic.
//!
//! This module contains the main service implementations:
//! - `blockchain`: Blockchain client interfaces and implementations
//! - `monitor`: Block window computation and recent event lookup
//! - `report`: Sequential console report over the network registry

pub mod blockchain;
pub mod monitor;
pub mod report;
