//! Core domain logic for nbreview
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Cell, CellType, Task)
//! - `services/` - The review stages and the pipeline that chains them

pub mod models;
pub mod services;
