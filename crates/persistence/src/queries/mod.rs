// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! Rows are read into private Diesel structs and converted to domain types
//! before leaving this module. Stored text columns that no longer parse are
//! reported as `PersistenceError::CorruptValue`.

pub mod assignments;
pub mod catalog;
pub mod holidays;
