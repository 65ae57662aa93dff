// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Writes.
//!
//! Every function here performs one atomic unit of work: either a single
//! statement or an explicit transaction.

pub mod assignments;
pub mod catalog;
pub mod holidays;
