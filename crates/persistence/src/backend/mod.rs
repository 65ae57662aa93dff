// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-specific connection setup. Queries and mutations stay in
//! Diesel DSL under `queries/` and `mutations/`.

pub mod sqlite;
