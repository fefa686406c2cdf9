// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

//! Source positions and diagnostics for Blackbird semantic analysis.
//!
//! The tree handed over by the parser only knows byte offsets. `line_col`
//! turns an offset into the `(line, column)` pair used in error messages,
//! and `report_error` formats diagnostics using the external crate `ariadne`.

mod api;
mod source_file;

pub use source_file::{line_col, range_to_span, ErrorTrait, LineCol};

pub use api::{print_compiler_errors, render_error, report_error};
