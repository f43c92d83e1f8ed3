/*
 * SPDX-FileCopyrightText: 2025 The linalg developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

mod display;
pub mod element;
mod error;
mod matrix;
mod ops;
mod storage;

pub use error::MatrixError;
pub use matrix::Matrix;

pub mod prelude {
    pub use crate::element::{CastFrom, CastInto, Promote};
    pub use crate::error::MatrixError;
    pub use crate::matrix::Matrix;
}
