//! Fixed-size linear algebra kernel for two-state, single-input systems.
//!
//! Three value types cover everything the Riccati solver and the simulator
//! need:
//!
//! ```text
//!  RowVector2     ColumnVector2     Matrix2x2
//!   _    _           _  _           _        _
//!  | x  y |         | x  |         | a11  a12 |
//!                   | y  |         | a21  a22 |
//! ```
//!
//! Row and column vectors are distinct types. They only meet through the
//! products defined on them (dot, outer, matrix-vector), never through an
//! implicit conversion. All types are `Copy`, so binary operators never
//! alias storage; the compound-assignment operators mutate only the
//! left-hand binding.
//!
//! Component access comes in two flavours:
//! - `get`/`set` return [`CoreError::IndexOob`](ss_core::CoreError) for an
//!   out-of-range index
//! - `Index`/`IndexMut` panic on an out-of-range index, like slices do
//!
//! Neither path clamps.

mod matrix;
mod vector;

pub use matrix::Matrix2x2;
pub use vector::{ColumnVector2, RowVector2};
