//! Sparse row accumulators
//!
//! Every numeric kernel in this crate processes one output row at a time
//! through a dense work array indexed by column. Instead of zeroing that
//! array for each row, the touched columns are threaded into an implicit
//! linked list (see [`list::ColumnList`]) and only those slots are reset
//! when the row is drained. Resetting therefore costs O(touched columns)
//! rather than O(n_cols).
//!
//! - [`ColumnList`]: presence only, used by the symbolic multiply pass
//! - [`SparseAccumulator`]: one value per column (multiply, coalesce)
//! - [`PairAccumulator`]: two values per column sharing one list (binop)
//!
//! Drain order is the reverse of first touch. Accumulators never sort.

pub mod list;
pub mod pair;
pub mod sparse;

pub use list::ColumnList;
pub use pair::{PairAccumulator, PairDrain};
pub use sparse::{Drain, SparseAccumulator};
