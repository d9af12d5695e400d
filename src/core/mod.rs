pub mod feasibility;
pub mod peaks;
pub mod search;
pub mod successor;

pub use feasibility::{flags_possible, place_flags};
pub use peaks::{is_peak, peak_indices};
pub use search::{FlagsSolution, ceil_sqrt, max_flags, max_flags_with_table, solve};
pub use successor::SuccessorTable;
