pub mod due;
pub mod filter;
pub mod reorder;
pub mod task_ops;

pub use due::*;
pub use filter::*;
pub use reorder::*;
pub use task_ops::*;
