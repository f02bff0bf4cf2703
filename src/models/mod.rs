mod product;
mod setting;
mod task;

pub use product::{NewProduct, Product};
pub use setting::{NewSetting, Setting};
pub use task::{NewTask, Task};

/// Priority given to products and tasks created without one.
pub const DEFAULT_PRIORITY: &str = "Medium";

/// Status every product and task starts in.
pub const DEFAULT_STATUS: &str = "Pending";

/// Status counted as done by the reports endpoint. Matched exactly, case-sensitive.
pub const COMPLETED_STATUS: &str = "Completed";
