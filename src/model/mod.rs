//! Application Model
//!
//! Plain, cloneable state records:
//!
//! - **ListState**: page, sort and filters of the listing (owned by the controller)
//! - **NavigationModel**: selected table row
//! - **UiModel**: filter bar drafts, input mode, active dialog
//!
//! No I/O lives here.

pub mod list;
pub mod navigation;
pub mod types;
pub mod ui;

pub use list::{ListState, Sort};
pub use navigation::NavigationModel;
pub use types::*;
pub use ui::UiModel;
