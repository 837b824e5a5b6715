pub mod action;
pub mod error;
pub mod reconcile;
pub mod reducer;
pub mod state;
pub mod store;
pub mod summary;

pub use action::SelectionAction;
pub use error::SelectionError;
pub use state::SelectionState;
pub use store::SelectionStore;
pub use summary::SelectionSummary;
