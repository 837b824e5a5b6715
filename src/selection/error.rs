use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("selection store was used before it was mounted with the visible issue ids")]
    NotMounted,
}
