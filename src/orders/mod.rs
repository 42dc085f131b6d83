//! Order Collection View.
//!
//! Loads orders together with the user, product and technician directories
//! and resolves each order's foreign references to display names. The view
//! owns its directories exclusively and replaces them wholesale on every
//! load. A lifetime flag guards every state update so results that arrive
//! after [`OrderCollectionView::unmount`] are discarded.

mod row;
mod view;

pub use row::{OrderRow, UNASSIGNED_LABEL, format_rupiah};
pub use view::{
    LoadState, OrderCollectionView, OrderSnapshot, ViewError, ViewLifetime, ViewResult,
};

#[cfg(test)]
mod tests;
