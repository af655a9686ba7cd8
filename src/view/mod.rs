//! Derived view computer.
//!
//! Pure filtering and pagination over the payload of a
//! [`ResourceEngine`](crate::resource::ResourceEngine). Nothing here touches
//! the network or holds state of its own, apart from the memo in
//! [`ViewCache`].

mod cache;
mod compute;
mod normalize;
mod params;
mod spec;

pub use cache::ViewCache;
pub use compute::{compute_view, PaginatedView};
pub use normalize::{normalize_text, NormalizedQuery};
pub use params::{FilterIntent, FilterParams, FilterReducer, DEFAULT_PAGE_SIZE};
pub use spec::{FieldFn, ViewSpec};
