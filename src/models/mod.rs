pub mod attendance;
pub mod page_view;

pub use attendance::*;
pub use page_view::*;
