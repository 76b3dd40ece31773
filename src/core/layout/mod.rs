pub mod clipper;
pub mod grid;
pub mod lanes;
pub mod row_height;
pub mod span;

pub use clipper::{clip_event, clip_events};
pub use grid::build_grid;
pub use lanes::{assign_lanes, max_overlap_depth};
pub use row_height::resolve_row_heights;
pub use span::{span_dates, span_info, total_days};
