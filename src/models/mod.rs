pub mod calendar_date;
pub mod event;
pub mod event_kind;
pub mod grid;
pub mod layout;
pub mod segment;
pub mod span_info;

pub use calendar_date::CalendarDate;
pub use event::{CalendarEvent, Event, EventInfo};
pub use event_kind::EventKind;
pub use grid::{DateGrid, GridCell, ViewMode};
pub use layout::{LaneAssignment, Layout, RowHeights, RowMetrics};
pub use segment::Segment;
pub use span_info::{SpanInfo, SpanPhase};
