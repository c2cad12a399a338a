mod layout;
mod session;

pub use layout::BoardLayout;
pub use session::{CancelReason, DragState, DropOutcome, Frame, PointerInput, Session};
