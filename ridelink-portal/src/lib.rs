pub mod dashboard;
pub mod feedback;
pub mod lists;
pub mod nav;
pub mod portal;

pub use feedback::{Feedback, FeedbackChannel};
pub use nav::Navigator;
pub use portal::Portal;
