pub mod job_board;
pub mod notification_feed;

pub use job_board::{BoardStats, JobBoard, NewJob};
pub use notification_feed::NotificationFeed;
