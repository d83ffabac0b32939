pub mod ports;
pub mod progress_tracker;
pub mod service;
pub mod session;

pub use ports::{ImportBackend, RosterRefresher};
pub use progress_tracker::ProgressTracker;
pub use service::ImportService;
pub use session::{ImportSession, SessionClosed, SessionSnapshot};
