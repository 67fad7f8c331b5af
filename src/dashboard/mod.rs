pub mod presenter;
pub mod session;
pub mod view;

pub use presenter::Presenter;
pub use session::{DashboardSession, SessionEvent, SessionState};
pub use view::{Bar, BarPanel, DailyPoint, DashboardView, LinePanel, Metric};
