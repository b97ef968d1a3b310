pub mod bridge;
pub mod session;

pub use bridge::{PageProbe, PageSnapshot};
pub use session::{BrowserConfig, BrowserKind, new_session};
