pub mod session;

pub use session::{Session, SessionProvider, use_session};
