pub mod session;
pub mod vault;

pub use session::{Generation, SessionState, Stamped};
pub use vault::{SearchHandle, Settled, VaultSearch, fetch_results, fetch_total};
