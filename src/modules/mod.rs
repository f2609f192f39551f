pub mod accounts;
pub mod system;

pub use accounts::load_accounts;
