pub mod account;
pub mod config;
pub mod login;
pub mod task;

pub use account::{Account, AccountCredential};
pub use config::{AppConfig, GameConfig, InputConfig, RetryConfig};
pub use login::{DailyReward, LoginResponse, TaskActionResult};
pub use task::{Task, TaskCategory};
