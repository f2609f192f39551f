pub mod account;
pub mod batch;
pub mod game;
pub mod tasks;

pub use account::{process_account, run_account, AccountOutcome, AccountReport};
pub use batch::{run_batch, BatchSummary};
pub use game::{play, GameSession};
pub use tasks::{reconcile, ReconcileReport};
