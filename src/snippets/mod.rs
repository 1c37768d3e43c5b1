pub mod arith;
pub mod fetch;
pub mod logged;

pub use arith::{add, sum_line};
pub use fetch::{fetch_data, fetch_json, FetchOutcome};
pub use logged::{Calculator, Invocation, Logged};
