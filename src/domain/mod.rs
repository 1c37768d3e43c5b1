pub mod ports;

pub use ports::JsonSource;
