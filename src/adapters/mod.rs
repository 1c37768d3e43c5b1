pub mod http;

pub use http::ReqwestSource;
