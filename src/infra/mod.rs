pub mod api;
pub mod logging;
pub mod parser;
pub mod storage;
