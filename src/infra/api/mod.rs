pub mod http;

pub use http::{FileHttpClient, HttpClient, HttpResponse, MockHttpClient, ReqwestHttpClient};
