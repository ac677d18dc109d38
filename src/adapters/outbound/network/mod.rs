/// Network adapters for backend API calls
mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;
