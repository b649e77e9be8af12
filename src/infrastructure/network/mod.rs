pub mod google;
pub mod http;
