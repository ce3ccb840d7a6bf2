// HTTP module entry point
// Response builders, CORS injection, content types, and conditional requests.

pub mod cache;
pub mod cors;
pub mod mime;
pub mod response;

pub use response::{
    build_304_response, build_404_response, build_405_response, build_500_response,
    build_file_response, build_html_response, build_options_response, build_redirect_response,
};
