pub mod consts;
pub mod errors;
pub mod handlers;
pub mod http;
pub mod models;
pub mod requests;
pub mod responses;
pub mod seed;
