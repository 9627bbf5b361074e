#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod dom;
pub mod fetch;
pub mod formats;
pub mod index;
pub mod logging;
pub mod names;
pub mod page;
pub mod paginate;
pub mod scrape;
pub mod store;
