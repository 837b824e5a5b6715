pub mod bulk;
pub mod feed;
pub mod models;
pub mod parser;
pub mod query;
pub mod writer;
