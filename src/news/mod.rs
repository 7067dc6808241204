pub mod retriever;

pub use retriever::{NewsItem, NewsRetriever};
