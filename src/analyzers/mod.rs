pub mod languages;
pub mod ner;
pub mod sentiment;
