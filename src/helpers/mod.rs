pub mod config_helper;
pub mod url_normalizer;
