pub mod cli;
pub mod commands;
pub mod config;
pub mod entry;
pub mod error;
pub mod output;
pub mod resolver;
pub mod scanner;
pub mod stats;
pub mod stopwords;
pub mod tokenizer;

pub use error::{DiariumError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_NO_DATA: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;
