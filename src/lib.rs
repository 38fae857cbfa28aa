pub mod augment;
pub mod cli;
pub mod config;
pub mod table;

pub use augment::{
    insert_misspellings, insert_typo, remove_punctuation, Augmenter, Operation,
};
pub use config::Config;
pub use table::MisspellingTable;
