use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::{Item, parse_items};
use crate::error::TypeaheadError;

/// Reads the picker's item list from stdin or a file
pub struct ItemReader;

impl ItemReader {
    /// Read a JSON array of items from `path`, or stdin when `None`
    pub fn read_items(path: Option<&Path>) -> Result<Vec<Item>, TypeaheadError> {
        let json_str = match path {
            Some(file_path) => {
                let mut file = File::open(file_path)?;
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                contents
            }
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        Self::parse(&json_str)
    }

    fn parse(json_str: &str) -> Result<Vec<Item>, TypeaheadError> {
        parse_items(json_str).map_err(|e| TypeaheadError::InvalidItems(e.to_string()))
    }
}
