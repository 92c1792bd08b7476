//! Display and validate a character's traits.

use comfy_table::{ContentArrangement, Table};
use wwdice_core::Character;

/// Print the character's traits, then fail if a core attribute is missing.
pub fn run(character: &Character, json: bool) -> Result<(), String> {
    if json {
        println!("{}", character.to_json().map_err(|e| e.to_string())?);
    } else if character.is_empty() {
        println!("  No traits.");
    } else {
        let mut table = Table::new();
        table
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Trait", "Score"]);
        for (name, value) in character.iter() {
            table.add_row(vec![name.to_string(), value.to_string()]);
        }
        println!("{table}");
    }

    character.validate().map_err(|e| e.to_string())?;
    if !json {
        println!("  Character is valid.");
    }
    Ok(())
}
