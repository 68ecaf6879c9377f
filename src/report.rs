//! Console output.

use std::io::{self, Write};
use crate::response::GamesList;

/// Printed when the program starts.
pub const BANNER: &str = "We started! Please, wait...";
/// Printed before the list of games.
pub const GAMES_HEADING: &str = "Found games:";

/// Writes the heading followed by one summary line per game, in list order.
pub fn write_report<W>(writer: &mut W, games: &GamesList) -> io::Result<()>
where
    W: Write,
{
    writeln!(writer, "{GAMES_HEADING}")?;
    
    for (_context_key, game) in games.iter() {
        writeln!(writer, "{game}")?;
    }
    
    Ok(())
}
