use std::io::{self, Write};

use ansi_term::Style;

use crate::quote::{QuoteState, FALLBACK_MESSAGE};

pub fn render_quote(state: &QuoteState, out: &mut impl Write) -> io::Result<()> {
    match state {
        QuoteState::Loading => writeln!(out, "Loading quote...")?,
        QuoteState::Error => {
            writeln!(out, "{FALLBACK_MESSAGE}")?;
            writeln!(out, "Run `quote` to try again.")?;
        }
        QuoteState::Loaded(quote) => {
            writeln!(
                out,
                "{}",
                Style::new().italic().paint(format!("\"{}\"", quote.content))
            )?;
            writeln!(out, "  - {}", quote.author)?;
            writeln!(out, "Run `quote` for the next one.")?;
        }
    }
    writeln!(out)
}
