use std::io::{self, Write};

use ansi_term::Colour;

use crate::calendar::{MonthView, WEEKDAY_HEADERS};

use super::heading;

pub fn render_calendar(view: &MonthView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", heading(&view.title()))?;
    writeln!(out)?;
    writeln!(out, "{}", WEEKDAY_HEADERS.join(" "))?;

    let cells = view.cells().collect::<Vec<_>>();
    for week in cells.chunks(7) {
        let row = week
            .iter()
            .map(|cell| match cell {
                Some(day) if *day == view.today() => {
                    Colour::Purple.reverse().paint(format!("{day:>3}")).to_string()
                }
                Some(day) => format!("{day:>3}"),
                None => "   ".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{row}")?;
    }
    Ok(())
}
