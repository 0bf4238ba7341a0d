//! Terminal rendering of each dashboard section. Renderers only read component state and write
//! text, they never touch the store.

pub mod archive;
pub mod calendar;
pub mod notes;
pub mod pomodoro;
pub mod quote;
pub mod tasks;

use ansi_term::Style;

fn heading(text: &str) -> String {
    Style::new().bold().underline().paint(text).to_string()
}

fn checkbox(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}

#[cfg(test)]
fn rendered(render: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut buffer = Vec::new();
    render(&mut buffer).expect("writing into a Vec doesn't fail");
    String::from_utf8(buffer).expect("renderers write utf-8")
}
