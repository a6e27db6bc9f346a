use std::io::{self, BufRead};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Command;
use crate::geometry::Dir;

/// Anything that can hand the game its next command.
pub trait CommandSource {
    fn next_command(&mut self) -> io::Result<Command>;
}

/// Blocking keyboard reader. Expects the terminal to already be in raw mode.
#[derive(Debug, Default)]
pub struct KeySource;

impl CommandSource for KeySource {
    fn next_command(&mut self) -> io::Result<Command> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(command_for_key(key));
                }
                // Let the caller redraw at the new size.
                Event::Resize(..) => return Ok(Command::None),
                _ => {}
            }
        }
    }
}

pub fn command_for_key(key: KeyEvent) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }
    match key.code {
        KeyCode::Up => Command::Move(Dir::Up),
        KeyCode::Down => Command::Move(Dir::Down),
        KeyCode::Left => Command::Move(Dir::Left),
        KeyCode::Right => Command::Move(Dir::Right),
        KeyCode::Esc => Command::Quit,
        KeyCode::Char(c) => command_for_char(c),
        _ => Command::None,
    }
}

pub fn command_for_char(c: char) -> Command {
    match c.to_ascii_lowercase() {
        'w' | 'k' => Command::Move(Dir::Up),
        's' | 'j' => Command::Move(Dir::Down),
        'a' | 'h' => Command::Move(Dir::Left),
        'd' | 'l' => Command::Move(Dir::Right),
        'r' => Command::Restart,
        'q' => Command::Quit,
        _ => Command::None,
    }
}

/// One command per line; the first non-blank character decides. End of input quits.
pub struct LineSource<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead> CommandSource for LineSource<R> {
    fn next_command(&mut self) -> io::Result<Command> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(Command::Quit);
        }
        Ok(self
            .line
            .trim_start()
            .chars()
            .next()
            .map_or(Command::None, command_for_char))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn arrows_letters_and_vi_keys_agree() {
        let up = [KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('k'), KeyCode::Char('W')];
        for code in up {
            assert_eq!(
                command_for_key(KeyEvent::new(code, KeyModifiers::NONE)),
                Command::Move(Dir::Up)
            );
        }
        assert_eq!(command_for_char('l'), Command::Move(Dir::Right));
        assert_eq!(command_for_char('a'), Command::Move(Dir::Left));
        assert_eq!(command_for_char('j'), Command::Move(Dir::Down));
    }

    #[test]
    fn control_keys() {
        assert_eq!(command_for_char('r'), Command::Restart);
        assert_eq!(command_for_char('q'), Command::Quit);
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Command::Quit
        );
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Command::Quit
        );
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            Command::None
        );
        assert_eq!(command_for_char('x'), Command::None);
    }

    #[test]
    fn line_source_reads_until_eof() {
        let mut source = LineSource::new(Cursor::new("d\n  s please\n\nr\n"));
        assert_eq!(source.next_command().unwrap(), Command::Move(Dir::Right));
        assert_eq!(source.next_command().unwrap(), Command::Move(Dir::Down));
        assert_eq!(source.next_command().unwrap(), Command::None);
        assert_eq!(source.next_command().unwrap(), Command::Restart);
        assert_eq!(source.next_command().unwrap(), Command::Quit);
    }
}
