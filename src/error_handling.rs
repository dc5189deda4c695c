use std::fmt::Display;
use std::path::PathBuf;

pub trait ErrorType: Display + PartialEq {}

// Where in the grammar source an error was found. Errors about the
// file as a whole carry no line number.
#[derive(Debug, PartialEq, Clone)]
pub struct Location {
    pub file: PathBuf,
    pub line: Option<usize>,
}

impl Location {
    pub fn new(file: PathBuf, line: usize) -> Self {
        Location { file, line: Some(line) }
    }

    pub fn whole_file(file: PathBuf) -> Self {
        Location { file, line: None }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file.display(), line),
            None => write!(f, "{}", self.file.display()),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Error<T: ErrorType> {
    pub location: Location,
    pub error: T,
}

impl<T: ErrorType> Display for Error<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[31;49;1m[{}]\x1b[39;49;1m  {}\x1b[0m", self.location, self.error)
    }
}

pub type Errors<T> = Vec<Error<T>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_line_location() {
        let location = Location::new(PathBuf::from("grammar.txt"), 4);

        assert_eq!(location.to_string(), "grammar.txt:4");
    }

    #[test]
    fn render_whole_file_location() {
        let location = Location::whole_file(PathBuf::from("grammar.txt"));

        assert_eq!(location.to_string(), "grammar.txt");
    }
}
