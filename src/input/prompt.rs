//! Menus read from stdin before the window opens.

use crate::controllers::session::{SessionError, SessionSettings};
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::fractals::fractal_kind::FractalKind;
use crate::input::cli::args::SessionArgs;
use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalChoice {
    Quit,
    Kind(FractalKind),
}

#[derive(Debug)]
pub enum PromptError {
    Io(io::Error),
    Session(SessionError),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "prompt failed: {}", err),
            Self::Session(err) => write!(f, "{}", err),
        }
    }
}

impl Error for PromptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Session(err) => Some(err),
        }
    }
}

impl From<io::Error> for PromptError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<SessionError> for PromptError {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}

/// `0` quits. Any other number, or text that names no fractal, is Lambda.
#[must_use]
pub fn parse_fractal_choice(input: &str) -> FractalChoice {
    let input = input.trim();

    if input.parse::<i64>() == Ok(0) {
        return FractalChoice::Quit;
    }

    FractalChoice::Kind(input.parse().unwrap_or(FractalKind::Lambda))
}

/// Asks which fractal to draw. End of input counts as quitting.
pub fn prompt_fractal_kind<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<FractalChoice, PromptError> {
    let menu = FractalKind::ALL
        .iter()
        .map(|kind| format!("{}) {}", kind.selector(), kind.window_title()))
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(output, "{}", menu)?;
    write!(output, "Choose a fractal (0 to quit): ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(FractalChoice::Quit);
    }

    Ok(parse_fractal_choice(&line))
}

/// Asks for a colour scheme. Anything unrecognised gives the default.
pub fn prompt_colour_map<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<ColourMapKind, PromptError> {
    let menu = ColourMapKind::ALL
        .iter()
        .map(|kind| format!("{}) {}", kind.selector(), kind.display_name()))
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(output, "{}", menu)?;
    write!(output, "Choose a colour scheme: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line.parse().unwrap_or_default())
}

/// Fills in whatever the command line left out by asking the user.
///
/// Returns `None` when the user chooses to quit.
pub fn settings_from_prompt<R: BufRead, W: Write>(
    args: &SessionArgs,
    input: &mut R,
    output: &mut W,
) -> Result<Option<SessionSettings>, PromptError> {
    let kind = match args.kind {
        Some(kind) => kind,
        None => match prompt_fractal_kind(input, output)? {
            FractalChoice::Quit => return Ok(None),
            FractalChoice::Kind(kind) => kind,
        },
    };

    let palette = match args.palette {
        Some(palette) => palette,
        None => prompt_colour_map(input, output)?,
    };

    Ok(Some(args.settings_with(kind, palette)?))
}
