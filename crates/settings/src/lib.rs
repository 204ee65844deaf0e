//! Responsible for turning command line arguments into [Settings]

mod cli;

use std::{ffi::OsString, path::PathBuf};

use clap::Parser;
use math::Color;
use shapes::Transform;

const DEFAULT_OUTPUT: &str = "out.bmp";
const DEFAULT_SIZE: usize = 256;

/// Largest accepted width or height of the image, in pixels
pub const MAX_SIZE: usize = 8192;

/// Holds all the configurable information for a single rendering run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Where the rendered image is written to
    pub output: PathBuf,

    pub width: usize,
    pub height: usize,
    pub background: Color,

    /// Applied to the scene in order, before it is drawn
    pub transforms: Vec<Transform>,
}

impl Settings {
    /// Read the settings from the arguments of the current process
    ///
    /// Exits the process with a usage message if the arguments are invalid.
    #[must_use]
    pub fn init() -> Self {
        Self::from_arguments(cli::Arguments::parse())
    }

    /// Read the settings from an explicit list of arguments, including the program name
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        cli::Arguments::try_parse_from(args).map(Self::from_arguments)
    }

    fn from_arguments(arguments: cli::Arguments) -> Self {
        let mut settings = Self::default();
        arguments.update_settings(&mut settings);
        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            background: Color::WHITE,
            transforms: vec![],
        }
    }
}
