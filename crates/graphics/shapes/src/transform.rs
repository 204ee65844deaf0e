//! Transformations as values, so they can be parsed and applied later

use std::{num::ParseIntError, str::FromStr};

use error_derive::Error;

use crate::{Point, Shape};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    Translate(Point),
    Scale { origin: Point, factor: i32 },
    Rotate { origin: Point, degrees: i32 },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseTransformError {
    #[msg = "expected <operation>:<arguments>"]
    MissingArguments,

    #[msg = "unknown operation, expected one of translate, scale or rotate"]
    UnknownOperation,

    #[msg = "wrong number of arguments"]
    WrongArgumentCount,

    #[msg = "invalid integer argument"]
    InvalidNumber(ParseIntError),
}

impl Transform {
    pub fn apply_to<S: Shape + ?Sized>(&self, shape: &mut S) {
        match *self {
            Self::Translate(offset) => shape.translate(offset),
            Self::Scale { origin, factor } => shape.scale(origin, factor),
            Self::Rotate { origin, degrees } => shape.rotate(origin, degrees),
        }
    }
}

impl FromStr for Transform {
    type Err = ParseTransformError;

    /// Parses `translate:X,Y`, `scale:X,Y,FACTOR` and `rotate:X,Y,DEGREES`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (operation, arguments) = s
            .split_once(':')
            .ok_or(ParseTransformError::MissingArguments)?;

        let operation = operation.trim();
        if !matches!(operation, "translate" | "scale" | "rotate") {
            return Err(ParseTransformError::UnknownOperation);
        }

        let arguments = arguments
            .split(',')
            .map(|argument| argument.trim().parse::<i32>())
            .collect::<Result<Vec<i32>, _>>()?;

        let transform = match (operation, arguments.as_slice()) {
            ("translate", &[x, y]) => Self::Translate(Point::new(x, y)),
            ("scale", &[x, y, factor]) => Self::Scale {
                origin: Point::new(x, y),
                factor,
            },
            ("rotate", &[x, y, degrees]) => Self::Rotate {
                origin: Point::new(x, y),
                degrees,
            },
            _ => return Err(ParseTransformError::WrongArgumentCount),
        };

        Ok(transform)
    }
}
