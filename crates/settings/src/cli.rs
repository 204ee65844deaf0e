use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use math::Color;
use shapes::Transform;

use crate::{Settings, MAX_SIZE};

#[derive(clap::Parser, Debug)]
#[command(name = "rasterize", version, about = "Draws vector shapes into a bitmap", long_about = None)]
pub(crate) struct Arguments {
    /// File that the rendered bitmap is written to
    #[arg(value_hint = clap::ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Width of the image in pixels
    #[arg(long, value_parser = parse_size())]
    width: Option<usize>,

    /// Height of the image in pixels
    #[arg(long, value_parser = parse_size())]
    height: Option<usize>,

    /// Color of every pixel not covered by a shape, like "#ffffff"
    #[arg(long, value_parser = parse_color)]
    background: Option<Color>,

    /// Transform applied to the whole scene, may be repeated.
    /// One of "translate:X,Y", "scale:X,Y,FACTOR" or "rotate:X,Y,DEGREES"
    #[arg(short, long = "transform", value_parser = parse_transform)]
    transforms: Vec<Transform>,
}

impl Arguments {
    pub(crate) fn update_settings(self, settings: &mut Settings) {
        if let Some(output) = self.output {
            settings.output = output;
        }

        if let Some(width) = self.width {
            settings.width = width;
        }

        if let Some(height) = self.height {
            settings.height = height;
        }

        if let Some(background) = self.background {
            settings.background = background;
        }

        settings.transforms.extend(self.transforms);
    }
}

fn parse_size() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..=MAX_SIZE as u64)
}

fn parse_color(s: &str) -> Result<Color, String> {
    s.parse().map_err(|e: math::ParseColorError| format!("{e}"))
}

fn parse_transform(s: &str) -> Result<Transform, String> {
    s.parse()
        .map_err(|e: shapes::ParseTransformError| format!("{e}"))
}
