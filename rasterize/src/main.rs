mod scene;

use std::{fs, io, process::ExitCode};

use error_derive::Error;
use image::{bmp, Texture};
use math::Color;
use settings::Settings;
use shapes::Shape;

#[derive(Debug, Error)]
enum Error {
    #[msg = "failed to encode bitmap"]
    Bmp(bmp::Error),

    #[msg = "failed to write output file"]
    IO(io::Error),
}

fn run(settings: &Settings) -> Result<(), Error> {
    let mut scene = scene::demo();
    for transform in &settings.transforms {
        log::debug!("Applying {transform:?}");
        transform.apply_to(&mut scene);
    }

    let mut texture: Texture<Color> = Texture::new(settings.width, settings.height);
    texture.clear(settings.background);
    scene.draw(&mut texture);

    let bytes = bmp::encode(&texture)?;
    fs::write(&settings.output, bytes)?;

    log::info!(
        "Wrote {}x{} image to {}",
        settings.width,
        settings.height,
        settings.output.display()
    );

    Ok(())
}

pub fn main() -> ExitCode {
    // Register a custom panic handler
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!(
            "rasterize has panicked. This is a bug. Please open an issue at {}, including the debug information below. Thanks!\n",
            env!("CARGO_PKG_REPOSITORY")
        );
        previous_hook(info);
    }));

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::init();

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            match std::error::Error::source(&error) {
                Some(source) => log::error!("{error}: {source}"),
                None => log::error!("{error}"),
            }
            ExitCode::FAILURE
        },
    }
}
