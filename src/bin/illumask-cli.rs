#![warn(unused_extern_crates)]
use anyhow::{Context, Result};
use clap::Parser as Clap_parser;
use flexi_logger::Logger;
use illumask::{config, image_data::Image, pipeline::build_mask, selection};
use log::info;
use std::time::Instant;

#[derive(Clap_parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// image to build the mask for
    #[arg(name = "input path", value_name = "input_path")]
    input_path: String,

    #[arg(
        short,
        name = "output path",
        default_value = "mask.png",
        value_name = "output_path"
    )]
    output_path: String,

    #[arg(
        short,
        name = "config path",
        default_value = "maskconfig.toml",
        value_name = "config_path"
    )]
    config_path: String,

    #[arg(long, default_value = "info")]
    log_level: String,
}

fn setup_logging(base_level: &str) -> Result<flexi_logger::LoggerHandle> {
    let handle = Logger::try_with_str(base_level)
        .context("invalid log level")?
        .log_to_stderr()
        .start()
        .context("logger initialization failed")?;
    Ok(handle)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = setup_logging(&args.log_level)?;

    let decode = Instant::now();
    let buffer = image::open(&args.input_path)
        .with_context(|| format!("failed to open image '{}'", args.input_path))?
        .into_rgb32f();
    let image = Image::from_rgb32f(&buffer);
    info!("decode file: {:.2?}", decode.elapsed());

    let config = config::load_config(&args.config_path)?;

    let mask = build_mask(&image, &config);
    let masked = selection::masked_pixels(&image, &mask).len();
    let unmasked = selection::unmasked_pixels(&image, &mask).len();
    println!("masked pixels: {}", masked);
    println!("unmasked pixels: {}", unmasked);

    mask.to_luma_image()
        .save(&args.output_path)
        .with_context(|| format!("failed to write mask '{}'", args.output_path))?;
    info!("total time: {:.2?}", decode.elapsed());
    Ok(())
}
