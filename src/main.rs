use anyhow::Result;
use capture_resolution::{negotiate_target_size, EnvelopePreset, ResolutionConfig, Size};
use clap::Parser;

/// Compute the encoder target size for a capture source resolution:
/// - fits the source inside a (min, max) bounding envelope
/// - preserves aspect ratio, aligns both axes down to even values
#[derive(Parser, Debug)]
#[command(name = "capres")]
#[command(about = "Compute the encoder target size for a capture source resolution")]
struct Args {
    /// Source width in pixels
    width: u32,

    /// Source height in pixels
    height: u32,

    /// Bound for the smaller output dimension
    #[arg(long, default_value_t = 1080,
          help = "Largest allowed value of the smaller output dimension")]
    min: u32,

    /// Bound for the larger output dimension
    #[arg(long, default_value_t = 1920,
          help = "Largest allowed value of the larger output dimension")]
    max: u32,

    /// Named envelope preset (overrides --min/--max)
    #[arg(short, long, value_enum)]
    preset: Option<EnvelopePreset>,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let config = ResolutionConfig::new(args.min, args.max, args.preset);
    let source = Size::new(args.width, args.height);
    let target = negotiate_target_size(&config, source)?;

    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "source": { "width": source.w, "height": source.h },
                "target": { "width": target.w, "height": target.h },
            })
        );
    } else {
        println!("{} -> {}", source, target);
    }

    Ok(())
}
