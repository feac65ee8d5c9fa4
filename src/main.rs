use clap::Parser;
use postcrop::{SearchConfig, config, load_image, render_variants, variants};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "postcrop")]
#[command(about = "Generate smart-cropped social post sizes from one image")]
#[command(long_about = "\
Generate smart-cropped social post sizes from one image

Decodes the input (png/jpg/jpeg/webp), finds the most information-rich
crop window for each preset aspect ratio, and writes three PNGs:

  square_1080x1080.png
  portrait_1080x1350.png
  story_1080x1920.png

The crop search scores candidate windows by intensity entropy and
contrast; tune it with --steps, --scales, and the term weights.")]
#[command(version)]
struct Cli {
    /// Source image
    input: PathBuf,

    /// Directory for the generated PNGs (created if missing)
    #[arg(short, long, default_value = "posts")]
    out_dir: PathBuf,

    /// Slide positions per axis in the crop search
    #[arg(long, default_value_t = config::DEFAULT_STEP_COUNT)]
    steps: u32,

    /// Window scales to try, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = config::DEFAULT_SCALE_FACTORS)]
    scales: Vec<f64>,

    /// Weight of the entropy term
    #[arg(long, default_value_t = config::DEFAULT_ENTROPY_WEIGHT)]
    entropy_weight: f64,

    /// Weight of the contrast term
    #[arg(long, default_value_t = config::DEFAULT_CONTRAST_WEIGHT)]
    contrast_weight: f64,

    /// Print the chosen crop rectangles as JSON
    #[arg(long)]
    report: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let search = SearchConfig {
        step_count: cli.steps,
        scale_factors: cli.scales,
        entropy_weight: cli.entropy_weight,
        contrast_weight: cli.contrast_weight,
        ..SearchConfig::default()
    };

    let image = load_image(&cli.input)?;
    let rendered = render_variants(&image, &variants::ALL, &search)?;

    std::fs::create_dir_all(&cli.out_dir)?;
    for variant in &rendered {
        let path = cli.out_dir.join(format!("{}.png", variant.label));
        std::fs::write(&path, &variant.png)?;
        println!(
            "{} ← crop {}x{}+{}+{}",
            path.display(),
            variant.crop.width,
            variant.crop.height,
            variant.crop.x,
            variant.crop.y
        );
    }

    if cli.report {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    }

    Ok(())
}
