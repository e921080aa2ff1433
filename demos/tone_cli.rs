//! Command-line interface for skin_tone
//!
//! Runs the quality checks and tone analysis on one photo and prints the
//! result as JSON, optionally with a matching palette and looks.

use serde_json::json;
use skin_tone::{
    color::ColorConverter, load_image, AnalysisConfig, AnalysisError, FaceBox, LookCatalog,
    PaletteCatalog, QualityReport, ToneAnalyzer, ToneResult,
};
use std::{env, path::PathBuf, process};
use tracing::Level;

#[derive(Default)]
struct Options {
    image_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    palettes_path: Option<PathBuf>,
    looks_path: Option<PathBuf>,
    face_box: Option<FaceBox>,
    verbose: bool,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);

    let max_level = if options.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run(&options) {
        eprintln!("Analysis failed: {}", error);
        if error.is_recoverable() {
            eprintln!("Suggestion: {}", error.user_message());
        }
        process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), AnalysisError> {
    let config = match &options.config_path {
        Some(path) => AnalysisConfig::from_json_file(path)?,
        None => AnalysisConfig::default(),
    };
    let analyzer = ToneAnalyzer::with_config(config)?;

    let image_path = options
        .image_path
        .as_ref()
        .ok_or_else(|| AnalysisError::invalid_parameter("image_path", "<missing>"))?;
    let image = load_image(image_path)?;

    let quality = analyzer.quality_report(&image);
    let tone = analyzer.analyze_image_with_box(&image, options.face_box);

    let mut output = json!({ "quality": quality, "tone": tone });

    if let Some(path) = &options.palettes_path {
        let palettes = PaletteCatalog::from_json_file(path)?;
        output["palette"] = json!(palettes.select(tone.undertone, f64::from(tone.depth)));
    }
    if let Some(path) = &options.looks_path {
        let looks = LookCatalog::from_json_file(path)?;
        output["looks"] = json!(looks.matching(tone.undertone, tone.depth_label));
    }

    let pretty = serde_json::to_string_pretty(&output)
        .map_err(|e| AnalysisError::ProcessingError(format!("Failed to serialize result: {}", e)))?;
    println!("{}", pretty);

    print_summary(&quality, &tone);
    Ok(())
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options::default();
    let program = args.first().map(String::as_str).unwrap_or("tone_cli");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--face" | "--config" | "--palettes" | "--looks" => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("Error: {} requires a value", args[i]);
                    process::exit(1);
                };
                match args[i].as_str() {
                    "--face" => options.face_box = Some(parse_face_box(value)),
                    "--config" => options.config_path = Some(PathBuf::from(value)),
                    "--palettes" => options.palettes_path = Some(PathBuf::from(value)),
                    _ => options.looks_path = Some(PathBuf::from(value)),
                }
                i += 1;
            }
            "--verbose" | "-v" => options.verbose = true,
            "--help" | "-h" => {
                print_help(program);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if options.image_path.is_some() {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
                options.image_path = Some(PathBuf::from(arg));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    if options.image_path.is_none() {
        print_help(program);
        process::exit(1);
    }
    options
}

fn parse_face_box(value: &str) -> FaceBox {
    value.parse().unwrap_or_else(|_| {
        eprintln!("Error: --face expects x,y,width,height (got '{}')", value);
        process::exit(1);
    })
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Estimate skin depth and undertone from a face photo.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --face X,Y,W,H     Face bounding box in image pixels (default: centered region)");
    eprintln!("  --config FILE      Analysis configuration JSON");
    eprintln!("  --palettes FILE    Palette catalog JSON; prints the matching palette");
    eprintln!("  --looks FILE       Look catalog JSON; prints matching looks");
    eprintln!("  --verbose, -v      Log pipeline details to stderr");
    eprintln!("  --help, -h         Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} selfie.jpg", program_name);
    eprintln!("  {} --face 120,80,260,340 --palettes data/palettes.json selfie.jpg", program_name);
}

fn print_summary(quality: &QualityReport, tone: &ToneResult) {
    let converter = ColorConverter::new();
    let lch = converter.lab_to_lch(tone.lab_mean);

    eprintln!();
    eprintln!("Tone Analysis Summary:");
    eprintln!("  Depth: {} ({})", tone.depth, tone.depth_label);
    eprintln!("  Undertone: {} ({}% confidence)", tone.undertone, tone.confidence);
    eprintln!("  Mean Skin Color: {}", converter.lab_to_hex(tone.lab_mean));
    eprintln!(
        "  Lab Values: L*={:.1}, a*={:.1}, b*={:.1}",
        tone.lab_mean.l, tone.lab_mean.a, tone.lab_mean.b
    );
    eprintln!(
        "  LCh Values: L*={:.1}, C*={:.1}, h={:.1}",
        lch.l,
        lch.chroma,
        lch.hue.into_positive_degrees()
    );
    eprintln!("  Samples: {} ({} after outlier removal)", tone.sample_count, tone.retained_count);

    for check in &quality.checks {
        eprintln!("  [{:?}] {}: {}", check.status, check.label, check.message);
    }
}
