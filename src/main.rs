use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dotfont::{
    config::{DEFAULT_CHARS_PER_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_SIZES},
    glyph::FontGlyphSource,
    reader::FontStore,
    FontGenerator, GeneratorConfig,
};
use dotfont_asset::{CharList, Loader};

#[derive(Debug, Parser)]
#[clap(name = "dotfont", version, about = "Generate dot matrix font data")]
struct Cli {
    #[clap(help = "Path to TTF font file")]
    ttf_path: PathBuf,

    #[clap(help = "File containing characters to convert")]
    chars_file: PathBuf,

    #[clap(long, num_args = 1.., default_values_t = DEFAULT_SIZES.to_vec(), help = "Font sizes to generate")]
    sizes: Vec<u32>,

    #[clap(long, default_value_t = DEFAULT_CHARS_PER_FILE, help = "Characters per blob and index file")]
    chars_per_file: usize,

    #[clap(short = 'o', long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    #[clap(long, help = "Don't write debug PNGs")]
    no_debug: bool,

    #[clap(long, help = "Read the generated files back and check every entry")]
    verify: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();

    let mut loader = Loader::new();
    let chars = CharList::load(&mut loader, &args.chars_file)?;
    let font = loader.load(&args.ttf_path)?;
    let source = FontGlyphSource::from_bytes(&font.bytes)
        .with_context(|| format!("Couldn't load font {}", args.ttf_path.display()))?;
    log::info!(
        "{} characters from {}, font has {} glyphs",
        chars.len(),
        args.chars_file.display(),
        source.glyph_count()
    );

    let config = GeneratorConfig::default()
        .with_sizes(&args.sizes)
        .with_chars_per_file(args.chars_per_file)
        .with_output_dir(&args.output_dir)
        .with_debug_images(!args.no_debug);
    let generator = FontGenerator::new(source, config);
    generator.generate(chars.chars())?;

    if args.verify {
        let store = FontStore::open(&args.output_dir)?;
        let checked = store.verify()?;
        log::info!("verified {checked} entries in {}", args.output_dir.display());
    }

    Ok(())
}
