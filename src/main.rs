use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::warn;

use shield_assets::{AssetGenerator, AssetKind, FontSearch, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(
    name = "shield-assets",
    about = "Render Chrome Web Store screenshots and promotional tiles for PII Prompt Shield",
    version
)]
struct Args {
    /// Extension checkout the default paths are relative to
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Output directory (default: <root>/store-assets)
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Branding icon (default: <root>/icons/icon-128.png)
    #[arg(long)]
    icon: Option<PathBuf>,
    /// Extra directory to search for fonts, before the system ones (repeatable)
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,
    /// Ignore the platform font directories; only --font-dir is searched
    #[arg(long)]
    no_system_fonts: bool,
    /// Only render these assets (repeatable)
    #[arg(long, value_enum)]
    only: Vec<AssetKind>,
    /// Also write manifest.json with a SHA-256 per image
    #[arg(long)]
    digest_manifest: bool,
    /// List the assets and exit
    #[arg(long)]
    list: bool,
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn config_from(args: &Args) -> GeneratorConfig {
    let mut config = GeneratorConfig::for_root(&args.root);
    if let Some(out_dir) = &args.out_dir {
        config.out_dir = out_dir.clone();
    }
    if let Some(icon) = &args.icon {
        config.icon_path = icon.clone();
    }
    config.fonts = if args.no_system_fonts {
        FontSearch::user_dirs_only(args.font_dirs.iter().cloned())
    } else {
        FontSearch::default().prepend_dirs(args.font_dirs.iter().cloned())
    };
    config.only = args.only.clone();
    config.write_digest_manifest = args.digest_manifest;
    config
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.list {
        for kind in AssetKind::ALL {
            let size = kind.size();
            println!("{:<13} {:>4}x{:<4} {}", kind.name(), size.width, size.height, kind.relative_path());
        }
        return Ok(());
    }

    let config = config_from(&args);
    let generator = AssetGenerator::new(config).context("failed to set up asset generator")?;
    let report = generator.generate().context("failed to generate store assets")?;
    if report.used_fallback_font && !(args.no_system_fonts && args.font_dirs.is_empty()) {
        warn!("rendered with the built-in bitmap font; install DejaVu Sans or pass --font-dir for nicer text");
    }
    println!("Generated store assets in {}", report.out_dir.display());
    Ok(())
}
