//! Command-line front end: renders an icon from text given on the command line.

use anyhow::{bail, Context, Result};
use clap::Parser;
use iconlabel::{colors, font_cache, text::DEFAULT_FONT_CANDIDATES, Font, Label, Renderer, Rgb};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

/// Renders a 400x400 PNG icon with one to four lines of text.
///
/// Text is sanitized: accents are removed, non-ASCII characters dropped, letters uppercased and
/// each line cut to eight characters. Lines that end up empty are skipped.
#[derive(Parser, Debug)]
#[command(name = "iconlabel", version, about)]
struct Cli {
    /// Lines of text, top to bottom (at most four).
    #[arg(required_unless_present = "list_colors", num_args = 1..=4)]
    lines: Vec<String>,

    /// Color of each line, in order: a palette name or a #RRGGBB hex code. Lines without a color
    /// use the palette in order.
    #[arg(short, long = "color", value_name = "COLOR")]
    colors: Vec<String>,

    /// Font file to render with. Defaults to $ICONLABEL_FONT, then to common bold system fonts.
    #[arg(short, long, env = "ICONLABEL_FONT")]
    font: Option<PathBuf>,

    /// Where to write the PNG. Defaults to icon_<timestamp>.png in the working directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the computed layout instead of writing a file.
    #[arg(long)]
    dry_run: bool,

    /// Print the color palette and exit.
    #[arg(long)]
    list_colors: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn load_font(path: Option<&Path>) -> Result<Arc<Font>> {
    if let Some(path) = path {
        return font_cache::load(path)
            .with_context(|| format!("Failed to load font {}", path.display()));
    }

    let (font, path) = Font::discover(DEFAULT_FONT_CANDIDATES)
        .context("No font given and no default font found; pass --font")?;
    log::info!("using font {}", path.display());

    Ok(Arc::new(font))
}

fn parse_colors(values: &[String]) -> Result<Vec<Rgb>> {
    values
        .iter()
        .map(|value| {
            colors::parse(value).with_context(|| {
                format!("Invalid color {value:?}; use a palette name or #RRGGBB")
            })
        })
        .collect()
}

fn default_output() -> PathBuf {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());

    PathBuf::from(format!("icon_{secs}.png"))
}

fn print_palette() {
    for (name, color) in colors::PALETTE {
        println!("{:<8} {}", name, color.to_hex());
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.list_colors {
        print_palette();
        return Ok(());
    }

    if cli.colors.len() > cli.lines.len() {
        log::warn!(
            "{} color(s) given for {} line(s), extra colors are ignored",
            cli.colors.len(),
            cli.lines.len()
        );
    }
    let colors = parse_colors(&cli.colors)?;

    let label = match Label::from_raw(&cli.lines, &colors) {
        Ok(label) => label,
        Err(err) if err.kind() == iconlabel::ErrorKind::ContractViolation => {
            bail!("Nothing to render: every line is empty after sanitizing")
        }
        Err(err) => return Err(err.into()),
    };

    let font = load_font(cli.font.as_deref())?;
    let renderer = Renderer::new(font);

    if cli.dry_run {
        let plan = renderer.engine().plan(&label);
        println!(
            "scale {:.3}, gap {}, stack height {:.1}",
            plan.scale, plan.gap, plan.total_height
        );
        for (line, placement) in label.lines().iter().zip(&plan.placements) {
            println!(
                "{:<8} {:>3}px  center ({:.1}, {:.1})  ink {:.1}x{:.1}  {}",
                line.text(),
                placement.size,
                placement.center_x,
                placement.center_y,
                placement.width(),
                placement.height(),
                line.color().to_hex(),
            );
        }
        return Ok(());
    }

    let output = cli.output.unwrap_or_else(default_output);
    renderer
        .render(&label)
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("{}", output.display());
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
