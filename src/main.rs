//! pwn - print a positive-white-negative color ramp or write its legend.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pwn_colormap::args::{resolve, Arg};
use pwn_colormap::{color, legend, ColorRamp, HtmlSurface, Outputs};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "pwn")]
#[command(about = "Positive-white-negative color ramps", long_about = None)]
struct Args {
    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// How to print the ramp
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// [TARGET] LOW HIGH [OPTION [VALUE]]...  where OPTION is one of
    /// level, label, colorP, colorN, colorW, log, full, rev, off.
    /// Colors are written r,g,b.  TARGET is the HTML legend to write.
    #[arg(required = true, allow_negative_numbers = true,
          allow_hyphen_values = true, trailing_var_arg = true,
          value_name = "TOKENS")]
    tokens: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One "r g b" line per color
    Text,
    /// One "r,g,b" line per color
    Csv,
    /// One CSS hex color per line
    Css,
}

fn print_ramp(out: &mut impl Write, ramp: &ColorRamp, format: Format)
              -> io::Result<()> {
    for &c in ramp {
        match format {
            Format::Text => writeln!(out, "{:.4} {:.4} {:.4}", c.r, c.g, c.b)?,
            Format::Csv => writeln!(out, "{},{},{}", c.r, c.g, c.b)?,
            Format::Css => writeln!(out, "{}", color::css_string(c))?,
        }
    }
    out.flush()
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided; RUST_LOG overrides
    // the default debug level.
    if let Some(log_path) = &args.log {
        let file = File::create(log_path)
            .with_context(|| format!("cannot open log file {}",
                                     log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::try_from_default_env()
                             .unwrap_or_else(|_| EnvFilter::new("debug")))
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting pwn");
    }

    let tokens: Vec<Arg> = args.tokens.iter().cloned().map(Arg::Word).collect();
    let invocation = resolve(&tokens)?;
    let config = invocation.config()?;
    for w in &config.warnings {
        eprintln!("warning: {w}");
    }

    match &invocation.target {
        Some(path) if !config.off => {
            let mut surface = HtmlSurface::new();
            legend::apply(Some(&mut surface), &config, Outputs::Legend)?;
            let mut fh = BufWriter::new(File::create(path)
                .with_context(|| format!("cannot create {path}"))?);
            surface.render(&mut fh)?;
            fh.flush()?;
            tracing::info!(path = %path, "legend written");
        }
        _ => {
            let outcome = legend::apply(None::<&mut HtmlSurface>,
                                        &pwn_colormap::Config { off: true,
                                                                ..config },
                                        Outputs::Ramp)?;
            if let Some(ramp) = outcome.ramp {
                print_ramp(&mut io::stdout().lock(), &ramp, args.format)?;
            }
        }
    }
    Ok(())
}
