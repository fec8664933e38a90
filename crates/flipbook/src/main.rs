use clap::{Parser, Subcommand};
use flipbook::content::CATALOGUES;
use flipbook::error::ViewerError;
use flipbook::layout::{LayoutConfig, Viewport, DEFAULT_ASPECT_RATIO};
use flipbook::native::LocalPdf;
use flipbook::renderer::{DocumentRenderer, PageGeometry};
use futures::executor::block_on;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flipbook", about = "Inspect catalogues and flip-book layouts")]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the catalogues the site ships
    Catalogues,

    /// Compute the spread layout for a viewport
    Layout {
        /// Viewport size, e.g. 1600x900
        #[arg(long, value_parser = parse_viewport)]
        viewport: Viewport,

        /// Page width / height (defaults to 3:4)
        #[arg(long)]
        aspect: Option<f64>,
    },

    /// Measure a local PDF and show how the viewer would lay it out
    Probe {
        /// Input PDF file
        input: PathBuf,

        /// Viewport used for the layout
        #[arg(long, value_parser = parse_viewport, default_value = "1600x900")]
        viewport: Viewport,
    },
}

fn parse_viewport(s: &str) -> Result<Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Invalid viewport: {s}. Use WIDTHxHEIGHT, e.g. 1600x900"))?;
    let width: f64 = w.trim().parse().map_err(|e| format!("Invalid width {w}: {e}"))?;
    let height: f64 = h.trim().parse().map_err(|e| format!("Invalid height {h}: {e}"))?;
    Ok(Viewport::new(width, height))
}

#[derive(Serialize)]
struct LayoutReport {
    viewport: Viewport,
    aspect_ratio: f64,
    page_width: f64,
    page_height: f64,
    spread_width: f64,
    min_width: f64,
    min_height: f64,
}

#[derive(Serialize)]
struct ProbeReport {
    file: String,
    page_count: u32,
    first_page: Option<PageGeometry>,
    layout: LayoutReport,
}

fn layout_report(viewport: Viewport, aspect: f64) -> Result<LayoutReport, ViewerError> {
    let config = LayoutConfig::default();
    let dims = flipbook::spread_layout(viewport, aspect).ok_or(ViewerError::DegenerateViewport {
        width: viewport.width,
        height: viewport.height,
    })?;
    Ok(LayoutReport {
        viewport,
        aspect_ratio: dims.aspect_ratio(),
        page_width: dims.width(),
        page_height: dims.height(),
        spread_width: dims.spread_width(),
        min_width: config.min_width,
        min_height: config.min_height,
    })
}

fn probe(input: &PathBuf, viewport: Viewport) -> Result<ProbeReport, ViewerError> {
    // Reject the viewport before touching the file
    flipbook::spread_layout(viewport, DEFAULT_ASPECT_RATIO).ok_or(ViewerError::DegenerateViewport {
        width: viewport.width,
        height: viewport.height,
    })?;
    let mut pdf = LocalPdf::new();
    let path = input.to_string_lossy().into_owned();
    let page_count = block_on(pdf.open(&path))?;
    let first_page = match block_on(pdf.page_geometry(1)) {
        Ok(g) => Some(g),
        Err(e) => {
            log::warn!("page 1 could not be measured: {e}");
            None
        }
    };
    let aspect = first_page.map_or(DEFAULT_ASPECT_RATIO, |g| g.aspect_ratio());
    Ok(ProbeReport {
        file: path,
        page_count,
        first_page,
        layout: layout_report(viewport, aspect)?,
    })
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, ViewerError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }?;
    Ok(json)
}

fn run(cli: Cli) -> Result<String, ViewerError> {
    match cli.command {
        Command::Catalogues => to_json(&CATALOGUES, cli.pretty),
        Command::Layout { viewport, aspect } => {
            let report = layout_report(viewport, aspect.unwrap_or(DEFAULT_ASPECT_RATIO))?;
            to_json(&report, cli.pretty)
        }
        Command::Probe { input, viewport } => to_json(&probe(&input, viewport)?, cli.pretty),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn run_args(args: &[&str]) -> Result<String, ViewerError> {
        let argv = std::iter::once("flipbook").chain(args.iter().copied());
        run(Cli::parse_from(argv))
    }

    #[test]
    fn test_parse_viewport() {
        let vp = parse_viewport("1600x900").unwrap();
        assert_relative_eq!(vp.width, 1600.0);
        assert_relative_eq!(vp.height, 900.0);
        assert!(parse_viewport("1600").is_err());
        assert!(parse_viewport("widex900").is_err());
    }

    #[test]
    fn test_layout_command_reports_spread() {
        let json = run_args(&["layout", "--viewport", "1600x900"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_relative_eq!(value["page_height"].as_f64().unwrap(), 800.0, epsilon = 1e-9);
        assert_relative_eq!(value["spread_width"].as_f64().unwrap(), 1200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_layout_degenerate_viewport_is_an_error() {
        let err = run_args(&["layout", "--viewport", "30x50"]).unwrap_err();
        assert!(matches!(
            err,
            ViewerError::DegenerateViewport { width, height } if width == 30.0 && height == 50.0
        ));
        assert_eq!(err.to_string(), "viewport 30x50 leaves no room for a page");
    }

    #[test]
    fn test_degenerate_viewport_rejected_before_reading_pdf() {
        let err = run_args(&["probe", "/definitely/not/here.pdf", "--viewport", "10x10"]).unwrap_err();
        assert!(matches!(err, ViewerError::DegenerateViewport { .. }));
    }
}
