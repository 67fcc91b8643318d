//! Command-line interface for batch chart bundle generation

use clap::Parser;
use std::path::PathBuf;

use crate::chart::pipeline::{GenerationRequest, smoothing_sequence};
use crate::field::designs;
use crate::io::configuration::{
    DEFAULT_CELL, DEFAULT_DESIGN, DEFAULT_GRIDLINE, DEFAULT_PALETTE, DEFAULT_SEED,
    GIF_FRAME_DELAY_MS, MAX_CELL, MAX_COLOR_COUNT, MAX_GRIDLINE, MAX_LINE_BIAS,
    MAX_SMOOTHING_PASSES, MIN_COLOR_COUNT, MIN_PREVIEW_CELL,
};
use crate::io::error::{ChartError, Result, invalid_parameter};
use crate::io::export::{save_png, write_indices_csv, write_palette_csv};
use crate::io::progress::ProgressManager;
use crate::palette::{self, Palette};
use crate::render::animation::export_smoothing_gif;
use crate::render::chart::{RenderOptions, render_chart, render_preview};

#[derive(Parser)]
#[command(name = "kaleidostitch")]
#[command(
    author,
    version,
    about = "Generate symmetric cross-stitch charts from seeded field designs"
)]
/// Command-line arguments for the chart generation tool
///
/// Numeric knobs outside their valid range are clamped (with a note on
/// stderr); unknown design or palette names are hard errors.
pub struct Cli {
    /// Design to generate, or "all" for every registered design
    #[arg(short, long, default_value = DEFAULT_DESIGN)]
    pub design: String,

    /// Palette used for rendering
    #[arg(short, long, default_value = DEFAULT_PALETTE)]
    pub palette: String,

    /// Base random seed; batches use consecutive seeds from here
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Charts to generate per design
    #[arg(short = 'n', long, default_value_t = 1)]
    pub runs: usize,

    /// Colors per chart including background (3-7)
    #[arg(short, long, default_value_t = MAX_COLOR_COUNT)]
    pub colors: usize,

    /// Majority-filter smoothing passes
    #[arg(short = 'm', long, default_value_t = 0)]
    pub smoothing: usize,

    /// Ring/spoke banding strength (0-10)
    #[arg(short, long, default_value_t = 0.0)]
    pub line_bias: f64,

    /// Chart cell size in pixels
    #[arg(long, default_value_t = DEFAULT_CELL)]
    pub cell: u32,

    /// Gridline thickness in pixels (0 disables gridlines)
    #[arg(long, default_value_t = DEFAULT_GRIDLINE)]
    pub gridline: u32,

    /// Also export an animated GIF of the smoothing passes
    #[arg(short, long)]
    pub animate: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output directory
    #[arg(short, long, default_value = "out")]
    pub out: PathBuf,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch generation of chart bundles with progress tracking
pub struct ChartProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl ChartProcessor {
    /// Create a new processor from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every requested chart bundle
    ///
    /// # Errors
    ///
    /// Returns an error if the design or palette name is unknown, or if
    /// generation, rendering, or file export fails for any job.
    pub fn process(&mut self) -> Result<()> {
        let palette =
            palette::find(&self.cli.palette).ok_or_else(|| ChartError::UnknownPalette {
                name: self.cli.palette.clone(),
            })?;
        let design_names = self.collect_designs()?;
        self.warn_if_clamped();

        let mut jobs = Vec::with_capacity(design_names.len() * self.cli.runs);
        for name in design_names {
            for run in 0..self.cli.runs.max(1) {
                jobs.push((name, self.cli.seed.wrapping_add(run as u64)));
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(jobs.len());
        }

        for (design_name, seed) in jobs {
            if let Some(ref pm) = self.progress_manager {
                pm.start_job(&format!("{design_name} seed {seed}"));
            }
            self.process_job(palette, design_name, seed)?;
            if let Some(ref pm) = self.progress_manager {
                pm.complete_job();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_designs(&self) -> Result<Vec<&'static str>> {
        if self.cli.design == "all" {
            return Ok(designs::names());
        }
        designs::find(&self.cli.design)
            .map(|design| vec![design.name])
            .ok_or_else(|| ChartError::UnknownDesign {
                name: self.cli.design.clone(),
            })
    }

    /// Build the core request, clamping numeric knobs into range
    fn request_for(&self, design_name: &str, seed: u64) -> GenerationRequest {
        let line_bias = if self.cli.line_bias.is_finite() {
            self.cli.line_bias.clamp(0.0, MAX_LINE_BIAS)
        } else {
            0.0
        };
        GenerationRequest {
            design: design_name.to_string(),
            seed,
            color_count: self.cli.colors.clamp(MIN_COLOR_COUNT, MAX_COLOR_COUNT),
            smoothing_passes: self.cli.smoothing.min(MAX_SMOOTHING_PASSES),
            line_bias,
        }
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            cell: self.cli.cell.clamp(1, MAX_CELL),
            gridline: self.cli.gridline.min(MAX_GRIDLINE),
        }
    }

    // Allow print for user feedback when knobs are adjusted
    #[allow(clippy::print_stderr)]
    fn warn_if_clamped(&self) {
        if self.cli.quiet {
            return;
        }
        let clamped = !(MIN_COLOR_COUNT..=MAX_COLOR_COUNT).contains(&self.cli.colors)
            || self.cli.smoothing > MAX_SMOOTHING_PASSES
            || !(0.0..=MAX_LINE_BIAS).contains(&self.cli.line_bias)
            || self.cli.cell == 0
            || self.cli.cell > MAX_CELL
            || self.cli.gridline > MAX_GRIDLINE;
        if clamped {
            eprintln!("Note: out-of-range options were clamped to their nearest valid value");
        }
    }

    fn process_job(&self, palette: &Palette, design_name: &str, seed: u64) -> Result<()> {
        let request = self.request_for(design_name, seed);
        let stages = smoothing_sequence(&request)?;
        let grid = stages
            .last()
            .ok_or_else(|| invalid_parameter("smoothing", &request.smoothing_passes, &"empty pipeline"))?;

        let colors = palette.slice(request.color_count)?;
        let options = self.render_options();
        let chart_img = render_chart(grid, &colors, options)?;
        let preview_img = render_preview(grid, &colors, options.cell)?;

        let dir = self.cli.out.join(format!(
            "kaleido_{design_name}_{}_seed{seed}",
            self.cli.palette
        ));
        save_png(&chart_img, &dir.join("chart.png"))?;
        save_png(&preview_img, &dir.join("preview.png"))?;
        write_indices_csv(grid, &dir.join("indices.csv"))?;
        write_palette_csv(palette, request.color_count, &dir.join("palette.csv"))?;

        if self.cli.animate {
            let frame_cell = (options.cell / 2).max(MIN_PREVIEW_CELL);
            export_smoothing_gif(
                &stages,
                &colors,
                frame_cell,
                GIF_FRAME_DELAY_MS,
                &dir.join("smoothing.gif"),
            )?;
        }

        Ok(())
    }
}
