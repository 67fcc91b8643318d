//! Chart constants and runtime configuration defaults

// Grid geometry
/// Side length of the generated chart (must stay odd for a center cell)
pub const GRID_SIZE: usize = 35;
/// Row/column index of the grid center cell
pub const CENTER: i32 = GRID_SIZE as i32 / 2;
/// Side length of the folded fundamental wedge
pub const WEDGE_SIZE: usize = GRID_SIZE / 2 + 1;
/// Largest folded coordinate kept inside the diamond boundary
pub const EDGE_RADIUS: usize = 16;

// Palette and knob bounds
/// Minimum colors per chart, background included
pub const MIN_COLOR_COUNT: usize = 3;
/// Maximum colors per chart, background included
pub const MAX_COLOR_COUNT: usize = 7;
/// Maximum accepted smoothing passes
pub const MAX_SMOOTHING_PASSES: usize = 8;
/// Maximum accepted line-bias strength
pub const MAX_LINE_BIAS: f64 = 10.0;

// Field term scaling
/// Field amplitude contributed per unit of line bias
pub const LINE_BIAS_SCALE: f64 = 0.04;
/// Amplitude of the tie-breaking jitter term
pub const JITTER_AMPLITUDE: f64 = 0.03;

// Rendering
/// Default chart cell size in pixels
pub const DEFAULT_CELL: u32 = 22;
/// Default gridline thickness in pixels
pub const DEFAULT_GRIDLINE: u32 = 1;
/// Maximum accepted cell size
pub const MAX_CELL: u32 = 64;
/// Maximum accepted gridline thickness
pub const MAX_GRIDLINE: u32 = 4;
/// RGB value of gridline pixels
pub const GRIDLINE_COLOR: [u8; 3] = [230, 230, 230];
/// Smallest preview cell size derived from the chart cell size
pub const MIN_PREVIEW_CELL: u32 = 6;

// Defaults for configurable parameters
/// Fixed seed default for reproducible generation
pub const DEFAULT_SEED: u64 = 0;
/// Design generated when none is requested
pub const DEFAULT_DESIGN: &str = "rings_spokes";
/// Palette used when none is requested
pub const DEFAULT_PALETTE: &str = "jewel_bazaar";

// Animation output
/// Delay between smoothing-pass GIF frames
pub const GIF_FRAME_DELAY_MS: u32 = 400;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
