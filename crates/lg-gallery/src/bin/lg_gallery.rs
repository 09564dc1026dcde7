use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use image::{GrayImage, RgbaImage};
use lg_core::{Gray, GridView, Point2f, to_f32};
use lg_filter::kernels::{BOX3, LAPLACE4, SOBEL_X, SOBEL_Y, box_taps};
use lg_filter::{Kernel2D, mask_filter, mean3};
use lg_host::{FramePipeline, FrameSummary, LumaFrame, PipelineConfig, overlay_contours};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "lg_gallery")]
#[command(about = "Run lumagrid filters on external fixtures")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(name = "mean3")]
    Mean3(Mean3Args),
    #[command(name = "mask")]
    Mask(MaskArgs),
    #[command(name = "edges")]
    Edges(EdgesArgs),
    #[command(name = "overlay")]
    Overlay(OverlayArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, default_value = "docs/fig/raw")]
    out: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct Mean3Args {
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "kebab-case")]
enum KernelName {
    Box3,
    Box5,
    SobelX,
    SobelY,
    Laplace,
}

#[derive(Args, Debug, Clone)]
struct MaskArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[arg(long, value_enum, default_value_t = KernelName::Box3)]
    kernel: KernelName,
}

#[derive(Args, Debug, Clone)]
struct EdgesArgs {
    #[command(flatten)]
    common: CommonArgs,
    /// Pipeline configuration JSON; missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct OverlayArgs {
    #[command(flatten)]
    common: CommonArgs,
    /// Contours as `[[[x, y], ...], ...]`.
    #[arg(long, required = true)]
    contours: PathBuf,
    /// Packed `0xAARRGGBB` color.
    #[arg(long, default_value = "0xFFFF0000", value_parser = parse_color)]
    color: u32,
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    origin_x: i32,
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    origin_y: i32,
}

#[derive(Debug, Clone, Serialize)]
struct MetaMean3 {
    width: usize,
    height: usize,
    border: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct MetaMask {
    kernel: KernelName,
    side: usize,
    border: &'static str,
    min: f32,
    max: f32,
}

#[derive(Debug, Clone, Serialize)]
struct MetaEdges {
    config: PipelineConfig,
    gradient: &'static str,
    summary: FrameSummary,
}

#[derive(Debug, Clone, Serialize)]
struct MetaOverlay {
    contours: usize,
    drawn: usize,
    color: String,
    origin: [i32; 2],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Mean3(args) => run_mean3(args),
        Command::Mask(args) => run_mask(args),
        Command::Edges(args) => run_edges(args),
        Command::Overlay(args) => run_overlay(args),
    }
}

fn run_mean3(args: Mean3Args) -> Result<()> {
    let case_dir = prepare_case(&args.common, "mean3")?;
    let (w, h, luma) = load_input_u8(&args.common.input)?;
    let src = luma_to_gray(w, h, &luma)?;

    let mut out = Gray::new();
    mean3(&src, &mut out);

    let bytes = out
        .data()
        .iter()
        .map(|&v| v.round().clamp(0.0, 255.0) as u8)
        .collect();
    save_luma_raw(case_dir.join("mean3.png"), w, h, bytes)?;
    write_json(
        case_dir.join("meta.json"),
        &MetaMean3 {
            width: w,
            height: h,
            border: "zero",
        },
    )?;

    info!(case = "mean3", width = w, height = h, "wrote {}", case_dir.display());
    Ok(())
}

fn run_mask(args: MaskArgs) -> Result<()> {
    let case_dir = prepare_case(&args.common, "mask")?;
    let (w, h, luma) = load_input_u8(&args.common.input)?;
    let src = luma_to_gray(w, h, &luma)?;

    let taps: Vec<f32> = match args.kernel {
        KernelName::Box3 => BOX3.to_vec(),
        KernelName::Box5 => box_taps(5),
        KernelName::SobelX => SOBEL_X.to_vec(),
        KernelName::SobelY => SOBEL_Y.to_vec(),
        KernelName::Laplace => LAPLACE4.to_vec(),
    };
    let kernel = Kernel2D::square(&taps).context("building mask")?;

    let mut out = Gray::new();
    mask_filter(&src, &mut out, &kernel);

    let (min, max) = min_max(out.data());
    let vis = f32_to_u8_vis(out.data(), (min, max));
    save_luma_raw(case_dir.join("mask.png"), w, h, vis)?;
    write_json(
        case_dir.join("meta.json"),
        &MetaMask {
            kernel: args.kernel,
            side: kernel.side(),
            border: "reflect",
            min,
            max,
        },
    )?;

    info!(case = "mask", kernel = ?args.kernel, min, max, "wrote {}", case_dir.display());
    Ok(())
}

fn run_edges(args: EdgesArgs) -> Result<()> {
    let case_dir = prepare_case(&args.common, "edges")?;
    let (w, h, luma) = load_input_u8(&args.common.input)?;

    let config: PipelineConfig = match &args.config {
        Some(path) => {
            ensure_file_exists(path, "config")?;
            read_json(path)?
        }
        None => PipelineConfig::default(),
    };

    let width = i32::try_from(w).context("input width exceeds i32")?;
    let height = i32::try_from(h).context("input height exceeds i32")?;
    let frame = LumaFrame::from_host(&luma, width, width, height)?;

    let mut pipeline = FramePipeline::new(config.clone());
    let summary = pipeline.process(&frame)?;

    let amp = pipeline.amplitude().data();
    save_luma_raw(case_dir.join("amp.png"), w, h, f32_to_u8_vis(amp, min_max(amp)))?;
    let mut edges = vec![0u8; w * h];
    pipeline.export_edges(&mut edges, w)?;
    save_luma_raw(case_dir.join("edges.png"), w, h, edges)?;

    write_json(
        case_dir.join("meta.json"),
        &MetaEdges {
            config,
            gradient: "sobel3",
            summary,
        },
    )?;

    info!(
        case = "edges",
        edge_pixels = summary.edge_pixels,
        mean_amplitude = summary.mean_amplitude,
        "wrote {}",
        case_dir.display()
    );
    Ok(())
}

fn run_overlay(args: OverlayArgs) -> Result<()> {
    let case_dir = prepare_case(&args.common, "overlay")?;
    ensure_file_exists(&args.contours, "contours")?;

    let raw: Vec<Vec<[f32; 2]>> = read_json(&args.contours)?;
    let contours: Vec<Vec<Point2f>> = raw
        .iter()
        .map(|c| c.iter().map(|&[x, y]| Point2f::new(x, y)).collect())
        .collect();

    let path = &args.common.input;
    let mut rgba = image::open(path)
        .with_context(|| format!("opening input image {}", path.display()))?
        .to_rgba8();
    let (w, h) = rgba.dimensions();
    let width = i32::try_from(w).context("input width exceeds i32")?;
    let height = i32::try_from(h).context("input height exceeds i32")?;
    let stride = width.checked_mul(4).context("input row exceeds i32")?;

    overlay_contours(
        &mut rgba,
        stride,
        width,
        height,
        args.origin_x,
        args.origin_y,
        &contours,
        args.color,
    )?;

    let out_path = case_dir.join("overlay.png");
    rgba.save(&out_path)
        .with_context(|| format!("saving image {}", out_path.display()))?;

    let drawn = contours.iter().filter(|c| c.len() >= 2).count();
    write_json(
        case_dir.join("meta.json"),
        &MetaOverlay {
            contours: contours.len(),
            drawn,
            color: format!("{:#010X}", args.color),
            origin: [args.origin_x, args.origin_y],
        },
    )?;

    info!(case = "overlay", contours = contours.len(), drawn, "wrote {}", case_dir.display());
    Ok(())
}

fn prepare_case(common: &CommonArgs, case_name: &str) -> Result<PathBuf> {
    ensure_file_exists(&common.input, "input")?;

    let case_dir = common.out.join(case_name);
    fs::create_dir_all(&case_dir)
        .with_context(|| format!("creating output directory {}", case_dir.display()))?;

    fs::copy(&common.input, case_dir.join("input.png")).with_context(|| {
        format!(
            "copying input {} -> {}",
            common.input.display(),
            case_dir.join("input.png").display()
        )
    })?;

    Ok(case_dir)
}

fn load_input_u8(path: &Path) -> Result<(usize, usize, Vec<u8>)> {
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    let luma = dyn_img.to_luma8();
    let (w, h) = luma.dimensions();
    if w == 0 || h == 0 {
        bail!("input image {} is empty", path.display());
    }
    Ok((w as usize, h as usize, luma.into_raw()))
}

fn luma_to_gray(width: usize, height: usize, data: &[u8]) -> Result<Gray> {
    let view = GridView::from_slice(width, height, width, data)
        .context("constructing luminance view")?;
    Ok(to_f32(&view))
}

fn save_luma_raw(path: PathBuf, width: usize, height: usize, data: Vec<u8>) -> Result<()> {
    let gray = GrayImage::from_raw(width as u32, height as u32, data)
        .context("constructing GrayImage from raw bytes")?;
    gray.save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn min_max(data: &[f32]) -> (f32, f32) {
    data.iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Stretches `data` from `range` onto `0..=255`.
fn f32_to_u8_vis(data: &[f32], (min_v, max_v): (f32, f32)) -> Vec<u8> {
    if !(max_v - min_v > 1e-12) {
        return vec![0u8; data.len()];
    }

    let scale = 255.0 / (max_v - min_v);
    data.iter()
        .map(|&v| ((v - min_v) * scale).round().clamp(0.0, 255.0) as u8)
        .collect()
}

fn parse_color(s: &str) -> Result<u32, String> {
    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('#'))
        .unwrap_or(s);
    u32::from_str_radix(hex, 16).map_err(|err| format!("invalid color '{s}': {err}"))
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing json {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}
