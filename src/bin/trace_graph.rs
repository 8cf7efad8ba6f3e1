//! 渲染 trace 数据为分层依赖图
//!
//! 输入是一条 JSON message，或按行分隔的多条 message；每条 message 都会
//! 整体重建图。

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracegraph::{
    DanglingPolicy, GraphRenderer, OutputFormat, RenderConfig, TraceGraphError, TraceMessage,
};
use tracing::{debug, error, info, warn};

#[derive(Debug, Parser)]
#[command(
    name = "trace-graph",
    about = "Render traced events and their causal links as a hierarchical graph"
)]
struct Args {
    /// Message JSON (single document or one message per line); stdin if omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output file; stdout if omitted
    #[arg(long)]
    out: Option<PathBuf>,

    /// Output format: html, json or dot
    #[arg(long)]
    format: Option<String>,

    /// RenderConfig JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the container element id
    #[arg(long)]
    container_id: Option<String>,

    /// Override the page background color (also used for line nodes)
    #[arg(long)]
    background: Option<String>,

    /// Dangling causal edges: drop, keep or error
    #[arg(long)]
    dangling: Option<String>,

    /// Override the vis-network script URL
    #[arg(long)]
    vis_js_url: Option<String>,
}

fn parse_format(raw: Option<String>) -> OutputFormat {
    match raw.as_deref() {
        Some("html") | None => OutputFormat::Html,
        Some("json") => OutputFormat::Json,
        Some("dot") => OutputFormat::Dot,
        Some(other) => {
            warn!(format = other, "unknown format, using html");
            OutputFormat::Html
        }
    }
}

fn parse_dangling(raw: Option<String>, defaults: DanglingPolicy) -> DanglingPolicy {
    match raw.as_deref() {
        Some("drop") => DanglingPolicy::Drop,
        Some("keep") => DanglingPolicy::Keep,
        Some("error") => DanglingPolicy::Error,
        Some(other) => {
            warn!(dangling = other, "unknown dangling policy, keeping configured value");
            defaults
        }
        None => defaults,
    }
}

fn load_config(args: &mut Args) -> Result<RenderConfig, TraceGraphError> {
    let mut cfg = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    if let Some(id) = args.container_id.take() {
        cfg.container_id = id;
    }
    if let Some(bg) = args.background.take() {
        cfg.background_color = bg;
    }
    if let Some(url) = args.vis_js_url.take() {
        cfg.vis_js_url = url;
    }
    cfg.dangling = parse_dangling(args.dangling.take(), cfg.dangling);
    Ok(cfg)
}

fn read_input(input: Option<&PathBuf>) -> Result<String, TraceGraphError> {
    match input {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| TraceGraphError::io(path.display().to_string(), e))
        }
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .map_err(|e| TraceGraphError::io("<stdin>", e))?;
            Ok(raw)
        }
    }
}

fn write_output(
    renderer: &GraphRenderer,
    format: OutputFormat,
    out: &PathBuf,
) -> Result<(), TraceGraphError> {
    let rendered = renderer.render_to_string(format)?;
    fs::write(out, rendered).map_err(|e| TraceGraphError::io(out.display().to_string(), e))?;
    debug!(path = %out.display(), "output rewritten");
    Ok(())
}

fn run(mut args: Args) -> Result<(), TraceGraphError> {
    let cfg = load_config(&mut args)?;
    let format = parse_format(args.format.take());
    let raw = read_input(args.input.as_ref())?;

    let mut renderer = GraphRenderer::new(cfg);

    // Accepts one document as well as a stream of concatenated/NDJSON messages.
    let stream = serde_json::Deserializer::from_str(&raw).into_iter::<TraceMessage>();
    for msg in stream {
        let msg = msg.map_err(|e| TraceGraphError::parse("trace message", e))?;
        renderer.on_message(&msg)?;
        if let Some(out) = &args.out {
            write_output(&renderer, format, out)?;
        }
    }

    if renderer.messages() == 0 {
        warn!("input contained no messages; rendering an empty graph");
        if let Some(out) = &args.out {
            write_output(&renderer, format, out)?;
        }
    }

    if args.out.is_none() {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        renderer.render(format, &mut lock)?;
        lock.flush()?;
    } else if let Some(out) = &args.out {
        info!(path = %out.display(), ?format, "wrote graph");
    }

    let summary = renderer.graph().summary();
    eprintln!(
        "rendered messages={} nodes={} edges={}",
        renderer.messages(),
        summary.nodes(),
        summary.edges()
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "trace-graph failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
