use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use shadowcast::api::{draw_scene, ReplayToken, Scene, SceneCfg, UMBRA_EPS};
use std::io::Read;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod wire;

use wire::{ShadowRequest, ShadowResponseBody};

#[derive(Parser)]
#[command(name = "shadowcast-cli")]
#[command(about = "Shadow extents of a stick lit by point and extended lights")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read a JSON request and write the JSON shadow response
    Compute {
        /// Request file; stdin when omitted or `-`
        #[arg(long)]
        input: Option<String>,
        /// Response file; stdout when omitted
        #[arg(long)]
        out: Option<String>,
        #[arg(long)]
        pretty: bool,
    },
    /// Write a reproducible random request
    Sample {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 3)]
        lights: usize,
        #[arg(long, default_value_t = 0.5)]
        extended_frac: f64,
        #[arg(long)]
        out: Option<String>,
    },
    /// Print version and geometry constants as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Compute { input, out, pretty } => compute(input, out, pretty),
        Action::Sample {
            seed,
            index,
            lights,
            extended_frac,
            out,
        } => sample(seed, index, lights, extended_frac, out),
        Action::Report => report(),
    }
}

fn compute(input: Option<String>, out: Option<String>, pretty: bool) -> Result<()> {
    let raw = read_input(input.as_deref())?;
    let req: ShadowRequest = serde_json::from_str(&raw).context("parsing shadow request")?;
    tracing::info!(input = input.as_deref().unwrap_or("-"), "compute");
    let body = respond(&req)?;
    let bytes = if pretty {
        serde_json::to_vec_pretty(&body)?
    } else {
        serde_json::to_vec(&body)?
    };
    write_output(out.as_deref(), &bytes)
}

/// Validate, cast, and shape the response body.
fn respond(req: &ShadowRequest) -> Result<ShadowResponseBody> {
    let scene = Scene::from(req);
    scene.validate().context("invalid shadow request")?;
    let resp = scene.cast_shadows();
    tracing::info!(
        lights = resp.shadows.len(),
        visible = resp.visible_count(),
        "cast"
    );
    for entry in &resp.shadows {
        tracing::debug!(
            light_index = entry.light_index,
            visible = entry.shadow.visible(),
            "light"
        );
    }
    Ok(ShadowResponseBody::from(&resp))
}

fn sample(
    seed: u64,
    index: u64,
    lights: usize,
    extended_frac: f64,
    out: Option<String>,
) -> Result<()> {
    ensure!(
        extended_frac.is_finite(),
        "--extended-frac must be finite, got {extended_frac}"
    );
    tracing::info!(seed, index, lights, extended_frac, "sample");
    let cfg = SceneCfg {
        light_count: lights,
        extended_frac,
        ..SceneCfg::default()
    };
    let scene = draw_scene(&cfg, ReplayToken { seed, index });
    let req = ShadowRequest::from(&scene);
    write_output(out.as_deref(), &serde_json::to_vec_pretty(&req)?)
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "version": shadowcast::VERSION,
        "umbraEps": UMBRA_EPS,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading request from stdin")?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {path}")),
    }
}

fn write_output(out: Option<&str>, bytes: &[u8]) -> Result<()> {
    let Some(out) = out else {
        println!("{}", String::from_utf8_lossy(bytes));
        return Ok(());
    };
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, bytes).with_context(|| format!("writing {out}"))?;
    Ok(())
}
