use std::fs;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use controls::{Controls, FrameUniforms, ParamState};
use replay::{Playback, Script};
use tracing_subscriber::EnvFilter;

use crate::cli::{PresetsArgs, RunArgs};
use crate::paths;
use crate::state::PresetFile;

pub fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn run(args: RunArgs) -> Result<()> {
    let source = fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read script at {}", args.script.display()))?;
    let script = Script::from_toml_str(&source)
        .with_context(|| format!("failed to parse script at {}", args.script.display()))?;

    let preset_path = match &args.presets {
        Some(path) => path.clone(),
        None => paths::default_preset_file()?,
    };
    let preset_file = PresetFile::load_or_default(&preset_path)?;
    let bank = preset_file.clone().into_bank()?;
    if !bank.is_empty() {
        tracing::info!(
            slots = bank.len(),
            path = %preset_path.display(),
            "loaded preset bank"
        );
    }

    let mut controls = Controls::new();
    *controls.presets_mut() = bank;

    let mut trace = match &args.trace {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("failed to create trace file at {}", path.display()))?;
            Some(BufWriter::new(file))
        }
        None => None,
    };

    let mut playback = Playback::new(controls, &script);
    let mut ticks = 0u64;
    while let Some(record) = playback.step() {
        if let Some(out) = trace.as_mut() {
            serde_json::to_writer(&mut *out, &record).context("failed to encode trace record")?;
            out.write_all(b"\n").context("failed to write trace record")?;
        }
        ticks += 1;
    }
    if let Some(mut out) = trace {
        out.flush().context("failed to flush trace file")?;
    }

    let controls = playback.into_controls();
    tracing::info!(ticks, "session complete");

    let state = controls.state();
    print_summary(&state);

    if args.uniforms {
        let viewport = script
            .viewport
            .map(|v| (v.width, v.height))
            .unwrap_or((1280.0, 720.0));
        // The shader clock advances a hundredth per frame.
        let uniforms = FrameUniforms::new(&state, viewport, ticks as f32 * 0.01);
        print_uniforms(&uniforms);
    }

    let updated = PresetFile::from_bank(controls.presets());
    if updated != preset_file {
        updated.persist(&preset_path)?;
        tracing::info!(path = %preset_path.display(), "preset bank updated");
    }

    Ok(())
}

pub fn presets(args: PresetsArgs) -> Result<()> {
    let path = match args.file {
        Some(path) => path,
        None => paths::default_preset_file()?,
    };
    let file = PresetFile::load_or_default(&path)?;
    if file.slots.is_empty() {
        println!("No presets stored at {}", path.display());
        return Ok(());
    }

    println!("Presets at {}:", path.display());
    for (slot, state) in &file.slots {
        println!(
            "  {slot}: zoom={:+.5} rotation={:+.5} position=({:+.5}, {:+.5}) color_offset={:+.5} linearity={:+.5}",
            state.zoom,
            state.rotation,
            state.position.x,
            state.position.y,
            state.color_offset,
            state.linearity
        );
    }
    Ok(())
}

fn print_summary(state: &ParamState) {
    println!("Final parameters:");
    println!("  zoom:         {:+.6} (vel {:+.6})", state.zoom, state.zoom_vel);
    println!(
        "  rotation:     {:+.6} (vel {:+.6})",
        state.rotation, state.rotation_vel
    );
    println!(
        "  position:     ({:+.6}, {:+.6}) (vel {:+.6}, {:+.6})",
        state.position.x, state.position.y, state.position_vel.x, state.position_vel.y
    );
    println!(
        "  color offset: {:+.6} (vel {:+.6})",
        state.color_offset, state.color_offset_vel
    );
    println!(
        "  linearity:    {:+.6} (vel {:+.6})",
        state.linearity, state.linearity_vel
    );
}

fn print_uniforms(uniforms: &FrameUniforms) {
    println!("Frame uniform block ({} bytes):", uniforms.as_bytes().len());
    println!(
        "  output_size:  {:.1} x {:.1}",
        uniforms.output_size[0], uniforms.output_size[1]
    );
    println!(
        "  position:     ({:+.6}, {:+.6})",
        uniforms.position[0], uniforms.position[1]
    );
    println!("  zoom:         {:+.6}", uniforms.zoom);
    println!("  rotation:     {:+.6}", uniforms.rotation);
    println!("  time:         {:.2}", uniforms.time);
    println!("  aspect_ratio: {:.6}", uniforms.aspect_ratio);
    println!("  color_offset: {:+.6}", uniforms.color_offset);
    println!("  nonlinearity: {:+.6}", uniforms.nonlinearity);
}
