//! Waveform viewport inspection tool
//!
//! Reads a WAV file, reduces it for the requested zoom scale and prints
//! the viewport geometry a renderer would receive. Useful for checking
//! window pinning and marker placement against a real file without a
//! GUI.
//!
//! ## Flags
//!
//! - `--scale S` zoom scale (default 1.0)
//! - `--position P` scroll position in pre-scale units (default 0)
//! - `--width W` / `--height H` viewport size (default 800x240)
//! - `--pad P` vertical padding per channel band (default 2)
//! - `--in I` / `--out O` marker positions in pre-scale units
//! - `--sinc` use the band-limited engine instead of linear
//! - `--json` print the full geometry as JSON

use std::str::FromStr;

use anyhow::{bail, Context, Result};

use wavescope_core::{Resampler, SampleBuffer};
use wavescope_view::{map_viewport, MarkerSet, ViewportParams};

fn main() -> Result<()> {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut path: Option<String> = None;
    let mut scale = 1.0f64;
    let mut position = 0.0f64;
    let mut width = 800i64;
    let mut height = 240.0f32;
    let mut pad = 2.0f32;
    let mut in_point: Option<f64> = None;
    let mut out_point: Option<f64> = None;
    let mut use_sinc = false;
    let mut json = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--scale" => scale = next_value(&mut iter, "--scale")?,
            "--position" => position = next_value(&mut iter, "--position")?,
            "--width" => width = next_value(&mut iter, "--width")?,
            "--height" => height = next_value(&mut iter, "--height")?,
            "--pad" => pad = next_value(&mut iter, "--pad")?,
            "--in" => in_point = Some(next_value(&mut iter, "--in")?),
            "--out" => out_point = Some(next_value(&mut iter, "--out")?),
            "--sinc" => use_sinc = true,
            "--json" => json = true,
            other if !other.starts_with("--") => path = Some(other.to_string()),
            other => bail!("unknown flag: {}", other),
        }
    }

    let path = path.context(
        "usage: waveform-report <file.wav> [--scale S] [--position P] [--width W] \
         [--height H] [--pad P] [--in I] [--out O] [--sinc] [--json]",
    )?;

    let buffer = read_wav(&path)?;
    log::info!(
        "loaded {}: {} frames at {} Hz ({:.2}s, peak {:.3})",
        path,
        buffer.len(),
        buffer.sample_rate(),
        buffer.duration_seconds(),
        buffer.peak()
    );

    let resampler = if use_sinc {
        Resampler::sinc()
    } else {
        Resampler::linear()
    };
    let reduced = resampler.resample(&buffer, scale)?;
    log::info!(
        "reduced to {} frames at {} Hz for scale {}",
        reduced.len(),
        reduced.sample_rate(),
        scale
    );

    let params = ViewportParams {
        scroll_position: position,
        width,
        height,
        scale,
        pad,
    };
    let markers = MarkerSet {
        in_point,
        out_point,
    };
    let geometry = map_viewport(&reduced, &params, &markers)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&geometry)?);
        return Ok(());
    }

    println!("window start     : {}", geometry.start);
    println!("playhead pixel   : {}", geometry.playhead_pixel);
    println!("in marker pixel  : {}", format_column(geometry.in_marker));
    println!("out marker pixel : {}", format_column(geometry.out_marker));
    for (name, trace) in ["left", "right"].iter().zip(geometry.channels.iter()) {
        let (lo, hi) = trace
            .points
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        println!(
            "{:<5} trace      : {} points, mid_y {:.1}, y range [{:.1}, {:.1}]",
            name,
            trace.points.len(),
            trace.mid_y,
            lo,
            hi
        );
    }

    Ok(())
}

/// Render a marker column for the report ("-" when not visible)
fn format_column(column: Option<usize>) -> String {
    column.map_or_else(|| "-".to_string(), |c| c.to_string())
}

fn next_value<T: FromStr>(iter: &mut std::slice::Iter<'_, String>, flag: &str) -> Result<T> {
    let raw = iter
        .next()
        .with_context(|| format!("{} requires a value", flag))?;
    raw.parse::<T>()
        .map_err(|_| anyhow::anyhow!("invalid value for {}: {}", flag, raw))
}

/// Load a WAV file as a stereo buffer; mono input is duplicated to both
/// channels.
fn read_wav(path: &str) -> Result<SampleBuffer> {
    let mut reader =
        hound::WavReader::open(path).with_context(|| format!("failed to open {}", path))?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<Vec<_>, _>>()?,
        hound::SampleFormat::Int => {
            let full_scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / full_scale))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    match spec.channels {
        1 => Ok(SampleBuffer::from_channels(
            &interleaved,
            &interleaved,
            spec.sample_rate,
        )),
        2 => Ok(SampleBuffer::from_interleaved(
            &interleaved,
            spec.sample_rate,
        )),
        n => bail!("expected mono or stereo input, got {} channels", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_column() {
        assert_eq!(format_column(Some(150)), "150");
        assert_eq!(format_column(Some(0)), "0");
        assert_eq!(format_column(None), "-");
    }
}
