//! Bubble FX command-line driver
//!
//! Reads one JSON request per stdin line and writes one JSON response per
//! stdout line:
//!
//! ```text
//! {"kind":"collision","x":0,"y":0,"bubble_size":25,"combo":0,"special":false,"impact":10}
//! {"kind":"theme","speed_level":5,"score":500,"combo":1}
//! ```

use std::io::{self, BufRead, Write};

use serde_json::{Value, json};

use bubble_fx::{
    CollisionData, EffectsGenerator, FxError, GameState, QualityPreset, Settings, Tuning,
};

struct Options {
    seed: u64,
    tuning: Option<String>,
    settings: Settings,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        seed: 0x5EED,
        tuning: None,
        settings: Settings::default(),
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                options.seed = value.parse().map_err(|_| format!("bad seed: {value}"))?;
            }
            "--tuning" => {
                options.tuning = Some(args.next().ok_or("--tuning needs a path")?);
            }
            "--quality" => {
                let value = args.next().ok_or("--quality needs a value")?;
                options.settings.quality = QualityPreset::from_str(&value)
                    .ok_or_else(|| format!("unknown quality: {value}"))?;
            }
            "--reduced-motion" => options.settings.reduced_motion = true,
            "--no-shake" => options.settings.screen_shake = false,
            "--no-particles" => options.settings.particles = false,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(options)
}

fn handle(line: &str, fx: &mut EffectsGenerator, settings: &Settings) -> Result<Value, FxError> {
    let request: Value = serde_json::from_str(line)?;
    let kind = match request.get("kind") {
        Some(Value::String(kind)) => kind.clone(),
        Some(other) => return Err(FxError::UnknownKind(other.to_string())),
        None => {
            return Err(FxError::MissingField {
                record: "request",
                field: "kind",
            });
        }
    };

    match kind.as_str() {
        "collision" => {
            let collision = CollisionData::from_value(request)?;
            let effects = settings.apply(fx.generate_particle_effects(&collision));
            Ok(json!({ "effects": effects }))
        }
        "theme" => {
            let state = GameState::from_value(request)?;
            Ok(json!({ "theme": fx.generate_background_theme(&state) }))
        }
        _ => Err(FxError::UnknownKind(format!("{kind:?}"))),
    }
}

/// One response line per request line; failures become `{"error": ...}`
fn respond(line: &str, fx: &mut EffectsGenerator, settings: &Settings) -> Value {
    handle(line, fx, settings).unwrap_or_else(|e| {
        log::warn!("Rejected request: {e}");
        json!({ "error": e.to_string() })
    })
}

fn run(options: Options) -> Result<(), FxError> {
    let mut fx = EffectsGenerator::new(options.seed);
    if let Some(path) = &options.tuning {
        fx = fx.with_tuning(Tuning::load(path)?)?;
    }
    log::info!(
        "Bubble FX ready (seed {}, quality {})",
        options.seed,
        options.settings.quality.as_str()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = respond(&line, &mut fx, &options.settings);
        writeln!(stdout, "{response}")?;
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!(
                "usage: bubble-fx [--seed N] [--tuning FILE] [--quality low|medium|high] \
                 [--reduced-motion] [--no-shake] [--no-particles]"
            );
            std::process::exit(2);
        }
    };

    if let Err(e) = run(options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
