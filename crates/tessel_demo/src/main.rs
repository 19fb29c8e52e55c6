//! # Tessel Demo
//!
//! Headless driver for the classic demo windows. Replays a scripted input
//! feed, then prints a summary of the last frame's command stream.
//!
//! ```text
//! tessel_demo [--style <file.toml>] [--frames <n>] [--dump-style]
//! ```
//!
//! Set `RUST_LOG=debug` to see container and focus changes.

mod app;
mod script;

use std::process::ExitCode;

use app::DemoApp;
use tessel_ui::{Command, Context, Style, UiError};
use tracing_subscriber::EnvFilter;

/// Command-line options.
struct Args {
    style: Option<String>,
    frames: usize,
    dump_style: bool,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let value_of = |flag: &str| {
            args.iter()
                .position(|a| a == flag)
                .and_then(|i| args.get(i + 1))
                .cloned()
        };
        Self {
            style: value_of("--style"),
            frames: value_of("--frames")
                .and_then(|s| s.parse().ok())
                .unwrap_or(script::SCRIPT.len() + 2),
            dump_style: args.iter().any(|a| a == "--dump-style"),
        }
    }
}

/// Per-variant totals for one frame.
#[derive(Debug, Default)]
struct CommandStats {
    clips: usize,
    rects: usize,
    texts: usize,
    icons: usize,
}

impl CommandStats {
    fn collect(ctx: &Context) -> Result<Self, UiError> {
        let mut stats = Self::default();
        for command in ctx.commands()? {
            match command {
                Command::Clip { .. } => stats.clips += 1,
                Command::Rect { .. } => stats.rects += 1,
                Command::Text { .. } => stats.texts += 1,
                Command::Icon { .. } => stats.icons += 1,
            }
        }
        Ok(stats)
    }

    fn total(&self) -> usize {
        self.clips + self.rects + self.texts + self.icons
    }
}

fn load_style(path: &str) -> Result<Style, String> {
    let source = std::fs::read_to_string(path).map_err(|e| format!("could not read {path}: {e}"))?;
    Style::from_toml_str(&source).map_err(|e| e.to_string())
}

fn run(args: &Args) -> Result<(), String> {
    let style = match &args.style {
        Some(path) => {
            println!("Loading style: {path}");
            load_style(path)?
        }
        None => Style::default(),
    };
    if args.dump_style {
        println!("{}", style.to_toml_string().map_err(|e| e.to_string())?);
    }

    let mut ctx = Context::with_style(style);
    let mut app = DemoApp::new().map_err(|e| e.to_string())?;

    println!("Running {} frames...", args.frames);
    for frame in 0..args.frames {
        if let Some(events) = script::SCRIPT.get(frame) {
            for event in *events {
                event.apply(&mut ctx);
            }
        }
        ctx.begin().map_err(|e| e.to_string())?;
        app.frame(&mut ctx);
        ctx.end().map_err(|e| format!("frame {frame}: {e}"))?;
        tracing::debug!(frame = ctx.frame(), "frame finished");
    }

    let stats = CommandStats::collect(&ctx).map_err(|e| e.to_string())?;
    let bg = app.background();

    println!();
    println!("┌─ LAST FRAME ─────────────────────────────────────────────────────┐");
    println!("│ Frame:              {}", ctx.frame());
    println!("│ Commands:           {}", stats.total());
    println!("│   Clip:             {}", stats.clips);
    println!("│   Rect:             {}", stats.rects);
    println!("│   Text:             {}", stats.texts);
    println!("│   Icon:             {}", stats.icons);
    println!("│ Background:         #{:02X}{:02X}{:02X}", bg.r, bg.g, bg.b);
    println!("└──────────────────────────────────────────────────────────────────┘");
    println!();
    println!("┌─ LOG WINDOW ─────────────────────────────────────────────────────┐");
    for line in app.log().lines() {
        println!("│ {line}");
    }
    println!("└──────────────────────────────────────────────────────────────────┘");

    for name in ["Demo Window", "Log Window", "Style Editor"] {
        if let Some(window) = ctx.container(name) {
            tracing::info!(
                name,
                x = window.rect.x,
                y = window.rect.y,
                z = window.zindex,
                "window"
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║         TESSEL UI DEMO                                           ║");
    println!("║         HEADLESS COMMAND STREAM                                  ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    match run(&Args::parse()) {
        Ok(()) => {
            println!();
            println!("✓ Demo finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
