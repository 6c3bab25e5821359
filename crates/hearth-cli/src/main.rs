//! Console chat driver for the hearth engine.
//!
//! Opens one persona's session store, wires up the scripted responder, and
//! runs a line-based chat loop with a few `/` commands for inspecting and
//! mutating session state.

use anyhow::{Context, Result};
use clap::Parser;
use hearth_core::persona::{Persona, find_persona, get_default_personas};
use hearth_core::session::SessionStore;
use hearth_infrastructure::{EngineConfig, HearthPaths, JsonProfileRepository};
use hearth_interaction::presets::template_set_for;
use hearth_interaction::{ChatSession, ScriptedResponder, ThinkingDelay};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Persona to talk to
    #[arg(long, default_value = "auntie-mae")]
    persona: String,

    /// Context label for this conversation (e.g. cooking, health)
    #[arg(long, default_value = "general")]
    context: String,

    /// Directory for profile snapshots (defaults to the platform location)
    #[arg(long)]
    profiles_dir: Option<PathBuf>,

    /// Skip the simulated thinking delay
    #[arg(long)]
    no_delay: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let persona = find_persona(&args.persona).with_context(|| {
        let known: Vec<String> = get_default_personas().into_iter().map(|p| p.id).collect();
        format!(
            "unknown persona '{}' (available: {})",
            args.persona,
            known.join(", ")
        )
    })?;
    let templates = template_set_for(&persona.id)
        .with_context(|| format!("no template set for persona '{}'", persona.id))?;

    let config = EngineConfig::load_or_default(&HearthPaths::config_file()?);
    let profiles_dir = args
        .profiles_dir
        .or(config.profiles_dir.clone())
        .map(Ok)
        .unwrap_or_else(HearthPaths::profiles_dir)?;
    let repository = Arc::new(JsonProfileRepository::new(&profiles_dir)?);

    let store = Arc::new(
        SessionStore::open(persona.id.clone(), &persona.default_outfit, repository).await,
    );

    let delay = if args.no_delay {
        ThinkingDelay::none()
    } else {
        ThinkingDelay {
            min_ms: config.thinking_delay_min_ms,
            max_ms: config.thinking_delay_max_ms,
        }
    };
    let responder = ScriptedResponder::new(persona.clone(), templates, store).with_delay(delay);
    let chat = ChatSession::new(responder, args.context);

    println!("{} - {}", persona.name, persona.role);
    println!("Type a message, or /help for commands.\n");

    run_chat_loop(&chat, &persona).await
}

async fn run_chat_loop(chat: &ChatSession, persona: &Persona) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("you: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        if let Some(command) = input.strip_prefix('/') {
            if !handle_command(chat, persona, command).await? {
                break;
            }
            continue;
        }

        let reply = chat.send(input).await;
        println!("{}: {}\n", persona.name, reply);
    }

    Ok(())
}

/// Executes one slash command; returns false when the loop should exit.
async fn handle_command(chat: &ChatSession, persona: &Persona, command: &str) -> Result<bool> {
    let store = chat.store();
    let (name, rest) = match command.split_once(' ') {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name {
        "quit" | "exit" => return Ok(false),
        "help" => {
            println!("  /mem            show recent memories");
            println!("  /clear          forget all memories");
            println!("  /outfit <id>    change the current outfit");
            println!("  /outfits        list this persona's outfit catalog");
            println!("  /name <name>    tell the persona your name");
            println!("  /quit           leave\n");
        }
        "mem" => {
            let state = store.state().await;
            if state.memories.is_empty() {
                println!("(no memories yet)\n");
            } else {
                for memory in state.memories.iter().take(10) {
                    println!(
                        "  [{}] {} ({})",
                        memory.kind,
                        memory.content,
                        memory.timestamp.format("%Y-%m-%d %H:%M")
                    );
                }
                println!();
            }
        }
        "clear" => {
            store.clear_memories().await;
            println!("(memories cleared)\n");
        }
        "outfit" => {
            if rest.is_empty() {
                println!("usage: /outfit <id>\n");
            } else {
                store.set_outfit(rest).await;
                println!("(now wearing {rest})");
                println!("preview: {}\n", persona.avatar_url(rest));
            }
        }
        "outfits" => {
            for category in &persona.outfit_categories {
                println!("  {}:", category.name);
                for item in &category.items {
                    println!("    {} - {}", item.id, item.description);
                }
            }
            println!();
        }
        "name" => {
            if rest.is_empty() {
                println!("usage: /name <name>\n");
            } else {
                store.set_user_name(rest).await;
                println!("(nice to meet you, {rest})\n");
            }
        }
        other => {
            println!("unknown command '/{other}', try /help\n");
        }
    }

    Ok(true)
}
