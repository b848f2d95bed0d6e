use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use libhangul::{compose_str, create_ime_engine, jamo, layout, HangulConfig, HangulIme, KeyEvent};

#[derive(Parser)]
#[command(name = "libhangul")]
#[command(about = "A Rust implementation of Hangul syllable composition")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a jamo string into syllables
    Compose {
        /// Jamo input (e.g. ㅎㅏㄴㄱㅡㄹ)
        input: String,
        /// Read the input as QWERTY keys on the 2-set layout
        #[arg(long)]
        qwerty: bool,
    },
    /// Show the jamo of each syllable
    Decompose {
        /// Text to decompose
        text: String,
    },
    /// Interactive REPL mode
    Repl {
        /// Read lines as QWERTY keys on the 2-set layout
        #[arg(long)]
        qwerty: bool,
        /// Show the composing text after every key
        #[arg(short, long)]
        verbose: bool,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<HangulConfig> {
    match path {
        Some(path) => HangulConfig::load_toml(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(HangulConfig::default()),
    }
}

fn handle_compose_command(ime: &mut HangulIme, input: &str, qwerty: bool) {
    let input = if qwerty {
        layout::transliterate(input)
    } else {
        input.to_string()
    };
    println!("{}", compose_str(ime, &input));
}

fn handle_decompose_command(text: &str) {
    for (ch, indices) in jamo::decompose_text(text) {
        match indices {
            Some((cho, jung, jong)) => {
                let show = |c: Option<char>| c.map(String::from).unwrap_or_else(|| "-".to_string());
                println!(
                    "{} U+{:04X}  cho={:2} {}  jung={:2} {}  jong={:2} {}",
                    ch,
                    u32::from(ch),
                    cho,
                    show(jamo::choseong_to_jamo(cho)),
                    jung,
                    show(jamo::jungseong_to_jamo(jung)),
                    jong,
                    show(jamo::jongseong_to_jamo(jong)),
                );
            }
            None => println!("{} U+{:04X}  (not a hangul syllable)", ch, u32::from(ch)),
        }
    }
}

/// Print the document and composing text after every key of `line`.
fn trace_line(ime: &mut HangulIme, line: &str) {
    let mut document = String::new();
    for ch in line.chars() {
        let key = if ch == ' ' {
            KeyEvent::Space
        } else {
            KeyEvent::Char(ch)
        };
        ime.process_key(key);
        document.push_str(&ime.context_mut().take_commit());
        println!(
            "  {:?} -> document='{}' composing='{}'",
            key,
            document,
            ime.context().preedit_text
        );
    }
}

fn run_repl(ime: &mut HangulIme, qwerty: bool, verbose: bool) -> anyhow::Result<()> {
    println!("libhangul demo CLI - type jamo (or QWERTY keys with --qwerty) and press Enter");
    println!("Example: ㅎㅏㄴㄱㅡㄹ for 한글");
    println!("Ctrl-D to exit.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let raw = line.context("error reading stdin")?;
        let input = raw.trim();
        if input.is_empty() {
            continue;
        }
        let input = if qwerty {
            layout::transliterate(input)
        } else {
            input.to_string()
        };
        if verbose {
            trace_line(ime, &input);
            ime.reset();
        }
        println!("{}", compose_str(ime, &input));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let mut ime = create_ime_engine(config)?;

    match cli.command {
        Some(Commands::Compose { input, qwerty }) => {
            handle_compose_command(&mut ime, &input, qwerty);
        }
        Some(Commands::Decompose { text }) => {
            handle_decompose_command(&text);
        }
        Some(Commands::Repl { qwerty, verbose }) => {
            run_repl(&mut ime, qwerty, verbose)?;
        }
        None => {
            // No arguments, start REPL
            run_repl(&mut ime, false, false)?;
        }
    }
    Ok(())
}
