//! SMS Forge - bulk SMS message variant generation
//!
//! A CLI front end for the generation engine: feed it a bracketed template,
//! pick an encoding and a mode, and get every message variant scored against
//! the 70-character SMS budget.

use std::env;
use std::process;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Select, Text};
use tracing_subscriber::EnvFilter;

use sms_forge::{
    Encoding, GenerateMode, GenerateRequest, GenerateResponse, MessageGenerator, PhraseStore,
    Result, MAX_CHARS_PER_SMS,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .try_init()
        .ok();

    if let Err(e) = sms_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_help();
        return Ok(());
    }

    let template = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        String::new()
    };

    if let Err(e) = run_sms_forge(&template) {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    Ok(())
}

/// Main generation workflow
fn run_sms_forge(template_arg: &str) -> Result<()> {
    println!("📨 SMS Forge - template message generation");
    println!("═══════════════════════════════════════════");
    println!();

    let request = if template_arg.is_empty() {
        build_request_interactive()?
    } else {
        build_request_from_env(template_arg)?
    };

    let generator = match load_phrase_store()? {
        Some(store) => MessageGenerator::with_phrase_lookup(Arc::new(store)),
        None => MessageGenerator::new(),
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Generating message variants...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let response = generator.generate(&request);
    spinner.finish_and_clear();

    display_results(&response?);
    Ok(())
}

/// Build a request by prompting for template, encoding and mode
fn build_request_interactive() -> Result<GenerateRequest> {
    let template = Text::new("Template (positions in parentheses):")
        .with_placeholder("Hi (friend), your code is (100-105)")
        .prompt()
        .map_err(|e| sms_forge::SmsForgeError::validation(e.to_string()))?;

    let encoding = Select::new("Encoding:", Encoding::all().to_vec())
        .prompt()
        .map_err(|e| sms_forge::SmsForgeError::validation(e.to_string()))?;

    let mode = Select::new(
        "Generation mode:",
        vec![GenerateMode::Sequential, GenerateMode::Random],
    )
    .prompt()
    .map_err(|e| sms_forge::SmsForgeError::validation(e.to_string()))?;

    Ok(GenerateRequest {
        template: Some(template),
        encoding: Some(encoding),
        generate_mode: mode,
        ..Default::default()
    })
}

/// Build a request from the template argument plus environment settings
fn build_request_from_env(template: &str) -> Result<GenerateRequest> {
    let encoding = match env::var("SMS_FORGE_ENCODING") {
        Ok(raw) => Encoding::from_str(&raw)?,
        Err(_) => Encoding::Unicode,
    };
    let mode = match env::var("SMS_FORGE_MODE") {
        Ok(raw) => GenerateMode::from_str(&raw)?,
        Err(_) => GenerateMode::Sequential,
    };

    Ok(GenerateRequest {
        template: Some(template.to_string()),
        encoding: Some(encoding),
        generate_mode: mode,
        ..Default::default()
    })
}

/// Load the phrase-group snapshot named by SMS_FORGE_PHRASES, if any
fn load_phrase_store() -> Result<Option<PhraseStore>> {
    match env::var("SMS_FORGE_PHRASES") {
        Ok(path) => {
            let store = PhraseStore::load(&path)?;
            println!("📚 Loaded {} phrase group(s) from {}", store.list().len(), path);
            println!();
            Ok(Some(store))
        }
        Err(_) => Ok(None),
    }
}

/// Display scored messages in within-budget / over-budget buckets
fn display_results(response: &GenerateResponse) {
    let within: Vec<_> = response.results.iter().filter(|r| !r.is_exceeded).collect();
    let exceeded: Vec<_> = response.results.iter().filter(|r| r.is_exceeded).collect();

    if !within.is_empty() {
        println!("✅ Within budget ({}):", within.len());
        println!("─────────────────────");
        for result in &within {
            println!("   {} [{} chars]", result.content, result.char_count);
        }
        println!();
    }

    if !exceeded.is_empty() {
        println!("⚠️  Over budget ({}):", exceeded.len());
        println!("────────────────────");
        for result in &exceeded {
            println!(
                "   {} [{} chars, +{} over]",
                result.content, result.char_count, result.exceeded_chars
            );
        }
        println!();
    }

    println!("📈 Summary:");
    println!("   📊 Total variants: {}", response.total_count);
    println!("   ✅ Within {} chars: {}", MAX_CHARS_PER_SMS, within.len());
    if response.exceeded_count > 0 {
        println!("   ⚠️  Exceeded: {}", response.exceeded_count);
    }
}

/// Print help information
fn print_help() {
    println!("📨 SMS Forge - template message generation");
    println!("═══════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    sms-forge [TEMPLATE]");
    println!();
    println!("EXAMPLES:");
    println!("    sms-forge                                  # Interactive mode");
    println!("    sms-forge \"Hi (friend), code (100-105)\"    # Expand a template");
    println!("    sms-forge \"(greetings) (1-3)\"              # Use a phrase group");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    SMS_FORGE_ENCODING   ASCII | Zawgyi | Unicode | Other (default: Unicode)");
    println!("    SMS_FORGE_MODE       sequential | random (default: sequential)");
    println!("    SMS_FORGE_PHRASES    Path to a phrase-group JSON snapshot");
    println!("    RUST_LOG             Log filter, e.g. sms_forge=debug");
    println!();
    println!("FEATURES:");
    println!("    • Every position combination expanded and scored");
    println!("    • Numeric ranges: (3-10) becomes 3, 4, ... 10");
    println!("    • Reusable phrase groups by name or id");
    println!("    • Per-encoding length accounting against the 70-char SMS budget");
}
