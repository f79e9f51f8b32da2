use crate::cli::{args::ConfigAction, global::GlobalArgs};
use decoder::{DecoderConfig, Scheme};

pub fn handle(
    action: ConfigAction,
    _global: &GlobalArgs,
    config: &DecoderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List { json } => handle_list(json),
        ConfigAction::Show { scheme } => handle_show(&scheme, config),
        ConfigAction::Settings { json } => handle_settings(json, config),
    }
}

fn handle_list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let schemes: Vec<_> = Scheme::all()
            .iter()
            .map(|scheme| {
                serde_json::json!({
                    "name": scheme.name(),
                    "display_name": scheme.display_name(),
                    "reversible": scheme.supports_reverse(),
                    "icon": scheme.icon(),
                    "description": scheme.description(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&schemes)?);
        return Ok(());
    }

    println!("Available schemes:\n");
    for scheme in Scheme::all() {
        let direction = if scheme.supports_reverse() {
            "encode/decode"
        } else {
            "encode"
        };
        println!(
            "  {:<10} {:<15} {:<14} {}",
            scheme.name(),
            scheme.display_name(),
            direction,
            scheme.description()
        );
    }
    println!("\nUse --json for structured output");

    Ok(())
}

fn handle_show(name: &str, config: &DecoderConfig) -> Result<(), Box<dyn std::error::Error>> {
    let scheme: Scheme = name.parse()?;
    let options = config.conversion_options(false, None)?;
    let sample = "Hello";

    println!("Scheme: {}", scheme.display_name());
    println!("  Name: {}", scheme.name());
    println!("  Description: {}", scheme.description());
    println!(
        "  Decode: {}",
        if scheme.supports_reverse() { "yes" } else { "no" }
    );
    if scheme == Scheme::Caesar {
        println!("  Shift: {}", options.caesar_shift);
    }
    println!("  Example: {} -> {}", sample, decoder::encode(scheme, sample, &options)?);

    Ok(())
}

fn handle_settings(json: bool, config: &DecoderConfig) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let output = serde_json::json!({
            "settings": {
                "caesar_shift": config.caesar_shift(),
                "date_format": config.date_format(),
            },
            "batch": {
                "show_progress": config.show_progress(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("[settings]");
    println!("caesar_shift = {}", config.caesar_shift());
    println!("date_format = {:?}", config.date_format());
    println!();
    println!("[batch]");
    println!("show_progress = {}", config.show_progress());

    Ok(())
}
