use crate::cli::{args::ConfigAction, global::GlobalArgs};
use base8x::AlphabetRegistry;

pub fn handle(
    action: ConfigAction,
    _global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List { json } => handle_list(json, config),
        ConfigAction::Show { alphabet } => handle_show(&alphabet, config),
    }
}

fn handle_list(json: bool, config: &AlphabetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let default = config.resolve_name(None);
    let names = config.names();

    if json {
        let output = serde_json::json!({
            "alphabets": names,
            "default": default,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Available alphabets:\n");
    for name in &names {
        let Some(alphabet_config) = config.get_alphabet(name) else {
            continue;
        };
        let marker = if name == default { "*" } else { " " };
        let radix = alphabet_config
            .effective_chars()
            .map(|chars| chars.chars().count().to_string())
            .unwrap_or_else(|_| "?".to_string());
        let description = alphabet_config.description.as_deref().unwrap_or("");
        println!("{} {:<12} base-{:<3}  {}", marker, name, radix, description);
    }
    Ok(())
}

fn handle_show(name: &str, config: &AlphabetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let codec = config.codec(name)?;

    println!("Alphabet: {}", name);
    if let Some(description) = config
        .get_alphabet(name)
        .and_then(|c| c.description.as_deref())
    {
        println!("Description: {}", description);
    }
    println!("Radix: {}", codec.radix());
    println!("Characters: {}", codec.alphabet());
    Ok(())
}
