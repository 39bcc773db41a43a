use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use serde_json::{Value, json};

use contentui::{ContentUI, MemoryStore, UiOptions};

#[derive(Debug, Parser)]
#[command(
    name = "contentedit",
    version,
    about = "Edit CMS content objects in an interactive terminal UI"
)]
struct Cli {
    /// Content spec: file path, inline JSON, or "-" for stdin
    #[arg(short = 'c', long = "content", value_name = "SPEC")]
    content: Option<String>,

    /// Schema spec: file path, inline JSON, or "-" for stdin
    #[arg(short = 's', long = "schema", value_name = "SPEC")]
    schema: Option<String>,

    /// Path the content is served under
    #[arg(short = 'p', long = "path", value_name = "PATH", default_value = "/document")]
    path: String,

    /// Content type the schema is registered for (defaults to the content's "@type")
    #[arg(short = 't', long = "type", value_name = "NAME")]
    type_name: Option<String>,

    /// Where the toolbar preference is persisted
    #[arg(long = "prefs-file", value_name = "PATH")]
    prefs_file: Option<PathBuf>,

    /// Clear the form back to the loaded values after each successful save
    #[arg(long = "reset-after-submit")]
    reset_after_submit: bool,

    /// Exit immediately on Ctrl+Q even with unsaved changes
    #[arg(long = "no-confirm-exit")]
    no_confirm_exit: bool,

    /// Write the saved payload to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if cli.content.as_deref() == Some("-") && cli.schema.as_deref() == Some("-") {
        return Err(eyre!(
            "cannot read content and schema from stdin simultaneously; provide inline JSON or files"
        ));
    }
    let schema = match cli.schema.as_deref() {
        Some(spec) => load_value(spec, "schema")?,
        None => return Err(eyre!("provide a schema with --schema")),
    };

    let mut content = match cli.content.as_deref() {
        Some(spec) => load_value(spec, "content")?,
        None => json!({}),
    };
    let type_name = cli
        .type_name
        .clone()
        .or_else(|| content_type_of(&content))
        .unwrap_or_else(|| "Document".to_string());
    if let Value::Object(map) = &mut content {
        map.entry("@type".to_string())
            .or_insert_with(|| Value::String(type_name.clone()));
    } else {
        return Err(eyre!("content must be a JSON object"));
    }

    let mut store = MemoryStore::new();
    store.insert_schema(&type_name, schema);
    store.insert_content(&cli.path, content);

    let mut options = UiOptions::default()
        .with_confirm_exit(!cli.no_confirm_exit)
        .with_reset_after_submit(cli.reset_after_submit);
    if let Some(file) = &cli.prefs_file {
        options = options.with_preferences_file(file.clone());
    }

    let saved = ContentUI::new(Box::new(store), cli.path.clone())
        .with_options(options)
        .run()
        .map_err(Report::msg)?;

    if let Some(payload) = saved {
        let rendered = serde_json::to_string_pretty(&payload)?;
        match &cli.output {
            Some(file) => fs::write(file, rendered)
                .wrap_err_with(|| format!("failed to write {}", file.display()))?,
            None => println!("{rendered}"),
        }
    }
    Ok(())
}

/// Resolve a spec to a JSON value: stdin for "-", then a file if one
/// exists at that path, otherwise the spec itself as inline JSON.
fn load_value(spec: &str, label: &str) -> Result<Value> {
    if spec == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read from stdin")?;
        return parse_json(&buffer, label);
    }
    match fs::read_to_string(spec) {
        Ok(contents) => parse_json(&contents, label),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            parse_json(spec, &format!("inline {label}"))
        }
        Err(err) => Err(Report::new(err).wrap_err(format!("failed to load {label} from {spec}"))),
    }
}

fn parse_json(contents: &str, label: &str) -> Result<Value> {
    serde_json::from_str(contents).wrap_err_with(|| format!("failed to parse {label} as JSON"))
}

fn content_type_of(content: &Value) -> Option<String> {
    content
        .get("@type")
        .and_then(Value::as_str)
        .map(str::to_string)
}
