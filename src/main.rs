use plume_ai_lib::api::{analyze_file, analyze_text, get_config};
use plume_ai_lib::services::{render_html, render_json, render_text};
use tracing::info;

const VALUE_FLAGS: [&str; 3] = ["--format", "--out", "--top"];
const BOOL_FLAGS: [&str; 1] = ["--quiet"];

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

fn parse_top_flag(args: &[String]) -> Result<Option<i32>, String> {
    match parse_arg_value(args, "--top") {
        Some(raw) => raw
            .parse::<i32>()
            .map(Some)
            .map_err(|_| format!("invalid --top value: {}", raw)),
        None => Ok(None),
    }
}

fn positional_args(args: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if VALUE_FLAGS.contains(&arg.as_str()) {
            i += 2;
            continue;
        }
        if BOOL_FLAGS.contains(&arg.as_str()) {
            i += 1;
            continue;
        }
        out.push(arg.clone());
        i += 1;
    }
    out
}

#[tokio::main]
async fn main() -> Result<(), String> {
    plume_ai_lib::init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage:\n  plumeAI <fichier>... [--format text|html|json] [--out <chemin>] [--top <n>] [--quiet]\n\nNotes:\n  - Utiliser `-` pour lire le texte depuis stdin.\n  - Formats de fichier pris en charge : .txt, .md, .docx, .pdf.\n  - Sans --format, le format par défaut vient de la configuration."
        );
        return Ok(());
    }

    let format_flag = parse_arg_value(&args, "--format");
    let out_path = parse_arg_value(&args, "--out");
    let top_override = parse_top_flag(&args)?;
    let quiet = has_flag(&args, "--quiet");

    let inputs = positional_args(&args);
    if inputs.is_empty() {
        return Err("no input given".to_string());
    }
    if out_path.is_some() && inputs.len() > 1 {
        return Err("--out expects a single input".to_string());
    }

    let config = get_config().await?;
    let format = format_flag.unwrap_or_else(|| config.report.default_format.clone());

    for input in &inputs {
        let (display, response) = if input == "-" {
            let text = std::io::read_to_string(std::io::stdin())
                .map_err(|e| format!("read stdin failed: {}", e))?;
            ("stdin".to_string(), analyze_text(text, top_override).await?)
        } else {
            let bytes = std::fs::read(input).map_err(|e| format!("read file failed: {}", e))?;
            let file_name = std::path::Path::new(input)
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| input.clone());
            (input.clone(), analyze_file(file_name, bytes, top_override).await?)
        };

        let report = match format.as_str() {
            "text" => render_text(&response.result),
            "html" => render_html(&response.result),
            "json" => render_json(&response.result)?,
            other => return Err(format!("unknown format: {}", other)),
        };

        if quiet {
            println!(
                "{}\t{}\t{}",
                response.result.score, response.result.decision, display
            );
        } else if out_path.is_none() {
            println!("File: {}", display);
            println!("{}", report);
        }

        if let Some(ref out) = out_path {
            std::fs::write(out, &report).map_err(|e| format!("write out failed: {}", e))?;
            if !quiet {
                println!("Wrote report: {}", out);
            }
        }
    }

    info!("=== PlumeAI Exited ===");
    Ok(())
}
