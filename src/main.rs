use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use oath_dialects::loader::{batch_output_path, ensure_dir, load_config, read_input, write_output};
use oath_dialects::{
    BatchEntry, BatchRecord, Config, Dialect, DialectError, DialectResult, Dispatcher,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("oath-translate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate English text into fantasy dialects")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("JSON configuration file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed the random generator for reproducible output")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("no-flourish")
                .long("no-flourish")
                .help("Never add openers or interjections (other random rewrites still apply; see --plain)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .help("Deterministic output: skip every random step")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log each translation step")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("single")
                .about("Translate a file through one dialect")
                .arg(path_arg("input", "Input text file", 1))
                .arg(path_arg("output", "Output file", 2))
                .arg(dialect_arg(3)),
        )
        .subcommand(
            Command::new("all")
                .about("Translate a file through every dialect")
                .arg(path_arg("input", "Input text file", 1))
                .arg(path_arg("output-dir", "Directory for <stem>_<dialect>.txt files", 2))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print a JSON summary of the batch")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("text")
                .about("Translate inline text")
                .arg(dialect_arg(1))
                .arg(
                    Arg::new("words")
                        .help("Text to translate")
                        .required(true)
                        .num_args(1..)
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("repl")
                .about("Translate lines interactively until 'exit' or 'quit'")
                .arg(dialect_arg(1)),
        )
}

fn path_arg(name: &'static str, help: &'static str, index: usize) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .index(index)
        .value_parser(value_parser!(PathBuf))
}

fn dialect_arg(index: usize) -> Arg {
    Arg::new("dialect")
        .help("Dialect: grukk, lord, tiny or wild")
        .required(true)
        .index(index)
}

fn required<'a, T: Clone + Send + Sync + 'static>(
    matches: &'a ArgMatches,
    name: &str,
) -> DialectResult<&'a T> {
    matches
        .get_one::<T>(name)
        .ok_or_else(|| DialectError::Config(format!("Missing argument: {}", name)))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn resolve_config(matches: &ArgMatches) -> DialectResult<Config> {
    let base = match matches.get_one::<PathBuf>("config") {
        Some(path) => load_config(path).await?,
        None => Config::default(),
    };
    let config = base.with_env()?.with_flags(
        matches.get_one::<u64>("seed").copied(),
        matches.get_flag("no-flourish"),
        matches.get_flag("plain"),
    );
    debug!(?config, "resolved configuration");
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    match run(&matches).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(matches: &ArgMatches) -> DialectResult<()> {
    let config = resolve_config(matches).await?;
    let mut dispatcher = Dispatcher::from_config(&config);

    match matches.subcommand() {
        Some(("single", sub)) => run_single(&mut dispatcher, sub).await,
        Some(("all", sub)) => run_all(&mut dispatcher, sub).await,
        Some(("text", sub)) => {
            let dialect: Dialect = required::<String>(sub, "dialect")?.parse()?;
            let words: Vec<&str> = sub
                .get_many::<String>("words")
                .map(|values| values.map(String::as_str).collect())
                .unwrap_or_default();
            println!("{}", dispatcher.translate_with(dialect, &words.join(" "))?);
            Ok(())
        }
        Some(("repl", sub)) => {
            let dialect: Dialect = required::<String>(sub, "dialect")?.parse()?;
            run_repl(&mut dispatcher, dialect).await
        }
        _ => Err(DialectError::Config("No command given".to_string())),
    }
}

async fn run_single(dispatcher: &mut Dispatcher, matches: &ArgMatches) -> DialectResult<()> {
    // Validate the selector before touching any file
    let dialect: Dialect = required::<String>(matches, "dialect")?.parse()?;
    let input = required::<PathBuf>(matches, "input")?;
    let output = required::<PathBuf>(matches, "output")?;

    let text = read_input(input).await?;
    let translated = dispatcher.translate_with(dialect, &text)?;
    write_output(output, &translated).await?;

    info!(dialect = %dialect, output = %output.display(), "translation written");
    println!(
        "✅ {} → {} ({})",
        input.display(),
        output.display(),
        dialect.display_name()
    );
    Ok(())
}

async fn run_all(dispatcher: &mut Dispatcher, matches: &ArgMatches) -> DialectResult<()> {
    let input = required::<PathBuf>(matches, "input")?;
    let output_dir = required::<PathBuf>(matches, "output-dir")?;
    let json = matches.get_flag("json");

    ensure_dir(output_dir).await?;
    let text = read_input(input).await?;

    let mut records = Vec::new();
    for BatchEntry { dialect, result } in dispatcher.translate_all(&text) {
        let result = match result {
            Ok(translated) => {
                let path = batch_output_path(input, output_dir, dialect);
                write_output(&path, &translated).await.map(|()| {
                    if !json {
                        println!("✅ {}: {}", dialect.display_name(), path.display());
                    }
                    translated
                })
            }
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            eprintln!("⚠️  {}: {}", dialect.display_name(), e);
        }
        records.push(BatchRecord::from(&BatchEntry { dialect, result }));
    }

    if json {
        let summary = serde_json::to_string_pretty(&records)
            .map_err(|e| DialectError::Io(format!("Failed to encode summary: {}", e)))?;
        println!("{}", summary);
    }

    let succeeded = records.iter().filter(|r| r.error.is_none()).count();
    if succeeded == 0 {
        return Err(DialectError::TranslationError(
            "every dialect failed".to_string(),
        ));
    }
    Ok(())
}

async fn run_repl(dispatcher: &mut Dispatcher, dialect: Dialect) -> DialectResult<()> {
    let name = dialect.display_name();
    let farewell = dispatcher.farewell(dialect).unwrap_or("Farewell.").to_string();

    println!("=== {} TRANSLATOR ===", name.to_uppercase());
    println!("Type 'exit' or 'quit' to end the session.");

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt(&mut stdout)
            .await
            .map_err(|e| DialectError::Io(format!("Failed to write prompt: {}", e)))?;

        let line = lines
            .next_line()
            .await
            .map_err(|e| DialectError::Io(format!("Failed to read input: {}", e)))?;
        let Some(line) = line else {
            println!();
            println!("{}", farewell);
            return Ok(());
        };

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            println!("{}", farewell);
            return Ok(());
        }

        match dispatcher.translate_with(dialect, trimmed) {
            Ok(translated) => println!("{}: {}", name, translated),
            Err(e) => eprintln!("❌ {}", e),
        }
    }
}

async fn prompt(stdout: &mut Stdout) -> std::io::Result<()> {
    stdout.write_all(b"\nEnglish> ").await?;
    stdout.flush().await
}
