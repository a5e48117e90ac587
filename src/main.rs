use clap::{Arg, ArgAction, Command};
use sankhya::{Namer, NamerOptions, NumberReport, SanskritNumber};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("sankhya")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Spell out numbers as Sanskrit number words")
        .arg(
            Arg::new("number")
                .help("Number in ASCII or Devanagari digits (e.g. 123 or १२३)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("add")
                .long("add")
                .short('a')
                .help("Add this number to the first one before naming"),
        )
        .arg(
            Arg::new("decompose")
                .long("decompose")
                .short('d')
                .help("Print place-value components instead of words")
                .conflicts_with("json")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .short('j')
                .help("Print value, components and words as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-leading-connective")
                .long("no-leading-connective")
                .help("Only use अधिक between terms, never before the first one")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("keep-empty")
                .long("keep-empty")
                .help("Keep empty tokens for zero units and tens digits")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more detail to stderr (repeat for more)")
                .action(ArgAction::Count),
        )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    init_tracing(matches.get_count("verbose"));

    let input = matches
        .get_one::<String>("number")
        .ok_or("missing number argument")?;
    let mut number = match input.parse::<SanskritNumber>() {
        Ok(number) => number,
        Err(e) => {
            eprintln!("❌ Could not read '{}': {}", input, e);
            return Err(e.into());
        }
    };

    if let Some(other) = matches.get_one::<String>("add") {
        let other = match other.parse::<SanskritNumber>() {
            Ok(other) => other,
            Err(e) => {
                eprintln!("❌ Could not read '{}': {}", other, e);
                return Err(e.into());
            }
        };
        number = match number.checked_add(&other) {
            Ok(sum) => sum,
            Err(e) => {
                eprintln!("❌ Failed to add: {}", e);
                return Err(e.into());
            }
        };
        debug!(sum = number.value(), "added operands");
    }

    let options = NamerOptions::new()
        .with_connective_before_first(!matches.get_flag("no-leading-connective"))
        .with_empty_tokens(matches.get_flag("keep-empty"));
    let namer = Namer::with_options(options);
    debug!(?options, "naming {}", number.value());

    if matches.get_flag("json") {
        let report = NumberReport::new(&number, &namer)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if matches.get_flag("decompose") {
        let parts = number.decompose()?;
        let components: Vec<String> = parts.into_iter().map(|c| c.to_string()).collect();
        println!("{}", components.join(" + "));
    } else {
        println!("{}", number.words_with(&namer)?);
    }

    Ok(())
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
