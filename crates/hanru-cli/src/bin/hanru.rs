use std::fs;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use hanru_cli::commands::console::{self, ConsoleOptions};
use hanru_cli::commands::{config_ops, convert_ops};
use hanru_cli::trace_init::init_tracing;
use hanru_core::phonetic::PhoneticTables;
use hanru_core::settings::settings;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(
    name = "hanru",
    about = "Transliterate Hangul syllables into Russian Cyrillic",
    long_about = "Transliterate Hangul syllables into Russian Cyrillic.\n\n\
                  Without a subcommand, reads UTF-8 text from stdin line by line \
                  and writes one transliterated line per input line."
)]
struct Cli {
    /// Custom phonetic tables (TOML)
    #[arg(long, global = true)]
    tables: Option<PathBuf>,
    /// Custom settings (TOML)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Write a JSON trace log into this directory
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    /// Do not print the prompt
    #[arg(short, long)]
    quiet: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate the given texts, one output line each
    Convert {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Show how each codepoint of a text is transliterated
    Explain {
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export the built-in phonetic tables as TOML
    TablesExport,
    /// Validate a custom phonetic tables TOML file
    TablesValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let _trace_guard = cli.trace_dir.as_deref().and_then(|dir| {
        die!(fs::create_dir_all(dir), "Error creating trace directory: {}");
        init_tracing(dir)
    });

    if let Some(ref path) = cli.tables {
        die!(config_ops::install_tables(path), "{}");
    }
    if let Some(ref path) = cli.settings {
        die!(config_ops::install_settings(path), "{}");
    }

    let tables = PhoneticTables::global();
    let stdout = io::stdout();

    match cli.command {
        None => {
            let options = ConsoleOptions::from_settings(settings(), cli.quiet);
            let stdin = io::stdin();
            die!(
                console::run(tables, &options, stdin.lock(), BufWriter::new(stdout.lock())),
                "Error: {}"
            );
        }
        Some(Command::Convert { text }) => {
            die!(
                convert_ops::convert(
                    tables,
                    &text,
                    settings().output.line_ending,
                    stdout.lock()
                ),
                "Error: {}"
            );
        }
        Some(Command::Explain { text, json }) => {
            die!(
                convert_ops::explain(tables, &text, json, stdout.lock()),
                "Error: {}"
            );
        }
        Some(Command::TablesExport) => print!("{}", config_ops::tables_export()),
        Some(Command::TablesValidate { file }) => {
            println!("{}", die!(config_ops::tables_validate(&file), "{}"));
        }
        Some(Command::SettingsExport) => print!("{}", config_ops::settings_export()),
        Some(Command::SettingsValidate { file }) => {
            println!("{}", die!(config_ops::settings_validate(&file), "{}"));
        }
    }
}
