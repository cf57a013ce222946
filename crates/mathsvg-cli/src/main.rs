use std::{
    fs,
    io::{IsTerminal, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use tracing::Level;

use mathsvg::PrettyPrint;

mod config_file;
mod scene;

use config_file::load_config_file;

/// Builds MathML and SVG markup from TOML scene files
#[derive(Parser, Debug)]
#[command(version, about = "Builds MathML and SVG markup from TOML scene files", long_about = None)]
struct Args {
    /// The scene file to render, or "-" to read it from stdin
    #[arg(value_name = "FILE")]
    scene: PathBuf,

    /// Reads the markup configuration from a TOML file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pretty-prints the output with indentation
    #[arg(short, long)]
    pretty: bool,

    /// Adds the xmlns attribute to the root element
    #[arg(long)]
    xmlns: bool,

    /// Fails when an element has the wrong number of children for its tag
    #[arg(long)]
    strict: bool,

    /// Logs every edit step and every lenient removal
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::ERROR
        })
        .with_writer(std::io::stderr)
        .init();

    let mut config = match args.config {
        Some(ref path) => match load_config_file(path) {
            Ok(config) => config.markup,
            Err(e) => {
                eprintln!("Error loading config file '{}': {}", path.display(), e);
                return ExitCode::from(1);
            }
        },
        None => Default::default(),
    };
    if args.pretty {
        config.pretty_print = PrettyPrint::Always;
    }
    config.xml_namespace |= args.xmlns;
    config.enforce_arity |= args.strict;

    let (name, source) = if args.scene == PathBuf::from("-") {
        let mut buffer = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("IO Error: {}", e);
            return ExitCode::from(1);
        }
        ("<stdin>".to_string(), buffer)
    } else {
        match fs::read_to_string(&args.scene) {
            Ok(source) => (args.scene.display().to_string(), source),
            Err(e) => {
                eprintln!("IO Error: {}", e);
                return ExitCode::from(1);
            }
        }
    };

    match scene::render(&source, config) {
        Ok(markup) => {
            println!("{}", markup);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let with_color = std::io::stderr().is_terminal();
            let report = e.to_report(&name, with_color);
            if report
                .eprint((name.as_str(), ariadne::Source::from(source.as_str())))
                .is_err()
            {
                eprintln!("{}: {}", name, e);
            }
            ExitCode::from(2)
        }
    }
}
