use clap::Parser;
use jtimeline::application::TimelineService;
use jtimeline::cli::{write_lines, Cli};
use jtimeline::error::TimelineError;
use jtimeline::infrastructure::{logging, Config, ConfigOverrides, FileSystemRepository};
use std::fs::File;
use std::io::{self, BufRead, BufReader};

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    logging::init(verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            if verbose {
                eprintln!("Error: {}", e.display_with_suggestions());
            } else {
                eprintln!("Error: {}", e);
            }
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TimelineError> {
    let config = Config::resolve(ConfigOverrides {
        journal_dir: cli.journal_dir,
        extension: cli.extension,
        recursive: cli.recursive,
        config_file: cli.config,
    })?;
    tracing::debug!(?config, "resolved configuration");

    let repo = FileSystemRepository::new(config.journal_dir, config.extension)
        .recursive(config.recursive);
    let service = TimelineService::new(repo);

    let lines = service.execute_with(|| -> Result<Option<Box<dyn BufRead>>, TimelineError> {
        if cli.no_annotations {
            return Ok(None);
        }
        match cli.input {
            Some(path) => {
                let file = File::open(&path).map_err(TimelineError::StreamRead)?;
                Ok(Some(Box::new(BufReader::new(file))))
            }
            None => Ok(Some(Box::new(io::stdin().lock()))),
        }
    })?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_lines(&lines, &mut out)
}
