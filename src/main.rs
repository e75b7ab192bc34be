use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser as ClapParser;
use flowscript::{
    config::{Config, OutputFormat},
    init_tracing, parse, render_error, Report,
};

#[derive(ClapParser)]
#[command(author, version, about = "FlowScript lexical analyzer")]
struct Cli {
    /// Source file to analyze. Reads stdin when omitted
    file: Option<PathBuf>,
    /// Output format (text or json)
    #[arg(short, long)]
    format: Option<OutputFormat>,
    /// JSON config file with output settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Do not print the token table
    #[arg(long)]
    no_tokens: bool,
    /// Print the variable id table
    #[arg(long)]
    variables: bool,
    /// Print the offending source line under each error
    #[arg(long)]
    show_source: bool,
}

impl Cli {
    fn load_config(&self) -> io::Result<Config> {
        let config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        Ok(self.apply_overrides(config))
    }

    /// Command-line flags take precedence over the config file.
    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.no_tokens {
            config.show_tokens = false;
        }
        if self.variables {
            config.show_variables = true;
        }
        if self.show_source {
            config.show_source = true;
        }

        config
    }

    fn read_source(&self) -> io::Result<String> {
        match &self.file {
            Some(path) => fs::read_to_string(path),
            None => {
                let mut source = String::new();
                io::stdin().read_to_string(&mut source)?;
                Ok(source)
            }
        }
    }
}

fn write_text(
    out: &mut impl Write,
    report: &Report,
    source: &str,
    config: &Config,
) -> io::Result<()> {
    if config.show_tokens && !report.tokens.is_empty() {
        writeln!(out, "Symbol Table")?;
        writeln!(out, "{:<6} {:<12} {}", "Line", "Class Part", "Value Part")?;
        for token in &report.tokens {
            writeln!(
                out,
                "{:<6} {:<12} {}",
                token.line_number,
                token.class_part.to_string(),
                token.value_part
            )?;
        }
        writeln!(out)?;
    }

    if config.show_variables && !report.variables.is_empty() {
        writeln!(out, "Variables")?;
        for variable in &report.variables {
            writeln!(out, "  {:<6} {}", variable.id.to_string(), variable.name)?;
        }
        writeln!(out)?;
    }

    for summary in &report.summaries {
        writeln!(out, "{}", summary)?;
    }

    if report.is_ok() {
        return Ok(());
    }

    if !report.summaries.is_empty() {
        writeln!(out)?;
    }

    if config.show_source {
        for error in &report.diagnostics {
            write!(out, "{}", render_error(error, source))?;
        }
    } else {
        for error in &report.errors {
            writeln!(out, "{}", error)?;
        }
    }

    Ok(())
}

fn write_report(
    out: &mut impl Write,
    report: &Report,
    source: &str,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    match config.format {
        OutputFormat::Text => write_text(out, report, source, config)?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }

    Ok(())
}

/// 0 when every line lexed cleanly, 1 otherwise.
fn exit_status(report: &Report) -> u8 {
    if report.is_ok() {
        0
    } else {
        1
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    let source = cli.read_source()?;

    let report = parse(&source);

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &report, &source, &config)?;

    Ok(ExitCode::from(exit_status(&report)))
}
