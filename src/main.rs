use std::fs;
use std::path::Path;

use clap::Parser;

use guideline_guard::checker::{Analyzer, ResultSet, ScanContext};
use guideline_guard::cli::Cli;
use guideline_guard::config::SettingsLoader;
use guideline_guard::output::{
    HtmlFormatter, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use guideline_guard::scanner::{IgnoreFilter, TreeWalker};
use guideline_guard::{
    EXIT_CONFIG_ERROR, EXIT_GUIDELINES_FAILED, EXIT_SUCCESS, GuidelineGuardError,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> guideline_guard::Result<i32> {
    let root = cli.path.as_path();
    if !root.is_dir() {
        return Err(GuidelineGuardError::Config(format!(
            "Project root is not a directory: {}",
            root.display()
        )));
    }

    // 1. Resolve settings
    let mut settings = SettingsLoader::new().load(root, cli.config.as_deref())?;
    if let Some(max_line_length) = cli.max_line_length {
        settings.code_style.max_line_length = max_line_length;
    }

    // 2. Select rule groups
    let analyzer = if cli.only.is_empty() {
        Analyzer::new()
    } else {
        Analyzer::with_only(&cli.only)?
    };

    // 3. Walk and analyze
    let walker = TreeWalker::new(root, IgnoreFilter::load(root, &cli.exclude));
    let ctx = ScanContext::new(&walker, &settings);
    let results = analyzer.run(&ctx);

    // 4. Report
    let output = format_output(cli, &results)?;
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    if let Some(path) = cli.html_report.as_deref() {
        fs::write(path, HtmlFormatter::new().format(&results)?)?;
        if !cli.quiet {
            eprintln!("HTML report written to {}", path.display());
        }
    }

    Ok(exit_code(cli, &results))
}

fn format_output(cli: &Cli, results: &ResultSet) -> guideline_guard::Result<String> {
    match cli.format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(cli.color.into(), cli.verbose).format(results)
        }
        OutputFormat::Json => JsonFormatter.format(results),
        OutputFormat::Html => HtmlFormatter::new().format(results),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> guideline_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn exit_code(cli: &Cli, results: &ResultSet) -> i32 {
    if cli.warn_only {
        return EXIT_SUCCESS;
    }
    if results.has_failures() || (cli.strict && results.has_warnings()) {
        EXIT_GUIDELINES_FAILED
    } else {
        EXIT_SUCCESS
    }
}
