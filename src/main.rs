// Fri Oct 16 2026 - Alex

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use win32_layout_check::{
    config::Config,
    output::{ReportFormat, ReportGenerator, TestReporter},
    reference,
    table::{ConsistencyChecker, ExpectationTable},
    utils::{pluralize, LoggingUtils},
    CompiledLayout, LayoutChecker,
};

#[derive(Parser, Debug)]
#[command(name = "win32-layout-check")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Checks compiled win32 structure layouts against recorded i386 references", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,

    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Measure every table entry and report mismatches (default)
    Check(CheckArgs),
    /// List table sections and their row counts
    List(ListArgs),
    /// Cross-check the reference tables against themselves
    VerifyTable(ListArgs),
}

#[derive(Parser, Debug, Default)]
struct CheckArgs {
    /// Suite to run; repeat for several (default: all)
    #[arg(short, long)]
    suite: Vec<String>,

    /// Only check types whose name matches this regex
    #[arg(short, long)]
    filter: Option<String>,

    #[arg(long)]
    parallel: bool,

    #[arg(long)]
    threads: Option<usize>,

    /// Also print a line for every passing check
    #[arg(long)]
    report_success: bool,

    #[arg(long)]
    no_type_alignment: bool,

    #[arg(long)]
    no_field_alignment: bool,

    #[arg(long)]
    no_cross_check: bool,

    #[arg(long)]
    text_report: Option<PathBuf>,

    #[arg(long)]
    markdown_report: Option<PathBuf>,

    #[arg(long)]
    json_report: Option<PathBuf>,
}

#[derive(Parser, Debug, Default)]
struct ListArgs {
    #[arg(short, long)]
    suite: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if std::env::var_os("RUST_LOG").is_some() {
        LoggingUtils::init_from_env();
    } else {
        let level = LoggingUtils::level_from_str(&args.log_level);
        LoggingUtils::init_logger(level, !args.no_color && atty::is(atty::Stream::Stderr));
    }

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "[!]".red(), e);
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let mut config = match &args.config {
        Some(path) => Config::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };

    let use_color = config.use_color && !args.no_color && atty::is(atty::Stream::Stdout);
    colored::control::set_override(use_color);
    config.use_color = use_color;

    match args.command.unwrap_or_else(|| Command::Check(CheckArgs::default())) {
        Command::Check(check) => handle_check(apply_check_args(config, check)?),
        Command::List(list) => handle_list(&suites_or_default(&config, list.suite)),
        Command::VerifyTable(list) => handle_verify(&config, &suites_or_default(&config, list.suite)),
    }
}

fn suites_or_default(config: &Config, suites: Vec<String>) -> Vec<String> {
    if suites.is_empty() {
        config.suites.clone()
    } else {
        suites
    }
}

fn apply_check_args(mut config: Config, args: CheckArgs) -> anyhow::Result<Config> {
    if !args.suite.is_empty() {
        config.suites = args.suite;
    }
    if let Some(filter) = args.filter {
        config.type_filter = Some(filter);
    }
    if args.parallel {
        config.parallel = true;
    }
    if let Some(threads) = args.threads {
        config.max_threads = threads;
    }
    config.report_success |= args.report_success;
    config.check_type_alignment &= !args.no_type_alignment;
    config.check_field_alignment &= !args.no_field_alignment;
    config.cross_check &= !args.no_cross_check;
    config.text_report = args.text_report.or(config.text_report);
    config.markdown_report = args.markdown_report.or(config.markdown_report);
    config.json_report = args.json_report.or(config.json_report);

    config.validate()?;
    Ok(config)
}

fn load_suite(name: &str) -> anyhow::Result<ExpectationTable> {
    let table = reference::suite(name).ok_or_else(|| anyhow!("unknown suite: {}", name))??;
    Ok(table)
}

fn handle_check(config: Config) -> anyhow::Result<ExitCode> {
    let source = CompiledLayout::new().with_capabilities(config.capabilities());
    let mut checker = LayoutChecker::new(Arc::new(source));
    let mut consistency = ConsistencyChecker::new();
    if let Some(filter) = config.type_filter_regex()? {
        checker = checker.with_filter(filter.clone());
        consistency = consistency.with_filter(filter);
    }

    let reporter = TestReporter::new()
        .with_success_lines(config.report_success)
        .with_color(config.use_color);
    let multiple = config.suites.len() > 1;
    let mut ok = true;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for name in &config.suites {
        let table = load_suite(name)?;
        let run = if config.parallel {
            checker.run_parallel(&table, config.max_threads)
        } else {
            checker.run(&table)
        };
        let issues = if config.cross_check {
            consistency.check(&table)
        } else {
            Vec::new()
        };

        reporter.report_issues(name, &issues, &mut out)?;
        reporter.report(&run, &mut out)?;
        ok &= run.is_success() && issues.is_empty();

        let reports = [&config.text_report, &config.markdown_report, &config.json_report];
        for path in reports.into_iter().flatten() {
            let path = report_path(path, name, multiple);
            ReportGenerator::new(ReportFormat::from_path(&path))
                .with_passed(config.report_success)
                .generate_to_file(&run, &issues, &path)
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }

    out.flush()?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// With several suites each report file gets the suite name before its extension.
fn report_path(path: &Path, suite: &str, multiple: bool) -> PathBuf {
    if !multiple {
        return path.to_path_buf();
    }
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("report");
    let name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{}.{}", stem, suite, ext),
        None => format!("{}.{}", stem, suite),
    };
    path.with_file_name(name)
}

fn handle_list(suites: &[String]) -> anyhow::Result<ExitCode> {
    for name in suites {
        let table = load_suite(name)?;
        println!(
            "{} {} ({}, {})",
            "[+]".green(),
            table.name().bold(),
            pluralize(table.section_count(), "section", "sections"),
            pluralize(table.len(), "row", "rows")
        );

        for section in table.sections() {
            let packing = section.packing.map(|p| format!("pack {}", p)).unwrap_or_default();
            if section.is_documentation_only() {
                println!("    {:<32} {:<8} {}", section.name, packing, "not verified".dimmed());
            } else {
                println!(
                    "    {:<32} {:<8} {:>4} rows, {}",
                    section.name,
                    packing,
                    section.len(),
                    pluralize(section.field_count(), "field", "fields")
                );
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_verify(config: &Config, suites: &[String]) -> anyhow::Result<ExitCode> {
    let reporter = TestReporter::new().with_color(config.use_color);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut ok = true;

    for name in suites {
        let table = load_suite(name)?;
        let issues = ConsistencyChecker::new().check(&table);
        reporter.report_issues(name, &issues, &mut out)?;
        if issues.is_empty() {
            writeln!(out, "{} {}: {} consistent", "[+]".green(), name, pluralize(table.section_count(), "section", "sections"))?;
        }
        ok &= issues.is_empty();
    }

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_path_per_suite() {
        let path = Path::new("out/layout.md");
        assert_eq!(report_path(path, "kernel32", false), PathBuf::from("out/layout.md"));
        assert_eq!(report_path(path, "kernel32", true), PathBuf::from("out/layout.kernel32.md"));
        assert_eq!(report_path(Path::new("layout"), "windef", true), PathBuf::from("layout.windef"));
    }

    #[test]
    fn test_check_args_override_config() {
        let args = CheckArgs {
            suite: vec!["windef".to_string()],
            filter: Some("^LP".to_string()),
            threads: Some(2),
            no_field_alignment: true,
            no_cross_check: true,
            json_report: Some(PathBuf::from("run.json")),
            ..CheckArgs::default()
        };

        let config = apply_check_args(Config::default(), args).unwrap();
        assert_eq!(config.suites, vec!["windef"]);
        assert_eq!(config.type_filter.as_deref(), Some("^LP"));
        assert_eq!(config.max_threads, 2);
        assert!(!config.parallel);
        assert!(config.check_type_alignment);
        assert!(!config.check_field_alignment);
        assert!(!config.cross_check);
        assert_eq!(config.json_report, Some(PathBuf::from("run.json")));
        assert_eq!(config.text_report, None);
    }

    #[test]
    fn test_check_args_keep_config_switches_off() {
        let config = Config::default().with_alignment_checks(false, true);
        let config = apply_check_args(config, CheckArgs::default()).unwrap();
        assert!(!config.check_type_alignment);
        assert!(config.check_field_alignment);
        assert!(config.cross_check);
    }

    #[test]
    fn test_check_args_are_validated() {
        let args = CheckArgs { suite: vec!["user32".to_string()], ..CheckArgs::default() };
        assert!(apply_check_args(Config::default(), args).is_err());

        let args = CheckArgs { threads: Some(0), ..CheckArgs::default() };
        assert!(apply_check_args(Config::default(), args).is_err());
    }
}
