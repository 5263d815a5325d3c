use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::{error, info};
use seahorse::{App, Command, Context, Flag};

use staff_rota::files::PlanFile;
use staff_rota::generate_rota;
use staff_rota::input::Config;
use staff_rota::plan::{self, Rota};
use staff_rota::roster::Snapshot;
use staff_rota::time::{Month, Year};
use staff_rota::verifier::{DefaultVerifier, Verifier};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    if let Err(e) = run() {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

mod seahorse_exts {
    use std::path::PathBuf;

    use anyhow::Context as _;
    use seahorse::Context;

    /// Wraps a fallible action into the plain action type seahorse
    /// expects. The error is logged and the process exits non-zero.
    ///
    /// The expansion must stay free of captures, seahorse actions are
    /// function pointers.
    macro_rules! try_action {
        ($action:expr) => {
            |context: &::seahorse::Context| {
                let action = $action;
                if let Err(e) = action(context) {
                    ::log::error!("{:?}", e);
                    ::std::process::exit(1);
                }
            }
        };
    }

    pub(crate) use try_action;

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn required_string_flag(&self, name: &str) -> Result<String, anyhow::Error> {
            self.context()
                .string_flag(name)
                .with_context(|| anyhow::anyhow!("missing required flag \"{}\"", name))
        }

        fn required_path_flag(&self, name: &str) -> Result<PathBuf, anyhow::Error> {
            self.required_string_flag(name)
                .map(PathBuf::from)
                .with_context(|| anyhow::anyhow!("missing required flag \"{}\"", name))
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{try_action, ContextExt};

fn parse_year_month(input: &str) -> anyhow::Result<(Year, Month)> {
    let (year, month) = input.split_once('-').ok_or_else(|| {
        anyhow::anyhow!(
            "\"{}\" is not a valid month. Expected format: \"YYYY-MM\"",
            input
        )
    })?;

    Ok((
        Year::new(year.parse()?),
        Month::try_from(month.parse::<usize>()?)?,
    ))
}

fn build_config(
    rota: &Path,
    month: Option<&str>,
    output: Option<PathBuf>,
) -> anyhow::Result<Config> {
    let mut builder = Config::try_from_toml_file(rota)?;

    if let Some(input) = month {
        let (year, month) = parse_year_month(input)?;
        builder.month(year, month);
    }

    if let Some(output) = output {
        builder.output(output);
    }

    let config = builder.build();

    info!("finished building config");

    Ok(config)
}

fn make_extract_context_flags(
    context: &Context,
) -> anyhow::Result<(PathBuf, Option<String>, Option<PathBuf>)> {
    let rota = context.required_path_flag("rota")?;
    let month = context.string_flag("month").ok();
    let output = context.string_flag("output").ok().map(PathBuf::from);

    Ok((rota, month, output))
}

fn print_rota(snapshot: &Snapshot, rota: &Rota) {
    println!("rota for {:02}/{:04}", rota.month(), rota.year().as_usize());
    println!();

    for date in snapshot.days() {
        print!("{} {}", date, date.week_day().short_name());

        if snapshot.holidays().is_holiday(date) {
            println!("  closed");
            continue;
        }

        for (shift, definition) in snapshot.catalog().iter() {
            let name = match rota.table().get(date, shift) {
                Some(employee) => snapshot.roster().get(employee).name(),
                None => "open",
            };

            print!("  {}: {}", definition.name(), name);
        }

        println!();
    }

    println!();

    for (employee, definition) in snapshot.roster().iter() {
        let statistics = rota.statistics().for_employee(employee);

        print!(
            "{:<12} {} in {} days, {} per week, {} sundays",
            definition.name(),
            statistics.monthly_hours(),
            statistics.days_worked(),
            statistics.weekly_average(),
            statistics.sunday_count()
        );

        if let Some(shortfall) = rota
            .shortfalls()
            .iter()
            .find(|shortfall| shortfall.employee() == employee)
        {
            print!(" (short {})", shortfall.missing());
        }

        println!();
    }

    if !rota.open_slots().is_empty() {
        println!();
        println!("{} open slots remain", rota.open_slots().len());
    }
}

fn make(config: &Config) -> anyhow::Result<()> {
    let rota = generate_rota(config)?;

    print_rota(config.snapshot(), &rota);

    Ok(())
}

fn check(rota: &Path) -> anyhow::Result<()> {
    let config = Config::try_from_toml_file(rota)?.build();

    DefaultVerifier.verify(config.snapshot())?;

    println!("`{}` looks good", rota.display());

    Ok(())
}

fn show(plan: &Path) -> anyhow::Result<()> {
    let (snapshot, table) = PlanFile::load(plan)?.decode()?;
    let rota = plan::resume_month(&snapshot, table)?;

    print_rota(&snapshot, &rota);

    Ok(())
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let make_command = Command::new("make")
        .usage(format!("{} make [args]", args[0]))
        .description("Plans a month from the given rota file and saves the plan.")
        .flag(Flag::new("rota", seahorse::FlagType::String).description("Path to the rota file."))
        .flag(
            Flag::new("month", seahorse::FlagType::String).description(
                "[optional] Month to plan as `YYYY-MM`. Default: the month in the rota file.",
            ),
        )
        .flag(
            Flag::new("output", seahorse::FlagType::String)
                .description("[optional] Path to the plan file. Default: `rota-YYYY-MM.json`"),
        )
        .action(try_action!(|context: &Context| {
            let (rota, month, output) = make_extract_context_flags(context)?;
            let config = build_config(&rota, month.as_deref(), output)?;
            make(&config)
        }));

    let check_command = Command::new("check")
        .usage(format!("{} check [args]", args[0]))
        .description("Validates a rota file without planning anything.")
        .flag(Flag::new("rota", seahorse::FlagType::String).description("Path to the rota file."))
        .action(try_action!(|context: &Context| {
            let rota = context.required_path_flag("rota")?;
            check(&rota)
        }));

    let show_command = Command::new("show")
        .usage(format!("{} show [args]", args[0]))
        .description("Prints the table and summary of a saved plan file.")
        .flag(Flag::new("plan", seahorse::FlagType::String).description("Path to the plan file."))
        .action(try_action!(|context: &Context| {
            let plan = context.required_path_flag("plan")?;
            show(&plan)
        }));

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [command] [args]", args[0]))
        .command(make_command)
        .command(check_command)
        .command(show_command);

    app.run(args);

    Ok(())
}
