use std::collections::BTreeMap;

use staff_rota::input::Config;
use staff_rota::plan::Rota;
use staff_rota::roster::{EmployeeId, Snapshot};
use staff_rota::time::WorkingDuration;

/// Parses a rota file and returns the snapshot it describes.
#[must_use]
pub fn make_snapshot(input: &str) -> Snapshot {
    Config::try_from_toml(input)
        .expect("toml should be valid")
        .build()
        .snapshot()
        .clone()
}

/// A three-employee shop in a 30-day month, closed on the 1st.
///
/// September 2025 starts on a monday and has four sundays, so the
/// month keeps 29 working dates and 58 slots.
#[must_use]
pub fn september_shop() -> &'static str {
    concat!(
        //
        "[general]\n",
        "month = 9\n",
        "year = 2025\n",
        "holidays = [\"09-01\"]\n",
        "\n",
        "[employee.A]\n",
        "minimum_hours = \"20:00\"\n",
        "maximum_hours = \"30:00\"\n",
        "rest_days = [\"sunday\"]\n",
        "\n",
        "[employee.B]\n",
        "minimum_hours = \"15:00\"\n",
        "maximum_hours = \"25:00\"\n",
        "rest_days = [\"wednesday\"]\n",
        "\n",
        "[employee.C]\n",
        "minimum_hours = \"10:00\"\n",
        "maximum_hours = \"40:00\"\n",
        "vacations = [\"2025-09-15\"]\n",
        "\n",
        "[shift.Morning]\n",
        "start = \"09:00\"\n",
        "end = \"13:00\"\n",
        "\n",
        "[shift.Afternoon]\n",
        "start = \"14:00\"\n",
        "end = \"18:00\"\n",
    )
}

/// Checks the rules every finished rota has to obey, whatever the input:
/// closed days stay empty, nobody works an unavailable date or twice on
/// the same date, and no week exceeds the contracted maximum.
pub fn assert_rota_is_sound(snapshot: &Snapshot, rota: &Rota) {
    let roster = snapshot.roster();
    let catalog = snapshot.catalog();

    for (date, row) in rota.table().days() {
        assert!(
            !snapshot.holidays().is_holiday(date),
            "{} is a closure and must stay empty",
            date
        );

        let mut seen = Vec::new();
        for &employee in row.iter().flatten() {
            assert!(
                roster.get(employee).can_work(date),
                "`{}` is not available on {}",
                roster.get(employee).name(),
                date
            );

            assert!(
                !seen.contains(&employee),
                "`{}` appears twice on {}",
                roster.get(employee).name(),
                date
            );
            seen.push(employee);
        }
    }

    let mut weekly: BTreeMap<(EmployeeId, usize), WorkingDuration> = BTreeMap::new();
    for (date, shift, employee) in rota.table().slots() {
        let Some(employee) = employee else { continue };

        *weekly.entry((employee, date.week_number())).or_default() +=
            catalog.get(shift).duration();
    }

    for ((employee, week), worked) in weekly {
        assert!(
            worked <= roster.get(employee).maximum_hours(),
            "`{}` works {} in week {}, above their maximum of {}",
            roster.get(employee).name(),
            worked,
            week,
            roster.get(employee).maximum_hours()
        );
    }
}

#[allow(dead_code)]
pub fn debug_setup() {
    std::env::set_var("RUST_BACKTRACE", "1");
    std::env::set_var("RUST_APP_LOG", "trace");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");
}
