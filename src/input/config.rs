use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::input::toml_input::RotaFile;
use crate::roster::{Catalog, Roster, Snapshot};
use crate::time::{Month, Year};
use crate::utils;

pub struct Config {
    snapshot: Snapshot,
    output: PathBuf,
}

pub struct ConfigBuilder {
    rota: RotaFile,
    month: Option<(Year, Month)>,
    output: Option<PathBuf>,
}

impl ConfigBuilder {
    fn new(rota: RotaFile) -> Self {
        Self {
            rota,
            month: None,
            output: None,
        }
    }

    /// Plans this month instead of the one named in the file.
    pub fn month(&mut self, year: Year, month: Month) -> &mut Self {
        self.month = Some((year, month));
        self
    }

    pub fn output(&mut self, output: impl Into<PathBuf>) -> &mut Self {
        self.output = Some(output.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Config {
        let (general, employees, shifts) = self.rota.into_parts();

        let (year, month) = self
            .month
            .unwrap_or_else(|| (general.year(), general.month()));

        let output = self.output.unwrap_or_else(|| {
            PathBuf::from(format!(
                "rota-{:04}-{:02}.json",
                year.as_usize(),
                month.as_usize()
            ))
        });

        let holidays = general.holidays().cloned().unwrap_or_default();

        Config {
            snapshot: Snapshot::new(
                employees
                    .into_iter()
                    .map(|section| section.into_employee())
                    .collect::<Roster>(),
                shifts
                    .into_iter()
                    .map(|section| section.into_shift())
                    .collect::<Catalog>(),
                year,
                month,
                holidays,
            ),
            output,
        }
    }
}

impl Config {
    pub fn try_from_toml(input: &str) -> anyhow::Result<ConfigBuilder> {
        Ok(ConfigBuilder::new(toml::from_str(input)?))
    }

    pub fn try_from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<ConfigBuilder> {
        let path = path.as_ref();
        let input = utils::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;

        Self::try_from_toml(&input)
            .with_context(|| format!("failed to parse `{}`", path.display()))
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Where the plan file ends up.
    pub fn output(&self) -> &Path {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::Path;

    use pretty_assertions::assert_eq;

    const ROTA: &str = concat!(
        "[general]\n",
        "month = 9\n",
        "year = 2025\n",
        "\n",
        "[employee.Anna]\n",
        "minimum_hours = \"20:00\"\n",
        "maximum_hours = \"30:00\"\n",
        "\n",
        "[shift.Morning]\n",
        "start = \"09:00\"\n",
        "end = \"13:00\"\n",
    );

    #[test]
    fn test_defaults() {
        let config = Config::try_from_toml(ROTA).unwrap().build();

        assert_eq!(config.snapshot().year(), Year::new(2025));
        assert_eq!(config.snapshot().month(), Month::September);
        assert_eq!(config.output(), Path::new("rota-2025-09.json"));
        // no [general] holidays, so the default calendar applies
        assert_eq!(config.snapshot().holidays().len(), 5);
    }

    #[test]
    fn test_month_override() {
        let mut builder = Config::try_from_toml(ROTA).unwrap();
        builder.month(Year::new(2026), Month::January);
        let config = builder.build();

        assert_eq!(config.snapshot().year(), Year::new(2026));
        assert_eq!(config.snapshot().month(), Month::January);
        assert_eq!(config.output(), Path::new("rota-2026-01.json"));
    }

    #[test]
    fn test_output_override() {
        let mut builder = Config::try_from_toml(ROTA).unwrap();
        builder.output("plans/september.json");
        let config = builder.build();

        assert_eq!(config.output(), Path::new("plans/september.json"));
    }
}
