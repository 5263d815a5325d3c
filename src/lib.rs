mod utils;

pub mod files;
pub mod input;
pub mod plan;
pub mod roster;
pub mod time;
pub mod verifier;

use std::fs;

use log::{info, warn};

use crate::files::PlanFile;
use crate::input::Config;
use crate::plan::Rota;

/// Plans the configured month and saves the plan file.
pub fn generate_rota(config: &Config) -> anyhow::Result<Rota> {
    info!(
        "planning {:02}/{:04}",
        config.snapshot().month().as_usize(),
        config.snapshot().year().as_usize()
    );

    let rota = plan::plan_month(config.snapshot())?;

    for shortfall in rota.shortfalls() {
        warn!(
            "`{}` stays {} below the contracted minimum",
            config.snapshot().roster().get(shortfall.employee()).name(),
            shortfall.missing()
        );
    }

    if !rota.open_slots().is_empty() {
        warn!("{} slots stay open", rota.open_slots().len());
    }

    let output = config.output();
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    PlanFile::new(config.snapshot(), &rota).save(output)?;

    info!("saved plan to `{}`", output.display());

    Ok(rota)
}
