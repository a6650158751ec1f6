#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use roster_model::RosterRecord;

/// Header row of both output artifacts.
pub const OUTPUT_HEADERS: [&str; 7] = [
    "Nom",
    "Primer Cognom",
    "Segon Cognom",
    "DNI",
    "Correu corporatiu",
    "Grup",
    "Verificació DNI",
];

/// File name of the principal (valid group) list.
pub const PRINCIPAL_FILE_NAME: &str = "llistat_filtrat_primera_aparicio.csv";

/// File name of the secondary (no valid group, principal excluded) list.
pub const SECONDARY_FILE_NAME: &str = "llistat_sense_grup_valid_excloent_principal.csv";

/// Render a record list as UTF-8 CSV text with the fixed header row.
///
/// The internal position field is never written.
pub fn render_roster_csv(records: &[RosterRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(OUTPUT_HEADERS)
        .context("write header row")?;
    for record in records {
        writer
            .write_record([
                record.given_name.as_str(),
                record.surname1.as_str(),
                record.surname2.as_str(),
                record.dni.as_str(),
                record.email.as_str(),
                record.group.as_str(),
                record.verification.as_str(),
            ])
            .context("write record")?;
    }
    let bytes = writer.into_inner().context("flush csv writer")?;
    String::from_utf8(bytes).context("csv output must be utf-8")
}

/// Write one record list to `path`.
pub fn write_roster_csv(path: &Path, records: &[RosterRecord]) -> Result<()> {
    let rendered = render_roster_csv(records)?;
    std::fs::write(path, rendered).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), rows = records.len(), "list written");
    Ok(())
}

/// Write both lists under `output_dir` and return the written paths.
pub fn write_list_outputs(
    output_dir: &Path,
    principal: &[RosterRecord],
    secondary: &[RosterRecord],
) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    let principal_path = output_dir.join(PRINCIPAL_FILE_NAME);
    write_roster_csv(&principal_path, principal)?;
    let secondary_path = output_dir.join(SECONDARY_FILE_NAME);
    write_roster_csv(&secondary_path, secondary)?;
    Ok((principal_path, secondary_path))
}
