use crate::config::cli::OutputFormat;
use crate::domain::model::Foyer;
use crate::utils::error::Result;
use std::io::Write;

pub const CSV_HEADER: [&str; 5] = ["idFoyer", "nomFoyer", "capaciteFoyer", "universite", "blocs"];

pub fn render_foyers<W: Write>(foyers: &[Foyer], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Table => {
            for foyer in foyers {
                writeln!(out, "{}", foyer)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, foyers)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(CSV_HEADER)?;
            for foyer in foyers {
                writer.write_record([
                    foyer.id_foyer().map(|id| id.to_string()).unwrap_or_default(),
                    foyer.nom_foyer().to_string(),
                    foyer.capacite_foyer().to_string(),
                    foyer
                        .universite()
                        .map(|u| u.nom_universite.clone())
                        .unwrap_or_default(),
                    foyer.blocs().len().to_string(),
                ])?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

pub fn render_foyer<W: Write>(foyer: &Foyer, out: &mut W) -> Result<()> {
    writeln!(out, "{}", foyer)?;
    Ok(())
}
