use crate::adapters::{FileFoyerRepository, InMemoryFoyerRepository, LocalStorage};
use crate::app::render;
use crate::config::cli::Command;
use crate::config::AppConfig;
use crate::domain::model::Foyer;
use crate::domain::services::{FoyerService, FoyerServiceImpl};
use crate::utils::error::Result;
use std::io::Write;

/// 依配置選擇 repository 後執行指令
pub async fn run<W: Write>(config: &AppConfig, command: Command, out: &mut W) -> Result<()> {
    match config.backend() {
        "memory" => {
            tracing::debug!("Using in-memory repository");
            let service = FoyerServiceImpl::new(InMemoryFoyerRepository::new());
            execute(&service, command, out).await
        }
        _ => {
            tracing::debug!(
                "Using file repository at {}/{}",
                config.data_dir(),
                config.file_name()
            );
            let repository = FileFoyerRepository::with_file_name(
                LocalStorage::new(config.data_dir()),
                config.file_name(),
            );
            execute(&FoyerServiceImpl::new(repository), command, out).await
        }
    }
}

pub async fn execute<S, W>(service: &S, command: Command, out: &mut W) -> Result<()>
where
    S: FoyerService + ?Sized,
    W: Write,
{
    match command {
        Command::List { format } => {
            let foyers = service.retrieve_all_foyers().await?;
            render::render_foyers(&foyers, format, out)?;
        }
        Command::Get { id } => {
            let foyer = service.retrieve_foyer(id).await?;
            render::render_foyer(&foyer, out)?;
        }
        Command::Add {
            nom,
            capacite,
            json,
        } => {
            let input = build_input(nom, capacite, json)?;
            let saved = service.add_foyer(input).await?;
            tracing::info!("✅ Added {}", saved);
            render::render_foyer(&saved, out)?;
        }
        Command::Modify { id, nom, capacite } => {
            let mut foyer = service.retrieve_foyer(id).await?;
            if let Some(nom) = nom {
                foyer.set_nom_foyer(nom);
            }
            if let Some(capacite) = capacite {
                foyer.set_capacite_foyer(capacite);
            }
            let saved = service.modify_foyer(foyer).await?;
            tracing::info!("✅ Modified {}", saved);
            render::render_foyer(&saved, out)?;
        }
        Command::Remove { id } => {
            service.remove_foyer(id).await?;
            tracing::info!("🗑️ Removed foyer {}", id);
        }
    }
    Ok(())
}

/// `--json` 優先；沒有任何輸入時回傳 `None`，交由 service 拒絕
fn build_input(nom: Option<String>, capacite: Option<i64>, json: Option<String>) -> Result<Option<Foyer>> {
    if let Some(payload) = json {
        return Ok(serde_json::from_str::<Option<Foyer>>(&payload)?);
    }

    if nom.is_none() && capacite.is_none() {
        return Ok(None);
    }

    let mut foyer = Foyer::new();
    foyer.set_nom_foyer(nom.unwrap_or_default());
    foyer.set_capacite_foyer(capacite.unwrap_or_default());
    Ok(Some(foyer))
}
