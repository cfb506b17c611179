/*
 * Pickaxe - A Minecraft Launcher
 * Copyright (C) 2025 Pickaxe contributors
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use anyhow::{anyhow, bail, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, FuzzySelect};
use std::fs;
use uuid::Uuid;

use pickaxe::{
    build_arguments, env, is_version_installed, merged_catalog, resolve,
    AssetClient, AssetManager, GameProcess, Installer, LaunchAccount,
    LaunchSettings, LOADER_PREFIX
};
use pickaxe::json::{CatalogEntry, ReleaseType};

use crate::ProgressHandler;

fn console_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

fn selectable(entry: &CatalogEntry, snapshots: bool) -> bool {
    entry.is_local || entry.release_type == ReleaseType::Release
        || (snapshots && entry.release_type == ReleaseType::Snapshot)
}

pub async fn list_versions(snapshots: bool) -> Result<()> {
    let client = AssetClient::new();
    let catalog = merged_catalog(&client).await?;

    for entry in catalog.iter().filter(|e| selectable(e, snapshots)) {
        let marker = if entry.is_local { "*" } else { " " };

        println!("{} {} {} {}",
            marker,
            style(&entry.id).cyan(),
            style(entry.release_type.as_str()).dim(),
            style(entry.release_time.format("%Y-%m-%d")).dim());
    }

    Ok(())
}

async fn pick_version(client: &AssetClient, snapshots: bool) -> Result<CatalogEntry> {
    let catalog = merged_catalog(client).await?;

    let entries: Vec<&CatalogEntry> = catalog.iter()
        .filter(|e| selectable(e, snapshots) && !e.is_loader)
        .collect();

    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();

    let selection = FuzzySelect::with_theme(&console_theme())
        .with_prompt("Select version")
        .items(&ids)
        .default(0)
        .interact()?;

    Ok(entries[selection].clone())
}

async fn find_remote_entry(client: &AssetClient, version_id: &str) -> Result<CatalogEntry> {
    let catalog = client.fetch_catalog().await?;

    catalog.versions.iter()
        .find(|v| v.id == version_id)
        .cloned()
        .ok_or(anyhow!("Version '{version_id}' not found"))
}

pub async fn install_version(mc_version: Option<String>, snapshots: bool) -> Result<()> {
    let assets = AssetManager::new()?;

    let entry = match mc_version {
        Some(id) => find_remote_entry(assets.client(), &id).await?,
        None => pick_version(assets.client(), snapshots).await?
    };

    let mut progress = ProgressHandler::new();
    assets.download_version(&entry, &mut progress).await?;
    progress.finish();

    println!("Installed {}", style(&entry.id).cyan());

    Ok(())
}

pub async fn install_fabric(mc_version: Option<String>) -> Result<()> {
    let installer = Installer::new()?;

    let mc_version = match mc_version {
        Some(version) => version,
        None => pick_fabric_game_version(installer.assets().client()).await?
    };

    let mut progress = ProgressHandler::new();
    let fabric_id = installer.install_fabric(&mc_version, &mut progress).await?;
    progress.finish();

    println!("Installed {}", style(&fabric_id).cyan());

    Ok(())
}

async fn pick_fabric_game_version(client: &AssetClient) -> Result<String> {
    let versions = client.fetch_fabric_game_versions().await?;

    let stable: Vec<&str> = versions.iter()
        .filter(|v| v.stable)
        .map(|v| v.version.as_str())
        .collect();

    let selection = FuzzySelect::with_theme(&console_theme())
        .with_prompt("Select version")
        .items(&stable)
        .default(0)
        .interact()?;

    Ok(stable[selection].to_string())
}

pub struct LaunchArgs {
    pub version: String,
    pub username: String,
    pub java: Option<String>,
    pub heap: Option<u32>,
    pub fullscreen: bool,
    pub width: Option<u32>,
    pub height: Option<u32>
}

pub async fn launch_version(args: LaunchArgs) -> Result<()> {
    let assets = AssetManager::new()?;

    if !is_version_installed(&args.version) {
        if args.version.starts_with(LOADER_PREFIX) {
            bail!("Version '{}' is not installed, install it with the fabric command", args.version);
        }

        let entry = find_remote_entry(assets.client(), &args.version).await?;

        let mut progress = ProgressHandler::new();
        assets.download_version(&entry, &mut progress).await?;
        progress.finish();
    }

    let manifest = assets.get_game_manifest(&args.version).await?;
    let effective = resolve(manifest)?;

    let mut settings = LaunchSettings {
        java_path: args.java,
        fullscreen: args.fullscreen,
        window_width: args.width,
        window_height: args.height,
        ..Default::default()
    };

    if let Some(heap) = args.heap {
        settings.max_heap_mb = heap;
    }

    let account = LaunchAccount::offline(&args.username, &Uuid::new_v4().to_string());

    let game_dir = env::get_game_dir();
    fs::create_dir_all(&game_dir)?;

    let java_args = build_arguments(&effective, &account, &settings)?;

    let process = GameProcess::new();
    let code = process.launch(settings.java_path(), &java_args, &game_dir).await?;

    if code != 0 {
        println!("{}", style(format!("Game exited with code {code}")).red());
    }

    Ok(())
}
