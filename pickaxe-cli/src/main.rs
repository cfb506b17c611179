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

mod cli;
mod cmds;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, Parser};
use pickaxe::{env, Progress};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Some(dir) = cli.game_dir {
        env::set_game_dir(dir);
    }

    match cli.command {
        Commands::Versions { snapshots } => {
            cmds::list_versions(snapshots).await
        },
        Commands::Install { mc_version, snapshots } => {
            cmds::install_version(mc_version, snapshots).await
        },
        Commands::Fabric { mc_version } => {
            cmds::install_fabric(mc_version).await
        },
        Commands::Launch { version, username, java, heap, fullscreen, width, height } => {
            cmds::launch_version(cmds::LaunchArgs {
                version, username, java, heap, fullscreen, width, height
            }).await
        }
    }
}

const PROGRESS_TICKS: u64 = 1000;

struct ProgressHandler {
    progress: ProgressBar
}

impl ProgressHandler {
    fn new() -> Self {
        ProgressHandler {
            progress: ProgressBar::with_draw_target(Some(PROGRESS_TICKS), ProgressDrawTarget::stdout())
                .with_style(ProgressStyle::with_template("{bar:40.cyan/blue} {percent}% {msg}").unwrap())
        }
    }

    fn finish(&self) {
        self.progress.finish_and_clear();
    }
}

impl Progress for ProgressHandler {
    fn update(&mut self, status: &str, progress: f64) {
        self.progress.set_message(status.to_string());
        self.progress.set_position((progress * PROGRESS_TICKS as f64) as u64);
    }
}
