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

pub use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set the game directory [default: the platform .minecraft dir]
    #[arg(short, global = true)]
    pub game_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand)]
pub enum Commands {
    /// List installed and available versions
    Versions {
        /// Include snapshot versions
        #[arg(long)]
        snapshots: bool
    },

    /// Download a version of the game
    Install {
        /// Version of minecraft or prompt to select from list when not specified
        mc_version: Option<String>,

        /// Enable snapshots in prompt
        #[arg(long)]
        snapshots: bool
    },

    /// Install the fabric loader for a version of minecraft
    Fabric {
        /// Version of minecraft or prompt to select from list when not specified
        mc_version: Option<String>
    },

    /// Launch a version of the game, downloading it first if needed
    Launch {
        /// Version id, plain or fabric-loader overlay
        version: String,

        /// Player name
        #[arg(short, long, default_value = "Player")]
        username: String,

        /// Path to the java executable
        #[arg(long)]
        java: Option<String>,

        /// Maximum heap size in megabytes
        #[arg(long)]
        heap: Option<u32>,

        /// Launch the game fullscreen
        #[arg(long)]
        fullscreen: bool,

        /// Window width
        #[arg(long)]
        width: Option<u32>,

        /// Window height
        #[arg(long)]
        height: Option<u32>
    }
}
