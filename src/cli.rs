use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::config::Settings;
use commands::{inspect, render, serve};

#[derive(Parser)]
#[command(name = "ses-dashboard")]
#[command(about = "Architecture health dashboard: snapshot server and offline chart tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the analytics snapshots to the dashboard
    Serve {
        /// Directory holding health_history.json, forecast_output.json,
        /// health_output.json and risk_output.json
        #[arg(short, long, env = "SES_DATA_DIR")]
        data_dir: Option<PathBuf>,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:8000, 127.0.0.1:8080)
        #[arg(short, long, env = "SES_BIND_ADDRESS")]
        bind_address: Option<String>,
    },
    /// Render the forecast timeline of a snapshot to a standalone SVG
    ///
    /// The input is either a saved `/api/forecast/` response or a snapshot
    /// data directory.
    Render {
        #[arg(short, long)]
        input: PathBuf,

        /// Output file; the SVG is written to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long)]
        width: Option<f64>,

        #[arg(long)]
        height: Option<f64>,
    },
    /// Print the derived forecast metrics and scale domains as JSON
    Inspect {
        #[arg(short, long)]
        input: PathBuf,

        /// Plot-area x coordinate to resolve to the nearest point
        #[arg(long, allow_hyphen_values = true)]
        hover_x: Option<f64>,
    },
}

impl Cli {
    pub async fn run(self, mut settings: Settings) -> Result<()> {
        match self.command {
            Commands::Serve { data_dir, bind_address } => {
                if let Some(data_dir) = data_dir {
                    settings.data_dir = data_dir;
                }
                if let Some(bind_address) = bind_address {
                    settings.bind_address = bind_address;
                }
                serve(&settings).await?;
            }
            Commands::Render { input, output, width, height } => {
                if let Some(width) = width {
                    settings.chart_width = width;
                }
                if let Some(height) = height {
                    settings.chart_height = height;
                }
                render(&settings, &input, output.as_deref()).await?;
            }
            Commands::Inspect { input, hover_x } => {
                inspect(&settings, &input, hover_x).await?;
            }
        }
        Ok(())
    }
}
