//! Command-line interface for bridgeit.

use clap::Parser;
use std::path::PathBuf;

/// Bridge-it - connect your sides of the board before your opponent does
#[derive(Parser, Debug, Default)]
#[command(name = "bridgeit")]
#[command(about = "Two-player Bridge-it connection game in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML); flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of node rows (3-20)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of node columns (3-20)
    #[arg(long)]
    pub cols: Option<usize>,

    /// Name of player 1 (connects top and bottom)
    #[arg(long)]
    pub player1: Option<String>,

    /// Name of player 2 (connects left and right)
    #[arg(long)]
    pub player2: Option<String>,

    /// Ask for board size and player names before starting
    #[arg(long)]
    pub setup: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
