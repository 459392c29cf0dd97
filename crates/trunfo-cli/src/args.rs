use clap::Parser;

/// CLI arguments for trunfo
#[derive(Debug, Parser)]
#[command(
    name = "trunfo",
    version,
    about = "Interactive Super Trunfo duel between two city cards"
)]
pub struct CliArgs {
    /// Play the basic variant: no SUPER PODER attribute and no final
    /// comparison table
    #[arg(short = 'b', long = "basic")]
    pub basic: bool,
}
