use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Enumerates every start-to-end path through a cave system.", long_about = None)]
pub struct Cli {
    /// Edge list file, one `A-B` record per line
    pub edges_file: PathBuf,

    /// Allow one small cave per path to be visited twice.
    #[clap(short, long)]
    pub relaxed: bool,

    /// Suppress verbose output and the path listing, only printing the counts.
    #[clap(short, long)]
    pub quiet: bool,

    /// Write the report to this file instead of stdout.
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose log file.
    #[clap(long, default_value = "cave_paths.log")]
    pub log_file: PathBuf,

    /// File receiving the adjacency dump of the parsed cave system.
    #[clap(long, default_value = "graph_details.log")]
    pub graph_log: PathBuf,
}
