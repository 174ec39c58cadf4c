use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trifix::FixtureKind;

#[derive(Parser)]
#[command(name = "trifix")]
#[command(about = "Degenerate-geometry fixture generator", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Settings file (default: ./trifix.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed the random source for reproducible output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Directory fixtures are written into (default: current directory)
    #[arg(long, global = true)]
    pub out_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Points in a big triangle on x+y+z=0, mostly repeated (13.dat)
    BigTriangle {
        /// Output file (default: <out-dir>/13.dat)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Triangles on 10 parallel planes x+y+z=a (27.dat)
    ParallelPlanes {
        /// Output file (default: <out-dir>/27.dat)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Line segments on the plane x+y+z=0 (15.dat)
    SegmentsOnPlane {
        /// Output file (default: <out-dir>/15.dat)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Segments on the line x=y=z (16.dat)
    SegmentsOnLine {
        /// Output file (default: <out-dir>/16.dat)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Triangles with one edge on the line x=y=z (17.dat)
    CollinearEdge {
        /// Output file (default: <out-dir>/17.dat)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate every fixture into the output directory
    All,

    /// List fixture kinds, file names and triangle counts
    List,

    /// Check a fixture's header against its body and its geometric invariants
    Verify {
        /// Fixture file to check
        file: PathBuf,

        /// Fixture kind (default: inferred from the file name)
        #[arg(short, long)]
        kind: Option<FixtureKind>,
    },

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },
}
