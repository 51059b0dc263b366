use std::path::PathBuf;

use clap::Parser;

use rst2xyz::io::xyz::DEFAULT_TITLE;

#[derive(Parser)]
#[command(
    name = "rst2xyz",
    about = "Convert AMBER restart snapshots into OPTIM-ready XYZ frames",
    version,
    before_help = crate::display::banner_for_help()
)]
pub struct Cli {
    /// Manifest listing restart files, one per line (prompted if omitted)
    #[arg(value_name = "MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// PDB structure file defining the atom-name order (prompted if omitted)
    #[arg(value_name = "STRUCTURE")]
    pub structure: Option<PathBuf>,

    /// Directory receiving the XYZ artifacts
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Artifact basename: <NAME>.<frame index>.xyz
    #[arg(long, value_name = "NAME", default_value = DEFAULT_TITLE)]
    pub basename: String,

    /// Title literal written as line 2 of every artifact
    #[arg(long, value_name = "TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Fail on restart files carrying fewer coordinates than structure atoms
    #[arg(long)]
    pub strict: bool,

    /// Continue past failed entries and report them all at the end
    #[arg(long)]
    pub keep_going: bool,

    /// Suppress banner and progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
