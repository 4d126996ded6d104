use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "course-registration")]
#[command(about = "Register students for courses and keep the enrollments in a JSON file")]
pub struct CliConfig {
    /// Enrollment file to load and save [default: enrollments.json]
    #[arg(long)]
    pub file: Option<String>,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub json_logs: bool,
}
