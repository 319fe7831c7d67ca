use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Run the analysis server and the web form
    Serve {
        /// Bind address (defaults to the configured one)
        #[clap(long)]
        host: Option<String>,
        /// Port (defaults to the configured one)
        #[clap(short, long)]
        port: Option<u16>,
        /// Open the form in a browser once the server is up
        #[clap(long)]
        open: bool,
    },
    /// Ask a running server to analyze one issue
    Analyze {
        #[clap(short, long)]
        repo_url: String,
        #[clap(short, long)]
        issue: u64,
        /// Use Gemini instead of OpenAI
        #[clap(short, long)]
        gemini: bool,
        /// Analysis server base URL (defaults to the configured one)
        #[clap(short, long)]
        server: Option<String>,
        /// Save the JSON result to this file
        #[clap(short, long)]
        output: Option<String>,
    },
}
