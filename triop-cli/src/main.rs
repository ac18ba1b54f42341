//! triop CLI - The triop expression evaluator command line interface.
//! triop CLI - triop 表达式求值器的命令行界面。

mod commands;
mod output;

use clap::{Parser, Subcommand};

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "triop")]
#[command(author, version, about = "triop - A three-token integer expression evaluator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Evaluate one expression. / 求值单个表达式。
    Eval {
        /// Expression tokens, e.g. `2 + 3`. / 表达式的词元，如 `2 + 3`。
        tokens: Vec<String>,
    },

    /// Evaluate expressions from a file, one per line. / 从文件逐行求值表达式。
    Batch {
        /// The file to read. / 要读取的文件。
        file: String,
    },

    /// Start an interactive REPL. / 启动交互式 REPL。
    Repl,
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval { tokens } => commands::eval::run(&tokens, cli.verbose),
        Commands::Batch { file } => commands::batch::run(&file, cli.verbose),
        Commands::Repl => commands::repl::run(),
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}
