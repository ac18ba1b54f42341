//! The `triop repl` command.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use triop_eval::evaluate;
use triop_expr::Expression;

use crate::output;

pub fn run() -> Result<(), String> {
    println!("triop REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for help, :quit to exit");
    println!();

    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;

    loop {
        let readline = rl.readline("triop> ");
        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Handle REPL commands
                if line.starts_with(':') {
                    match line {
                        ":quit" | ":q" => break,
                        ":help" | ":h" => {
                            println!("Commands:");
                            println!("  :help, :h    Show this help");
                            println!("  :quit, :q    Exit the REPL");
                            println!();
                            println!("Enter an expression as three tokens, e.g. 2 + 3");
                            continue;
                        }
                        _ => {
                            println!("Unknown command: {}", line);
                            continue;
                        }
                    }
                }

                match evaluate(&Expression::parse_line(line)) {
                    Ok(value) => output::success(&value.to_string()),
                    Err(e) => output::error(&e.to_string()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}
