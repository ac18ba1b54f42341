//! Output formatting utilities.
//! 输出格式化工具。
//!
//! Colored terminal output for the CLI, one helper per severity.
//! CLI 的彩色终端输出，每个级别一个辅助函数。

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Print a success message in green.
/// 以绿色打印成功消息。
pub fn success(msg: &str) {
    println!("{GREEN}{msg}{RESET}");
}

/// Print an error message in red.
/// 以红色打印错误消息。
pub fn error(msg: &str) {
    eprintln!("{RED}error:{RESET} {msg}");
}

/// Print an info message in blue.
/// 以蓝色打印信息消息。
pub fn info(msg: &str) {
    println!("{BLUE}info:{RESET} {msg}");
}
