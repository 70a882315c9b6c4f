pub mod command;
pub mod parse;

use crate::{
    device::{FileDisk, Jbod},
    driver::Driver,
    shell::{
        command::{execute_command, ShellCommand, VolumeDriver},
        parse::parse_command,
    },
};
use colored::*;
use crossterm::{
    cursor, execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::{io::stdout, path::PathBuf, thread, time::Duration};

/// 卷镜像文件路径
const IMAGE_PATH: &str = "volume.img";

pub fn start_shell() {
    boot_animation();

    // 打开（或创建）卷镜像并搭建驱动
    let disk = match FileDisk::open(IMAGE_PATH) {
        Ok(d) => d,
        Err(e) => {
            println!("{} {}", "❌ Failed to open volume image:".red().bold(), e);
            return;
        }
    };
    let mut driver: VolumeDriver = Driver::new(Jbod::new(disk));

    let username = whoami::username();
    let hostname = whoami::hostname();

    println!(
        "{}",
        "Type 'help' for available commands. Use ↑↓ for history, Tab for auto-completion.\n"
            .bright_black()
    );

    // 初始化 reedline
    let history_path = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".jbod_history");

    let mut line_editor = Reedline::create().with_history(Box::new(
        reedline::FileBackedHistory::with_file(100, history_path).unwrap(),
    ));

    // 命令补全
    let commands: Vec<String> = ["help", "info", "mount", "unmount", "read", "exit"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let completer = reedline::DefaultCompleter::new_with_wordlen(commands, 2);
    line_editor = line_editor.with_completer(Box::new(completer));

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic(format!("{}@{}", username, hostname)),
        DefaultPromptSegment::Basic("JBOD".to_string()),
    );

    loop {
        let input = line_editor.read_line(&prompt);

        match input {
            Ok(Signal::Success(buffer)) => {
                let trimmed = buffer.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match parse_command(trimmed) {
                    Some(cmd) => {
                        if let Err(e) = execute_command(&cmd, &mut driver) {
                            println!("{} {}", "❌ Error:".red().bold(), e);
                        }
                        if matches!(cmd, ShellCommand::Exit) {
                            break;
                        }
                    }
                    None => println!(
                        "{}",
                        "⚠️  Unknown command. Type 'help' for command list.".yellow()
                    ),
                }
            }
            Ok(Signal::CtrlC) => {
                println!();
                continue;
            }
            Ok(Signal::CtrlD) => {
                println!("{}", "Exiting JBOD shell...".yellow());
                break;
            }
            Err(e) => {
                println!("Error reading line: {}", e);
                break;
            }
        }
    }

    // 退出前把卷卸干净
    if driver.is_mounted() {
        let _ = driver.unmount();
    }

    println!("{}", "GoodBye!".bright_yellow());
}

///动态欢迎动画
fn boot_animation() {
    let mut stdout = stdout();

    execute!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0)).unwrap();
    println!("{}", "[JBOD Booting...]".bright_yellow().bold());
    thread::sleep(Duration::from_millis(300));

    let steps = vec![
        "🧠 Initializing disk array...",
        "⚙️  Attaching volume image...",
        "📁 Loading shell...",
    ];

    for step in steps {
        println!("{}", step);
        thread::sleep(Duration::from_millis(400));
    }

    // 模拟进度条
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos:>3}% {msg}")
            .unwrap()
            .progress_chars("=> "),
    );

    for i in 0..100 {
        pb.set_position(i);
        thread::sleep(Duration::from_millis(8));
    }
    pb.finish_with_message("✅ Ready!");

    thread::sleep(Duration::from_millis(300));
    execute!(
        stdout,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        SetForegroundColor(Color::Cyan),
        Print("Welcome to JBOD v0.1.0\n"),
        ResetColor
    )
    .unwrap();
}
