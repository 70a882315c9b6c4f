use colored::*;
use std::error::Error;

use crate::{
    device::{FileDisk, Jbod, BLOCKS_PER_DISK, BLOCK_SIZE, DISK_COUNT, VOLUME_CAPACITY},
    driver::{config::MAX_READ_LEN, error::DriverError, Driver},
};

/// 交互卷驱动的具体类型：文件介质上的模拟设备
pub type VolumeDriver = Driver<Jbod<FileDisk>>;

#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    Info,
    Mount,
    Unmount,
    Read(u32, u32),
    Exit,
}

pub fn execute_command(cmd: &ShellCommand, driver: &mut VolumeDriver) -> Result<(), Box<dyn Error>> {
    match cmd {
        ShellCommand::Help => print_help(),
        ShellCommand::Info => print_info(driver),
        ShellCommand::Mount => {
            driver.mount()?;
            println!("{}", "✅ Volume mounted".green());
        }
        ShellCommand::Unmount => {
            driver.unmount()?;
            println!("{}", "✅ Volume unmounted".green());
        }
        ShellCommand::Read(addr, len) => {
            // 超限的请求在分配缓冲区之前就拒绝，避免按非法长度分配
            if *len > MAX_READ_LEN {
                return Err(Box::new(DriverError::LengthExceeded(*len)));
            }
            let mut buf = vec![0u8; *len as usize];
            let n = driver.read(*addr, *len, &mut buf)?;
            println!(
                "📖 Read {} bytes at address {}",
                n.to_string().green(),
                format!("{:#x}", addr).cyan()
            );
            hex_dump(*addr, &buf[..n as usize]);
        }
        ShellCommand::Exit => println!("{}", "👋 Exiting JBOD shell...".yellow().bold()),
    }

    Ok(())
}

fn print_info(driver: &VolumeDriver) {
    let header = driver.device().store().header();

    println!("{}", "📊 Volume Info".bright_yellow().bold());
    println!("{}: {}", "Label".blue(), header.label);
    println!("{}: {}", "Created".blue(), header.created_at);
    println!(
        "{}: {} disks x {} blocks x {} bytes = {} bytes",
        "Geometry".blue(),
        DISK_COUNT,
        BLOCKS_PER_DISK,
        BLOCK_SIZE,
        VOLUME_CAPACITY
    );
    println!(
        "{}: {}",
        "Mounted".blue(),
        if driver.is_mounted() {
            "yes".green()
        } else {
            "no".red()
        }
    );
    match driver.cursor() {
        Some(cursor) => println!(
            "{}: disk {}, block {}",
            "Cursor".blue(),
            cursor.disk,
            cursor.block
        ),
        None => println!("{}: -", "Cursor".blue()),
    }
}

/// 以 16 字节一行的格式打印读出的内容
fn hex_dump(start_addr: u32, bytes: &[u8]) {
    for (row, chunk) in bytes.chunks(16).enumerate() {
        let addr = start_addr as usize + row * 16;

        let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
        let ascii: String = chunk
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect();

        println!(
            "{}  {:<47}  {}",
            format!("{:08x}", addr).cyan(),
            hex.join(" "),
            ascii.bright_black()
        );
    }
}

fn print_help() {
    println!("{}", "📘 JBOD Shell Commands".bright_cyan().bold());
    println!(
        "{}",
        format!(
            "
  info                Show volume geometry and state
  mount               Mount the volume
  unmount             Unmount the volume
  read <addr> <len>   Read bytes (len <= {}, addr may be 0x-hex)
  help                Show this help message
  exit                Quit the shell
",
            MAX_READ_LEN
        )
        .bright_black()
    );
}
