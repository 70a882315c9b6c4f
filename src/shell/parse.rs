use crate::shell::command::ShellCommand;

/// 解析数字参数，支持十进制和 0x 前缀的十六进制
fn parse_u32(token: &str) -> Option<u32> {
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok()
    } else {
        token.parse().ok()
    }
}

pub fn parse_command(input: &str) -> Option<ShellCommand> {
    let tokens: Vec<&str> = input.trim().split_ascii_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    let cmd = tokens[0];
    let args = &tokens[1..];

    match cmd {
        "help" => Some(ShellCommand::Help),
        "info" => Some(ShellCommand::Info),
        "mount" => Some(ShellCommand::Mount),
        "unmount" => Some(ShellCommand::Unmount),
        "read" => {
            if args.len() == 2 {
                Some(ShellCommand::Read(
                    parse_u32(args[0])?,
                    parse_u32(args[1])?,
                ))
            } else {
                None
            }
        }
        "exit" => Some(ShellCommand::Exit),
        _ => None,
    }
}
