/// 设备命令
/// 命令字的位布局只在本文件中出现：
///   bits 12..16  操作码
///   bits 4..12   块号（仅 SeekToBlock 使用）
///   bits 0..4    磁盘号（寻盘 / 读写操作使用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Mount,
    Unmount,
    SeekToDisk(u32),
    SeekToBlock(u32),
    ReadBlock(u32),
    WriteBlock(u32),
}

const OPCODE_SHIFT: u32 = 12;
const OPCODE_MASK: u32 = 0xF;
const BLOCK_SHIFT: u32 = 4;
const BLOCK_MASK: u32 = 0xFF;
const DISK_MASK: u32 = 0xF;

const OP_MOUNT: u32 = 0;
const OP_UNMOUNT: u32 = 1;
const OP_SEEK_TO_DISK: u32 = 2;
const OP_SEEK_TO_BLOCK: u32 = 3;
const OP_READ_BLOCK: u32 = 4;
const OP_WRITE_BLOCK: u32 = 5;

impl Command {
    /// 编码为 32 位命令字
    pub fn encode(&self) -> u32 {
        match *self {
            Command::Mount => OP_MOUNT << OPCODE_SHIFT,
            Command::Unmount => OP_UNMOUNT << OPCODE_SHIFT,
            Command::SeekToDisk(disk) => (OP_SEEK_TO_DISK << OPCODE_SHIFT) | (disk & DISK_MASK),
            Command::SeekToBlock(block) => {
                (OP_SEEK_TO_BLOCK << OPCODE_SHIFT) | ((block & BLOCK_MASK) << BLOCK_SHIFT)
            }
            Command::ReadBlock(disk) => (OP_READ_BLOCK << OPCODE_SHIFT) | (disk & DISK_MASK),
            Command::WriteBlock(disk) => (OP_WRITE_BLOCK << OPCODE_SHIFT) | (disk & DISK_MASK),
        }
    }

    /// 从命令字还原命令，操作码非法时返回 None
    pub fn decode(word: u32) -> Option<Command> {
        let opcode = (word >> OPCODE_SHIFT) & OPCODE_MASK;
        let disk = word & DISK_MASK;
        let block = (word >> BLOCK_SHIFT) & BLOCK_MASK;

        match opcode {
            OP_MOUNT => Some(Command::Mount),
            OP_UNMOUNT => Some(Command::Unmount),
            OP_SEEK_TO_DISK => Some(Command::SeekToDisk(disk)),
            OP_SEEK_TO_BLOCK => Some(Command::SeekToBlock(block)),
            OP_READ_BLOCK => Some(Command::ReadBlock(disk)),
            OP_WRITE_BLOCK => Some(Command::WriteBlock(disk)),
            _ => None,
        }
    }
}
