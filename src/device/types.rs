/// 磁盘阵列中的磁盘数量
pub const DISK_COUNT: u32 = 16;

/// 每个磁盘包含的块数
pub const BLOCKS_PER_DISK: u32 = 128;

/// 每个块的大小（字节）
/// 设备以“块”为最小读写单位。
pub const BLOCK_SIZE: usize = 256;

/// 单个磁盘的容量（单位：字节）：128 * 256 = 32KB
pub const DISK_SIZE: u32 = BLOCKS_PER_DISK * BLOCK_SIZE as u32;

/// 整个逻辑卷的容量（单位：字节）：16 * 32KB = 512KB
pub const VOLUME_CAPACITY: u32 = DISK_COUNT * DISK_SIZE;

/// 定义一个逻辑块类型（每块 256 字节的数组）
/// 所有设备读写都以 Block 为单位进行。
pub type Block = [u8; BLOCK_SIZE];
