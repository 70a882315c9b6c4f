use std::io::Result;

use crate::device::types::Block;

/// 介质后端：按全局块号（disk * BLOCKS_PER_DISK + block）存取整块数据
pub trait BlockStore: Send + Sync {
    fn read_block(&self, block_id: u32, buf: &mut Block) -> Result<()>;
    fn write_block(&self, block_id: u32, buf: &Block) -> Result<()>;
}
