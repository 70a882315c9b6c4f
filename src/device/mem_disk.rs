use std::{
    io::{Error, ErrorKind, Result},
    sync::Mutex,
};

use crate::device::{
    block_store::BlockStore,
    types::{Block, BLOCKS_PER_DISK, BLOCK_SIZE, DISK_COUNT, VOLUME_CAPACITY},
};

/// 内存介质，用于测试和一次性卷
#[derive(Debug)]
pub struct MemDisk {
    bytes: Mutex<Vec<u8>>, // 扁平化存储，全部容量一次分配
}

impl MemDisk {
    pub fn new() -> Self {
        Self {
            bytes: Mutex::new(vec![0u8; VOLUME_CAPACITY as usize]),
        }
    }
}

impl Default for MemDisk {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockStore for MemDisk {
    fn read_block(&self, block_id: u32, buf: &mut Block) -> Result<()> {
        if block_id >= DISK_COUNT * BLOCKS_PER_DISK {
            return Err(Error::new(ErrorKind::InvalidInput, "block id out of range"));
        }
        let bytes = self.bytes.lock().unwrap();
        let start = block_id as usize * BLOCK_SIZE;
        buf.copy_from_slice(&bytes[start..start + BLOCK_SIZE]);
        Ok(())
    }

    fn write_block(&self, block_id: u32, buf: &Block) -> Result<()> {
        if block_id >= DISK_COUNT * BLOCKS_PER_DISK {
            return Err(Error::new(ErrorKind::InvalidInput, "block id out of range"));
        }
        let mut bytes = self.bytes.lock().unwrap();
        let start = block_id as usize * BLOCK_SIZE;
        bytes[start..start + BLOCK_SIZE].copy_from_slice(buf);
        Ok(())
    }
}
