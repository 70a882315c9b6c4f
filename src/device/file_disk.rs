use std::{
    fs::{File, OpenOptions},
    io::{Error, ErrorKind, Read, Result, Seek, SeekFrom, Write},
    path::Path,
    sync::Mutex,
};

use serde::{Deserialize, Serialize};

use crate::{
    device::{
        block_store::BlockStore,
        types::{Block, BLOCKS_PER_DISK, BLOCK_SIZE, DISK_COUNT, VOLUME_CAPACITY},
    },
    utils::{current_timestamp, generate_uuid},
};

/// 卷镜像的魔数，用于识别镜像文件
const IMAGE_MAGIC: u64 = 0x4A42_4F44_564F_4C31; // "JBODVOL1"

/// 镜像文件开头保留的头部区域大小（字节），数据区从这之后开始
const HEADER_SIZE: u64 = 512;

/// 卷镜像头部
/// 持久化在镜像文件的头部区域，打开时校验魔数与几何参数。
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VolumeHeader {
    pub magic: u64,           // 魔数
    pub label: String,        // 卷标（随机 UUID）
    pub created_at: u64,      // 创建时间戳（秒）
    pub disk_count: u32,      // 磁盘数
    pub blocks_per_disk: u32, // 每盘块数
    pub block_size: u32,      // 块大小（字节）
}

impl VolumeHeader {
    fn new() -> Self {
        Self {
            magic: IMAGE_MAGIC,
            label: generate_uuid(),
            created_at: current_timestamp(),
            disk_count: DISK_COUNT,
            blocks_per_disk: BLOCKS_PER_DISK,
            block_size: BLOCK_SIZE as u32,
        }
    }

    fn matches_geometry(&self) -> bool {
        self.disk_count == DISK_COUNT
            && self.blocks_per_disk == BLOCKS_PER_DISK
            && self.block_size == BLOCK_SIZE as u32
    }
}

/// 文件介质：一个固定大小的镜像文件模拟整个磁盘阵列
#[derive(Debug)]
pub struct FileDisk {
    file: Mutex<File>,
    header: VolumeHeader,
}

impl FileDisk {
    /// 打开（或创建）卷镜像
    /// 新镜像写入头部并预分配全部容量；已有镜像校验头部。
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)?;

        let header = if file.metadata()?.len() == 0 {
            let header = VolumeHeader::new();
            let encoded = bincode::serialize(&header)
                .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
            if encoded.len() as u64 > HEADER_SIZE {
                return Err(Error::new(ErrorKind::InvalidData, "volume header too large"));
            }

            file.seek(SeekFrom::Start(0))?;
            file.write_all(&encoded)?;
            file.set_len(HEADER_SIZE + VOLUME_CAPACITY as u64)?; // 预分配空间
            header
        } else {
            let mut raw = [0u8; HEADER_SIZE as usize];
            file.seek(SeekFrom::Start(0))?;
            file.read_exact(&mut raw)?;

            let header: VolumeHeader = bincode::deserialize(&raw)
                .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;

            if header.magic != IMAGE_MAGIC {
                return Err(Error::new(ErrorKind::InvalidData, "not a volume image"));
            }
            if !header.matches_geometry() {
                return Err(Error::new(
                    ErrorKind::InvalidData,
                    "volume image geometry mismatch",
                ));
            }
            header
        };

        Ok(Self {
            file: Mutex::new(file),
            header,
        })
    }

    pub fn header(&self) -> &VolumeHeader {
        &self.header
    }
}

impl BlockStore for FileDisk {
    fn read_block(&self, block_id: u32, buf: &mut Block) -> Result<()> {
        let mut file = self.file.lock().unwrap();
        file.seek(SeekFrom::Start(
            HEADER_SIZE + block_id as u64 * BLOCK_SIZE as u64,
        ))?;
        file.read_exact(buf)?;
        Ok(())
    }

    fn write_block(&self, block_id: u32, buf: &Block) -> Result<()> {
        let mut file = self.file.lock().unwrap();
        file.seek(SeekFrom::Start(
            HEADER_SIZE + block_id as u64 * BLOCK_SIZE as u64,
        ))?;
        file.write_all(buf)?;
        Ok(())
    }
}
