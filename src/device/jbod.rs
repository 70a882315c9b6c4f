use crate::device::{
    block_store::BlockStore,
    command::Command,
    error::DeviceError,
    types::{Block, BLOCKS_PER_DISK, DISK_COUNT},
};

/// 设备原语接口
/// 一次调用执行一个命令字：0 表示成功，非 0 为设备错误码。
/// 控制类操作不带缓冲区，读写块必须带一个整块缓冲区。
pub trait DeviceHandle {
    fn operation(&mut self, command: u32, buf: Option<&mut Block>) -> u32;
}

/// 模拟的磁盘阵列设备
/// 设备自身记住“当前磁盘/当前块”，读写成功后当前块自动加一，
/// 因此交错使用会破坏位置状态，调用方必须串行访问。
#[derive(Debug)]
pub struct Jbod<S: BlockStore> {
    store: S,
    mounted: bool,
    current_disk: u32,
    current_block: u32,
}

impl<S: BlockStore> Jbod<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            mounted: false,
            current_disk: 0,
            current_block: 0,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn global_block_id(&self) -> u32 {
        self.current_disk * BLOCKS_PER_DISK + self.current_block
    }

    fn execute(&mut self, command: Command, buf: Option<&mut Block>) -> Result<(), DeviceError> {
        match command {
            Command::Mount => {
                if self.mounted {
                    return Err(DeviceError::AlreadyMounted);
                }
                self.mounted = true;
                self.current_disk = 0;
                self.current_block = 0;
                Ok(())
            }
            Command::Unmount => {
                if !self.mounted {
                    return Err(DeviceError::AlreadyUnmounted);
                }
                self.mounted = false;
                Ok(())
            }
            Command::SeekToDisk(disk) => {
                if !self.mounted {
                    return Err(DeviceError::Unmounted);
                }
                if disk >= DISK_COUNT {
                    return Err(DeviceError::BadDiskNum);
                }
                self.current_disk = disk;
                self.current_block = 0;
                Ok(())
            }
            Command::SeekToBlock(block) => {
                if !self.mounted {
                    return Err(DeviceError::Unmounted);
                }
                if block >= BLOCKS_PER_DISK {
                    return Err(DeviceError::BadBlockNum);
                }
                self.current_block = block;
                Ok(())
            }
            Command::ReadBlock(_) => {
                if !self.mounted {
                    return Err(DeviceError::Unmounted);
                }
                // 读块必须带缓冲区
                let buf = buf.ok_or(DeviceError::BadCommand)?;
                if self.current_block >= BLOCKS_PER_DISK {
                    return Err(DeviceError::BadBlockNum);
                }
                self.store
                    .read_block(self.global_block_id(), buf)
                    .map_err(|_| DeviceError::BadRead)?;
                self.current_block += 1;
                Ok(())
            }
            Command::WriteBlock(_) => {
                if !self.mounted {
                    return Err(DeviceError::Unmounted);
                }
                let buf = buf.ok_or(DeviceError::BadCommand)?;
                if self.current_block >= BLOCKS_PER_DISK {
                    return Err(DeviceError::BadBlockNum);
                }
                self.store
                    .write_block(self.global_block_id(), buf)
                    .map_err(|_| DeviceError::BadWrite)?;
                self.current_block += 1;
                Ok(())
            }
        }
    }
}

impl<S: BlockStore> DeviceHandle for Jbod<S> {
    fn operation(&mut self, command: u32, buf: Option<&mut Block>) -> u32 {
        let Some(command) = Command::decode(command) else {
            return DeviceError::BadCommand.code();
        };
        match self.execute(command, buf) {
            Ok(()) => 0,
            Err(e) => e.code(),
        }
    }
}
