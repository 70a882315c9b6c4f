use crate::{
    device::{
        Block, Command, DeviceHandle, BLOCKS_PER_DISK, BLOCK_SIZE, DISK_COUNT, VOLUME_CAPACITY,
    },
    driver::{
        config::MAX_READ_LEN,
        error::{DriverError, Result},
        translate::translate,
        Cursor, Driver,
    },
};

impl<D: DeviceHandle> Driver<D> {
    /// 从卷的线性地址空间读出 len 个字节到 dest
    /// 设备只认整块，任意字节区间的读都被拆成整块传输，
    /// 每轮从暂存块里截取 min(块剩余, 请求剩余) 字节拼进 dest。
    ///
    /// 中途失败时 dest 里已经拷入的字节不会回滚，调用方必须把
    /// 非成功返回之后的缓冲区内容当作未定义。
    pub fn read(&mut self, start_addr: u32, len: u32, dest: &mut [u8]) -> Result<u32> {
        if len > MAX_READ_LEN {
            return Err(DriverError::LengthExceeded(len));
        }
        if !self.is_mounted() {
            return Err(DriverError::NotMounted);
        }
        if start_addr >= VOLUME_CAPACITY
            || start_addr as u64 + len as u64 > VOLUME_CAPACITY as u64
        {
            return Err(DriverError::OutOfRange {
                addr: start_addr,
                len,
            });
        }
        if (dest.len() as u64) < len as u64 {
            return Err(DriverError::InvalidBuffer);
        }

        let mut bytes_read: u32 = 0;
        let mut current_addr = start_addr;

        while bytes_read < len {
            let pos = translate(current_addr);

            // 容量内的地址不可能翻译出界，出界说明上游有 bug
            if pos.disk >= DISK_COUNT || pos.block >= BLOCKS_PER_DISK {
                return Err(DriverError::InvalidCoordinate {
                    disk: pos.disk,
                    block: pos.block,
                });
            }
            self.set_cursor(Cursor {
                disk: pos.disk,
                block: pos.block,
            });

            self.adapter_mut()
                .invoke(Command::SeekToDisk(pos.disk), None)
                .map_err(DriverError::Device)?;
            self.adapter_mut()
                .invoke(Command::SeekToBlock(pos.block), None)
                .map_err(DriverError::Device)?;

            let mut staging: Block = [0; BLOCK_SIZE];
            self.adapter_mut()
                .invoke(Command::ReadBlock(pos.disk), Some(&mut staging))
                .map_err(DriverError::ReadFailed)?;

            // 首尾的不完整块由这条 min 决定实际拷贝量
            let chunk = (BLOCK_SIZE as u32 - pos.offset).min(len - bytes_read);

            let dest_start = bytes_read as usize;
            let src_start = pos.offset as usize;
            dest[dest_start..dest_start + chunk as usize]
                .copy_from_slice(&staging[src_start..src_start + chunk as usize]);

            bytes_read += chunk;
            current_addr += chunk;
        }

        Ok(bytes_read)
    }
}
