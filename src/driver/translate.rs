use crate::device::{BLOCK_SIZE, DISK_SIZE};

/// 线性地址翻译出的卷内坐标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumePosition {
    pub disk: u32,   // 磁盘号
    pub block: u32,  // 盘内块号
    pub offset: u32, // 块内偏移
}

/// 把线性字节地址翻译为（磁盘，块，块内偏移）
/// 纯函数，对容量内的地址保证 disk/block 落在合法范围；
/// 越界检查由读引擎在发设备命令之前完成。
pub fn translate(addr: u32) -> VolumePosition {
    let disk = addr / DISK_SIZE;
    let within_disk = addr % DISK_SIZE;

    VolumePosition {
        disk,
        block: within_disk / BLOCK_SIZE as u32,
        offset: within_disk % BLOCK_SIZE as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{BLOCKS_PER_DISK, DISK_COUNT, VOLUME_CAPACITY};

    #[test]
    fn address_300_lands_in_disk_0_block_1_offset_44() {
        let pos = translate(300);
        assert_eq!(pos.disk, 0);
        assert_eq!(pos.block, 1);
        assert_eq!(pos.offset, 44);
    }

    #[test]
    fn address_zero_is_the_volume_origin() {
        assert_eq!(
            translate(0),
            VolumePosition {
                disk: 0,
                block: 0,
                offset: 0
            }
        );
    }

    #[test]
    fn disk_boundary_rolls_over_to_next_disk() {
        let pos = translate(DISK_SIZE);
        assert_eq!(pos.disk, 1);
        assert_eq!(pos.block, 0);
        assert_eq!(pos.offset, 0);
    }

    #[test]
    fn last_byte_of_the_volume() {
        let pos = translate(VOLUME_CAPACITY - 1);
        assert_eq!(pos.disk, DISK_COUNT - 1);
        assert_eq!(pos.block, BLOCKS_PER_DISK - 1);
        assert_eq!(pos.offset, BLOCK_SIZE as u32 - 1);
    }

    #[test]
    fn coordinates_stay_in_bounds_across_the_volume() {
        for addr in (0..VOLUME_CAPACITY).step_by(997) {
            let pos = translate(addr);
            assert!(pos.disk < DISK_COUNT);
            assert!(pos.block < BLOCKS_PER_DISK);
            assert!(pos.offset < BLOCK_SIZE as u32);
        }
    }
}
