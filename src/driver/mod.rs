use crate::{
    device::{Command, DeviceHandle},
    driver::{
        adapter::DeviceAdapter,
        error::{DriverError, Result},
    },
};

pub mod adapter;
pub mod config;
pub mod error;
pub mod read;
pub mod translate;

/// 最近一次访问到的卷内位置，仅用于展示和调试，不参与正确性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub disk: u32,
    pub block: u32,
}

/// 卷驱动
/// 显式持有设备句柄、挂载标志和游标，不依赖任何全局状态，
/// 因此测试里可以同时打开多个互不相干的卷。
#[derive(Debug)]
pub struct Driver<D: DeviceHandle> {
    adapter: DeviceAdapter<D>,
    mounted: bool,
    cursor: Option<Cursor>,
}

impl<D: DeviceHandle> Driver<D> {
    pub fn new(device: D) -> Self {
        Self {
            adapter: DeviceAdapter::new(device),
            mounted: false,
            cursor: None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    pub fn device(&self) -> &D {
        self.adapter.device()
    }

    pub(crate) fn adapter_mut(&mut self) -> &mut DeviceAdapter<D> {
        &mut self.adapter
    }

    pub(crate) fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = Some(cursor);
    }

    /// 挂载卷
    /// 已挂载时直接拒绝；设备失败时保持未挂载状态。
    pub fn mount(&mut self) -> Result<()> {
        if self.mounted {
            return Err(DriverError::AlreadyMounted);
        }
        self.adapter
            .invoke(Command::Mount, None)
            .map_err(DriverError::Device)?;
        self.mounted = true;
        Ok(())
    }

    /// 卸载卷，与 mount 对称
    pub fn unmount(&mut self) -> Result<()> {
        if !self.mounted {
            return Err(DriverError::AlreadyUnmounted);
        }
        self.adapter
            .invoke(Command::Unmount, None)
            .map_err(DriverError::Device)?;
        self.mounted = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{Block, DeviceError, Jbod, MemDisk};

    fn new_driver() -> Driver<Jbod<MemDisk>> {
        Driver::new(Jbod::new(MemDisk::new()))
    }

    /// 让下一次挂载/卸载命令在设备层失败一次的包装
    struct FaultyDevice<D: DeviceHandle> {
        inner: D,
        fail_next_mount: bool,
        fail_next_unmount: bool,
    }

    impl<D: DeviceHandle> DeviceHandle for FaultyDevice<D> {
        fn operation(&mut self, command: u32, buf: Option<&mut Block>) -> u32 {
            match Command::decode(command) {
                Some(Command::Mount) if self.fail_next_mount => {
                    self.fail_next_mount = false;
                    DeviceError::BadCommand.code()
                }
                Some(Command::Unmount) if self.fail_next_unmount => {
                    self.fail_next_unmount = false;
                    DeviceError::BadCommand.code()
                }
                _ => self.inner.operation(command, buf),
            }
        }
    }

    #[test]
    fn mount_twice_rejects_the_second_call() {
        let mut driver = new_driver();
        assert!(driver.mount().is_ok());
        assert_eq!(driver.mount(), Err(DriverError::AlreadyMounted));
        assert!(driver.is_mounted());
    }

    #[test]
    fn unmount_without_mount_is_rejected() {
        let mut driver = new_driver();
        assert_eq!(driver.unmount(), Err(DriverError::AlreadyUnmounted));
    }

    #[test]
    fn mount_unmount_round_trip() {
        let mut driver = new_driver();
        assert!(driver.mount().is_ok());
        assert!(driver.unmount().is_ok());
        assert!(!driver.is_mounted());
        assert!(driver.mount().is_ok());
    }

    #[test]
    fn mount_device_fault_leaves_state_unmounted() {
        let mut driver = Driver::new(FaultyDevice {
            inner: Jbod::new(MemDisk::new()),
            fail_next_mount: true,
            fail_next_unmount: false,
        });

        assert_eq!(
            driver.mount(),
            Err(DriverError::Device(DeviceError::BadCommand))
        );
        assert!(!driver.is_mounted());

        // 状态没被污染，重试可以成功
        assert!(driver.mount().is_ok());
        assert!(driver.is_mounted());
    }

    #[test]
    fn unmount_device_fault_leaves_state_mounted() {
        let mut driver = Driver::new(FaultyDevice {
            inner: Jbod::new(MemDisk::new()),
            fail_next_mount: false,
            fail_next_unmount: true,
        });
        assert!(driver.mount().is_ok());

        assert_eq!(
            driver.unmount(),
            Err(DriverError::Device(DeviceError::BadCommand))
        );
        assert!(driver.is_mounted());

        assert!(driver.unmount().is_ok());
        assert!(!driver.is_mounted());
    }

    #[test]
    fn independent_volumes_do_not_share_state() {
        let mut a = new_driver();
        let mut b = new_driver();
        assert!(a.mount().is_ok());
        assert!(!b.is_mounted());
        assert_eq!(b.unmount(), Err(DriverError::AlreadyUnmounted));
        assert!(b.mount().is_ok());
        assert!(a.unmount().is_ok());
    }
}
