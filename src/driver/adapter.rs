use crate::device::{Block, Command, DeviceError, DeviceHandle};

/// 设备操作适配器
/// 负责把命令编码成命令字、调用设备原语、把非 0 状态码映射回枚举。
/// 错误的严重程度由调用方判定，适配器只做翻译。
#[derive(Debug)]
pub struct DeviceAdapter<D: DeviceHandle> {
    device: D,
}

impl<D: DeviceHandle> DeviceAdapter<D> {
    pub fn new(device: D) -> Self {
        Self { device }
    }

    pub fn invoke(
        &mut self,
        command: Command,
        buf: Option<&mut Block>,
    ) -> Result<(), DeviceError> {
        match self.device.operation(command.encode(), buf) {
            0 => Ok(()),
            code => Err(DeviceError::from_code(code)),
        }
    }

    pub fn device(&self) -> &D {
        &self.device
    }
}
