use std::fmt;

use crate::device::DeviceError;

/// 驱动层错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    AlreadyMounted,                            // 重复挂载
    AlreadyUnmounted,                          // 重复卸载
    NotMounted,                                // 未挂载时发起读
    LengthExceeded(u32),                       // 请求长度超过单次上限，带请求长度
    OutOfRange { addr: u32, len: u32 },        // 地址区间越出卷容量
    InvalidBuffer,                             // 目标缓冲区不足以容纳请求
    InvalidCoordinate { disk: u32, block: u32 }, // 翻译出的坐标越界（上游 bug）
    ReadFailed(DeviceError),                   // 设备读块失败
    Device(DeviceError),                       // 其他设备错误
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyMounted => write!(f, "Volume is already mounted"),
            Self::AlreadyUnmounted => write!(f, "Volume is already unmounted"),
            Self::NotMounted => write!(f, "Volume is not mounted"),
            Self::LengthExceeded(len) => {
                write!(f, "Read length {} exceeds the per-call maximum", len)
            }
            Self::OutOfRange { addr, len } => {
                write!(
                    f,
                    "Range [{}, {}) is outside the volume",
                    addr,
                    *addr as u64 + *len as u64
                )
            }
            Self::InvalidBuffer => write!(f, "Destination buffer is too small"),
            Self::InvalidCoordinate { disk, block } => {
                write!(f, "Invalid coordinate: disk {}, block {}", disk, block)
            }
            Self::ReadFailed(e) => write!(f, "Block read failed: {}", e),
            Self::Device(e) => write!(f, "Device fault: {}", e),
        }
    }
}

// 支持链式错误，方便追踪设备层原因
impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadFailed(e) | Self::Device(e) => Some(e),
            _ => None,
        }
    }
}

/// 驱动统一结果类型
pub type Result<T> = std::result::Result<T, DriverError>;
