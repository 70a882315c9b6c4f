use std::fmt;

/// 设备层错误码
/// 设备原语以非 0 状态码报告错误，这里给出状态码与枚举的双向映射。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    BadCommand,       // 命令字非法
    Unmounted,        // 设备未挂载时收到 I/O
    AlreadyMounted,   // 重复挂载
    AlreadyUnmounted, // 重复卸载
    BadDiskNum,       // 磁盘号越界
    BadBlockNum,      // 块号越界
    BadRead,          // 读块失败
    BadWrite,         // 写块失败
    Unknown(u32),     // 未知状态码
}

impl DeviceError {
    /// 枚举对应的线上状态码（0 保留为成功，Unknown 不允许携带 0）
    pub fn code(&self) -> u32 {
        match self {
            Self::BadCommand => 1,
            Self::Unmounted => 2,
            Self::AlreadyMounted => 3,
            Self::AlreadyUnmounted => 4,
            Self::BadDiskNum => 5,
            Self::BadBlockNum => 6,
            Self::BadRead => 7,
            Self::BadWrite => 8,
            Self::Unknown(code) => {
                debug_assert!(*code != 0, "status code 0 is reserved for success");
                *code
            }
        }
    }

    /// 非 0 状态码还原为枚举，未知码一律落入 Unknown，不得静默当作成功
    pub fn from_code(code: u32) -> DeviceError {
        match code {
            1 => Self::BadCommand,
            2 => Self::Unmounted,
            3 => Self::AlreadyMounted,
            4 => Self::AlreadyUnmounted,
            5 => Self::BadDiskNum,
            6 => Self::BadBlockNum,
            7 => Self::BadRead,
            8 => Self::BadWrite,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadCommand => write!(f, "Malformed device command"),
            Self::Unmounted => write!(f, "Device is not mounted"),
            Self::AlreadyMounted => write!(f, "Device is already mounted"),
            Self::AlreadyUnmounted => write!(f, "Device is already unmounted"),
            Self::BadDiskNum => write!(f, "Disk number out of range"),
            Self::BadBlockNum => write!(f, "Block number out of range"),
            Self::BadRead => write!(f, "Device failed to read block"),
            Self::BadWrite => write!(f, "Device failed to write block"),
            Self::Unknown(code) => write!(f, "Unknown device status code: {}", code),
        }
    }
}

impl std::error::Error for DeviceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        let errors = [
            DeviceError::BadCommand,
            DeviceError::Unmounted,
            DeviceError::AlreadyMounted,
            DeviceError::AlreadyUnmounted,
            DeviceError::BadDiskNum,
            DeviceError::BadBlockNum,
            DeviceError::BadRead,
            DeviceError::BadWrite,
        ];
        for e in errors {
            assert_eq!(DeviceError::from_code(e.code()), e);
        }
    }

    #[test]
    fn unknown_code_is_not_swallowed() {
        assert_eq!(DeviceError::from_code(42), DeviceError::Unknown(42));
    }

    #[test]
    #[should_panic(expected = "reserved for success")]
    fn unknown_zero_cannot_masquerade_as_success() {
        let _ = DeviceError::Unknown(0).code();
    }

    #[test]
    fn zero_is_never_an_error_code() {
        let errors = [
            DeviceError::BadCommand,
            DeviceError::Unmounted,
            DeviceError::AlreadyMounted,
            DeviceError::AlreadyUnmounted,
            DeviceError::BadDiskNum,
            DeviceError::BadBlockNum,
            DeviceError::BadRead,
            DeviceError::BadWrite,
        ];
        for e in errors {
            assert_ne!(e.code(), 0);
        }
    }
}
