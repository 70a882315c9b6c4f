// 单次 read 调用允许的最大传输量（字节），外部约定的上限
pub const MAX_READ_LEN: u32 = 1024;
