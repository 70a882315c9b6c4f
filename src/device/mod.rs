pub mod block_store;
pub mod command;
pub mod error;
pub mod file_disk;
pub mod jbod;
pub mod mem_disk;
pub mod types;

pub use block_store::BlockStore;
pub use command::Command;
pub use error::DeviceError;
pub use file_disk::FileDisk;
pub use jbod::{DeviceHandle, Jbod};
pub use mem_disk::MemDisk;
pub use types::{Block, BLOCKS_PER_DISK, BLOCK_SIZE, DISK_COUNT, DISK_SIZE, VOLUME_CAPACITY};
