mod file_storage;
mod local_disk_storage;
mod upload_policy;

pub use file_storage::{FileStorage, StorageError, UploadedFile};
pub use local_disk_storage::LocalDiskStorage;
pub use upload_policy::{UploadPolicy, UploadRejected};
