//! File transfer adapter: snapshot export and upload import.

mod json_file;

pub use json_file::{
    export_file, import_file, read_upload, ImportError, TransferError, SNAPSHOT_FILE_NAME,
    SNAPSHOT_MEDIA_TYPE,
};
