mod status;
mod view;

pub use status::UploadStatusView;
pub use view::Upload;
