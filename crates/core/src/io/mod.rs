//! I/O operations for reading and writing grayscale images

mod codec;

pub use codec::{
    read_image, read_image_from_buffer, write_image, write_image_to_buffer, ImageFormat,
    ImageOptions,
};
