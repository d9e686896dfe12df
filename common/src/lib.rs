//! Bookshelf Scanner Common Library
//!
//! Types and utilities shared between the Web (WASM) front-end and
//! native tests: wire payloads, the data-URL codec, and the page
//! state machine.

pub mod codec;
pub mod error;
pub mod state;
pub mod types;

pub use codec::{decode_data_url, encode_data_url, DecodedImage};
pub use error::{Error, Result};
pub use state::{Action, ScanState, View};
pub use types::{CapturedImage, FacingMode, RecommendRequest, RecommendResponse, UploadResponse};
