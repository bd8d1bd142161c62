//! Protocol Module
//!
//! Wire formats for the row lookup exchange.
//!
//! ## Request Formats
//! - Legacy (servers before the 0.95 cutover): positional parameters written
//!   into a buffer sized up front. Method `get` or `exists`.
//! - Structured (0.95 and later): a `GetRequest` protobuf message. Method
//!   `Get` for both kinds; existence checks set `existence_only`.
//!
//! ## Response Format
//! ```text
//! ┌────────────┬─────────────────────┬─────────────────────────────┐
//! │ Len (vint) │ GetResponse message │ Cell block (declared len)   │
//! └────────────┴─────────────────────┴─────────────────────────────┘
//! ```

pub mod pb;

mod codec;
mod legacy;
mod response;
mod structured;
mod version;

pub use codec::{EncodedGet, GetCodec, OutboundGet};
pub use legacy::{predict_serialized_size, serialize_legacy, SizedBuffer, MAX_PREFIXED_LEN};
pub use response::{convert_result, decode_get_response, read_response_message, GetResult};
pub use structured::build_get_request;
pub use version::{
    method_name, ServerVersion, WireFormat, METHOD_EXISTS, METHOD_GET, METHOD_GET_STRUCTURED,
};
