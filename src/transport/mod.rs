//! Transport layer: wire-format details (JSON body encoding, response decoding).

mod send_sms;
mod text;

pub use send_sms::{TransportError, decode_send_sms_json_response, encode_send_sms_body};
