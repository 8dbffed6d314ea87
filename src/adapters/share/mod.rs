//! Share-link adapter: document ⇄ URL-fragment token.

pub mod link_codec;

pub use link_codec::{decode, encode, share_url, token_from_url, STATE_PARAM};
