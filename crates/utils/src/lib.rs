#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![no_std]

#[cfg(feature = "shortname")]
mod shortname;

#[cfg(feature = "shortname")]
pub use self::shortname::*;
