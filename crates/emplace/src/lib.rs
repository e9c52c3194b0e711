#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![no_std]

extern crate alloc;

mod new;
mod renew;

pub use self::{new::*, renew::*};
