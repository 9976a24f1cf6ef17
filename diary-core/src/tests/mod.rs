mod common;

pub(crate) use common::mk_config;
