mod common;

mod domain;
