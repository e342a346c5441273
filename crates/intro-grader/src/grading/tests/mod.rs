mod common;

mod engagement;
