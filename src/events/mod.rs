pub mod form;
pub mod pointer;
