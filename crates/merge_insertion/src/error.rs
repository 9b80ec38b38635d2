use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum Error {
    #[error("jacobsthal number J({index}) does not fit in 64 bits")]
    JacobsthalOverflow { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
