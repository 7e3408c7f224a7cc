use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to lock mutex: poisoned"))]
    LockPoisoned,

    #[snafu(display("No view-model registered for page {page}"))]
    MissingPage { page: String },
}

pub type Result<T> = std::result::Result<T, Error>;
