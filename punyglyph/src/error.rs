use crate::permutate::PermutationError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    PermutationError(#[from] PermutationError),
}
